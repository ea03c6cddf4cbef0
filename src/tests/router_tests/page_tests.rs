use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, sample_site};
use crate::templates::html_error_response;
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_loads() {
    let site = sample_site(12);
    let resp = handle(get("/"), &site).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Find your next home in Tehran"));
    assert!(body.contains("Top Agents"));
    assert!(body.contains("Modern Apartment in Vanak"));
}

#[test]
fn property_detail_shows_the_listing() {
    let site = sample_site(12);
    let resp = handle(get("/properties/1"), &site).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Modern Apartment in Vanak"));
    assert!(body.contains("Similar Properties"));
    assert!(body.contains("Studio Apartment in Vanak"));
}

#[test]
fn missing_or_malformed_ids_are_not_found() {
    let site = sample_site(12);

    for uri in ["/properties/999", "/properties/abc", "/blog/42", "/blog/x"] {
        assert!(
            matches!(handle(get(uri), &site), Err(ServerError::NotFound)),
            "{uri} should be missing"
        );
    }
}

#[test]
fn blog_post_page_loads() {
    let site = sample_site(12);
    let resp = handle(get("/blog/1"), &site).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Tehran Market Outlook"));
}

#[test]
fn valuation_form_starts_without_an_estimate() {
    let site = sample_site(12);
    let resp = handle(get("/valuation"), &site).expect("Handler failed");

    let body = body_string(resp);
    assert!(body.contains("What is your property worth?"));
    assert!(!body.contains("Estimated value"));
}

#[test]
fn valuation_shows_the_estimate() {
    let site = sample_site(12);
    let uri = "/valuation?neighborhood=Niavaran&category=villa&size=200&condition=excellent&parking=true";
    let resp = handle(get(uri), &site).expect("Handler failed");

    let body = body_string(resp);
    assert!(body.contains("Estimated value"));
    assert!(body.contains("4,536,000,000 Toman"));
}

#[test]
fn unknown_routes_are_not_found() {
    let site = sample_site(12);

    assert!(matches!(
        handle(get("/admin"), &site),
        Err(ServerError::NotFound)
    ));

    let post = Request::builder()
        .method(Method::POST)
        .uri("/properties")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(post, &site), Err(ServerError::NotFound)));
}

#[test]
fn errors_render_with_their_status() {
    let not_found = html_error_response(ServerError::NotFound);
    assert_eq!(not_found.status(), 404);

    let bad = html_error_response(ServerError::BadRequest("Unknown sort order: x".into()));
    assert_eq!(bad.status(), 400);
    assert!(body_string(bad).contains("Unknown sort order: x"));

    assert_eq!(html_error_response(ServerError::InternalError).status(), 500);
}

#[test]
fn respond_turns_errors_into_pages() {
    let site = sample_site(12);

    assert_eq!(respond(get("/"), &site).status(), 200);
    assert_eq!(respond(get("/nowhere"), &site).status(), 404);

    let bad = respond(get("/featured?sort=cheapest"), &site);
    assert_eq!(bad.status(), 400);
    assert!(body_string(bad).contains("Unknown sort order: cheapest"));
}
