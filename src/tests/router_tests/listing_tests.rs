use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_site};

fn render(uri: &str) -> String {
    let site = sample_site(12);
    let resp = handle(get(uri), &site).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn properties_page_lists_everything_by_default() {
    let body = render("/properties");

    assert!(body.contains("Found <strong>10</strong>"));
    assert!(body.contains("Garden Villa in Niavaran"));
    assert!(!body.contains("No properties found"));
}

#[test]
fn category_filter_narrows_the_listing() {
    let body = render("/properties?category=apartment");

    assert!(body.contains("Found <strong>4</strong>"));
    assert!(body.contains("Studio Apartment in Vanak"));
    assert!(!body.contains("Luxury Villa in Lavasan"));
}

#[test]
fn search_is_case_insensitive() {
    let body = render("/properties?search=NIAVARAN");

    assert!(body.contains("Found <strong>2</strong>"));
}

#[test]
fn no_matches_renders_the_empty_state() {
    let body = render("/properties?featured=true&category=villa");

    assert!(body.contains("Found <strong>0</strong>"));
    assert!(body.contains("No properties found"));
    assert!(body.contains("Clear Filters"));
}

#[test]
fn pager_links_keep_the_filters() {
    let site = sample_site(4);
    let resp = handle(get("/properties?type=buy"), &site).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Found <strong>7</strong>"));
    assert!(body.contains("/properties?type=buy&amp;page=2"));
    assert!(!body.contains("page=3"));
}

#[test]
fn stale_page_links_back_into_the_results() {
    let site = sample_site(4);
    let resp = handle(get("/properties?type=buy&page=9"), &site).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Found <strong>7</strong>"));
    assert!(body.contains("Page 9 is past the last page"));
    assert!(body.contains(r#"href="/properties?type=buy">Back to page 1"#));
    assert!(body.contains(r#"href="/properties?type=buy&amp;page=2">Go to page 2"#));
    assert!(!body.contains("No properties found"));
}

#[test]
fn stale_page_on_a_single_page_listing() {
    let body = render("/agents?page=5");

    assert!(body.contains("Page 5 is past the last page"));
    assert!(body.contains(r#"href="/agents">Back to page 1"#));
    assert!(!body.contains("Go to page"));
    assert!(!body.contains("No agents found"));
}

#[test]
fn malformed_queries_are_bad_requests() {
    let site = sample_site(12);

    for uri in [
        "/properties?page=0",
        "/properties?page=abc",
        "/properties?sort=cheapest",
        "/properties?category=castle",
        "/properties?minPrice=lots",
        "/agents?sort=age",
        "/blog?page=-1",
        "/neighborhoods?filter=haunted",
        "/featured?sort=cheapest",
    ] {
        let result = handle(get(uri), &site);
        assert!(
            matches!(result, Err(ServerError::BadRequest(_))),
            "{uri} should be rejected"
        );
    }
}

#[test]
fn sorted_listing_follows_the_key() {
    let body = render("/properties?sort=price-low");

    let cheapest = body.find("Studio Apartment in Vanak").unwrap();
    let dearest = body.find("Garden Villa in Niavaran").unwrap();
    assert!(cheapest < dearest);
}

#[test]
fn featured_page_shows_only_featured_listings() {
    let body = render("/featured");

    assert!(body.contains("Featured Properties"));
    assert!(body.contains("Modern Apartment in Vanak"));
    assert!(body.contains("Penthouse with Mountain View"));
    assert!(!body.contains("Luxury Villa in Lavasan"));
}

#[test]
fn agents_page_filters_by_segment() {
    let body = render("/agents?filter=commercial");

    assert!(body.contains("Meet Our Agents"));
    assert!(body.contains("Sara Ahmadi"));
    assert!(body.contains("Maryam Hosseini"));
    assert!(!body.contains("Ali Moradi"));
}

#[test]
fn blog_page_filters_by_tag() {
    let body = render("/blog?tag=investment");

    assert!(body.contains("Real Estate Blog"));
    assert!(body.contains("Where to Invest This Year"));
    assert!(body.contains("Commercial Property Returns"));
    assert!(!body.contains("Renting vs Buying"));
}

#[test]
fn blog_pins_featured_articles_above_the_results() {
    let body = render("/blog?tag=renting");

    assert!(body.contains("Featured Articles"));
    assert!(body.contains("Tehran Market Outlook"));
    assert!(body.contains("Renting vs Buying"));
    assert!(body.contains("Showing 1-1 of 1 articles"));
}

#[test]
fn neighborhoods_page_searches_by_name() {
    let body = render("/neighborhoods?search=abad");

    assert!(body.contains("Saadat Abad"));
    assert!(body.contains("/properties?neighborhood=Saadat+Abad"));
    assert!(!body.contains("Lavasan"));
}
