use crate::catalog::Catalog;
use crate::domain::property::{ListingType, PropertyCategory};
use crate::domain::{Agent, Neighborhood, Post, Property};
use crate::router::Site;
use crate::search::PageSize;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use std::io::Read;

#[allow(clippy::too_many_arguments)]
fn property(
    id: u32,
    title: &str,
    category: PropertyCategory,
    neighborhood: &str,
    listing_type: ListingType,
    price: u64,
    size: u32,
    bedrooms: u8,
    featured: bool,
    amenities: &[&str],
) -> Property {
    Property {
        id,
        title: title.to_string(),
        description: format!("{title}. Bright rooms and good transport links."),
        price,
        listing_type,
        category,
        neighborhood: neighborhood.to_string(),
        size,
        rooms: bedrooms + 1,
        bedrooms,
        bathrooms: bedrooms.clamp(1, 4),
        year_built: Some(2010 + (id % 10) as u16),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        images: vec![format!("/static/img/property-{id}.jpg")],
        featured,
        agent_id: Some(1 + id % 5),
    }
}

/// Ten listings: four apartments, three featured (none of them villas), with
/// repeated prices and sizes so sort ties actually occur.
pub fn sample_properties() -> Vec<Property> {
    use ListingType::{Buy, Rent};
    use PropertyCategory::*;

    vec![
        property(1, "Modern Apartment in Vanak", Apartment, "Vanak", Buy, 3_200_000_000, 120, 2, true, &["Parking", "Elevator"]),
        property(2, "Family House in Tehranpars", House, "Tehranpars", Buy, 2_100_000_000, 180, 3, false, &["Parking", "Storage"]),
        property(3, "Luxury Villa in Lavasan", Villa, "Lavasan", Buy, 4_800_000_000, 450, 5, false, &["Pool", "Parking"]),
        property(4, "Cozy Apartment near Niavaran Park", Apartment, "Niavaran", Rent, 45_000_000, 85, 1, false, &["Elevator"]),
        property(5, "Penthouse with Mountain View", Penthouse, "Zaferanieh", Buy, 4_500_000_000, 260, 4, true, &["Elevator", "Parking", "Gym"]),
        property(6, "Office Space in Jordan", Commercial, "Jordan", Rent, 120_000_000, 120, 0, false, &["Elevator"]),
        property(7, "Garden Apartment in Saadat Abad", Apartment, "Saadat Abad", Buy, 2_600_000_000, 110, 2, true, &["Parking", "Balcony"]),
        property(8, "Duplex in Elahieh", Duplex, "Elahieh", Buy, 3_200_000_000, 240, 4, false, &["Parking"]),
        property(9, "Studio Apartment in Vanak", Apartment, "Vanak", Rent, 25_000_000, 55, 1, false, &[]),
        property(10, "Garden Villa in Niavaran", Villa, "Niavaran", Buy, 4_950_000_000, 380, 5, false, &["Pool"]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn agent(
    id: u32,
    name: &str,
    title: &str,
    rating: f32,
    listings_count: u32,
    sold_count: u32,
    specialties: &[&str],
    languages: &[&str],
) -> Agent {
    Agent {
        id,
        name: name.to_string(),
        title: title.to_string(),
        bio: format!("{name} has helped hundreds of families find a home."),
        photo: String::new(),
        phone: format!("+98 21 5550 00{id:02}"),
        email: format!("agent{id}@example.com"),
        rating,
        listings_count,
        sold_count,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn sample_agents() -> Vec<Agent> {
    vec![
        agent(1, "Sara Ahmadi", "Senior Agent", 4.9, 32, 120, &["Luxury Homes", "Commercial Properties"], &["Persian", "English"]),
        agent(2, "reza Karimi", "Rental Specialist", 4.6, 18, 45, &["Rentals"], &["Persian"]),
        agent(3, "Maryam Hosseini", "Commercial Lead", 4.8, 25, 88, &["Commercial Properties"], &["Persian", "French"]),
        agent(4, "Ali Moradi", "Agent", 4.2, 12, 30, &["Apartments"], &["Persian", "English"]),
        agent(5, "Niloufar Rahimi", "Luxury Consultant", 4.95, 21, 64, &["Villas"], &["Persian", "English", "German"]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: u32,
    title: &str,
    category: &str,
    tags: &[&str],
    date: (i32, u32, u32),
    content: &str,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        excerpt: format!("{title}: what you need to know."),
        content: content.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: "Editorial Team".to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        read_time: 5,
        image: String::new(),
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        post(1, "Tehran Market Outlook", "Market Trends", &["market", "prices"], (2024, 1, 15), "Prices rose steadily across the north of the city."),
        post(2, "First-Time Buyer Checklist", "Buying Guide", &["buying", "mortgage"], (2024, 3, 2), "Get your mortgage pre-approval before viewing homes."),
        post(3, "Where to Invest This Year", "Investment", &["investment", "market"], (2023, 11, 20), "Rental yields are strongest near metro lines."),
        post(4, "Renting vs Buying", "Buying Guide", &["buying", "renting"], (2024, 2, 10), "Compare monthly rent with a mortgage payment."),
        post(5, "Commercial Property Returns", "Investment", &["investment", "commercial"], (2023, 9, 5), "Office space demand is recovering."),
    ]
}

fn neighborhood(id: &str, name: &str, average_price: u64, properties_count: u32, features: &[&str]) -> Neighborhood {
    Neighborhood {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} is one of Tehran's best known districts."),
        average_price,
        average_rent: average_price / 100,
        properties_count,
        features: features.iter().map(|f| f.to_string()).collect(),
        image: String::new(),
    }
}

pub fn sample_neighborhoods() -> Vec<Neighborhood> {
    vec![
        neighborhood("saadat-abad", "Saadat Abad", 750_000_000, 45, &["Shopping Centers", "Parks"]),
        neighborhood("niavaran", "Niavaran", 1_200_000_000, 28, &["Parks", "Museums"]),
        neighborhood("tehranpars", "Tehranpars", 450_000_000, 52, &["Metro Access", "Schools"]),
        neighborhood("lavasan", "Lavasan", 2_500_000_000, 15, &["Mountains", "Luxury Villas"]),
        neighborhood("vanak", "Vanak", 680_000_000, 38, &["Metro Access", "Restaurants"]),
        neighborhood("jordan", "Jordan", 1_800_000_000, 33, &["Embassies", "Cafes"]),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(
        sample_properties(),
        sample_agents(),
        sample_posts(),
        sample_neighborhoods(),
    )
    .expect("sample catalog ids are unique")
}

pub fn sample_site(page_size: usize) -> Site {
    Site {
        catalog: sample_catalog(),
        page_size: PageSize::new(page_size).expect("positive page size"),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
