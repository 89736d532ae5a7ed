use serde::{Deserialize, Serialize};

const NO_PRICE: &str = "N/A";

/// One row of the hotel dataset. Every column is kept as the raw CSV text;
/// columns missing from the file read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelRecord {
    pub property_id: String,
    pub property_name: String,
    pub city: String,
    pub area: String,
    pub state: String,
    pub property_address: String,
    pub site_review_rating: String,
    pub site_review_count: String,
    pub highlight_value: String,
    pub image_urls: String,
    pub pageurl: String,
    pub hotel_overview: String,
    pub hotel_star_rating: String,
    pub traveller_rating: String,
}

/// Public shape of a hotel in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    pub id: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub rating: Option<f64>,
    pub review_count: i64,
    pub price: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelDetails {
    pub id: String,
    pub name: String,
    pub overview: String,
    pub rating: String,
    pub traveller_rating: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub reviews: String,
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HotelSearchQuery {
    pub city: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HotelSearchResponse {
    pub data: Vec<HotelSummary>,
}

impl From<&HotelRecord> for HotelSummary {
    fn from(hotel: &HotelRecord) -> Self {
        let photo_url = hotel
            .image_urls
            .split(',')
            .next()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);

        let price = if hotel.highlight_value.trim().is_empty() {
            NO_PRICE.to_string()
        } else {
            hotel.highlight_value.clone()
        };

        Self {
            id: hotel.property_id.clone(),
            name: hotel.property_name.clone(),
            photo_url,
            rating: parse_rating(&hotel.site_review_rating),
            review_count: parse_count(&hotel.site_review_count),
            price,
            address: hotel.property_address.clone(),
            city: hotel.city.clone(),
            state: hotel.state.clone(),
            url: hotel.pageurl.clone(),
        }
    }
}

impl From<&HotelRecord> for HotelDetails {
    fn from(hotel: &HotelRecord) -> Self {
        Self {
            id: hotel.property_id.clone(),
            name: hotel.property_name.clone(),
            overview: hotel.hotel_overview.clone(),
            rating: hotel.hotel_star_rating.clone(),
            traveller_rating: hotel.traveller_rating.clone(),
            address: hotel.property_address.clone(),
            city: hotel.city.clone(),
            state: hotel.state.clone(),
            reviews: hotel.site_review_count.clone(),
            url: hotel.pageurl.clone(),
        }
    }
}

fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

// Counts in the dataset are sometimes written as "1,234" or "12.0".
fn parse_count(raw: &str) -> i64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<i64>()
        .ok()
        .or_else(|| cleaned.parse::<f64>().ok().map(|c| c as i64))
        .unwrap_or(0)
}
