use crate::domain::model::{CityTable, Hotel};
use crate::storage::csv::records;
use tracing::warn;

const HEADER: &str = "NAME;";
const FIELDS: usize = 9;
const CURRENCY: &str = "USD";

/// Parses `NAME;NOTE;CITY;STREET;PHONE;STARS;HOME_PAGE;PRICE;ACTIVE` rows.
///
/// `CITY` is a foreign key into `cities`; an unknown key resolves to the placeholder city.
pub fn parse_hotels(content: &str, cities: &CityTable) -> Vec<Hotel> {
    records(content, HEADER)
        .filter(|(_, c)| c.len() >= FIELDS)
        .filter_map(|(line, c)| match parse_hotel(&c, cities) {
            Some(hotel) => Some(hotel),
            None => {
                warn!(line, "skipping malformed hotel row");
                None
            }
        })
        .collect()
}

fn parse_hotel(c: &[&str], cities: &CityTable) -> Option<Hotel> {
    Some(Hotel {
        name: c[0].to_string(),
        note: c[1].to_string(),
        city: cities.lookup_str(c[2]),
        street: c[3].to_string(),
        phone: c[4].to_string(),
        stars: c[5].trim().parse().ok()?,
        home_page: c[6].to_string(),
        price: c[7].trim().parse().ok()?,
        currency: CURRENCY.to_string(),
        active: c[8].trim().eq_ignore_ascii_case("true"),
    })
}
