use crate::domain::model::City;
use crate::storage::csv::records;
use tracing::warn;

const HEADER: &str = "ID;";
const FIELDS: usize = 6;

/// Parses `ID;NAME;COUNTRY;COUNTRY_NAME;LATITUDE;LONGITUDE` rows.
pub fn parse_cities(content: &str) -> Vec<City> {
    records(content, HEADER)
        .filter(|(_, c)| c.len() >= FIELDS)
        .filter_map(|(line, c)| match parse_city(&c) {
            Some(city) => Some(city),
            None => {
                warn!(line, "skipping malformed city row");
                None
            }
        })
        .collect()
}

fn parse_city(c: &[&str]) -> Option<City> {
    Some(City {
        id: c[0].trim().parse().ok()?,
        name: c[1].to_string(),
        country: c[2].to_string(),
        country_name: c[3].to_string(),
        latitude: c[4].trim().parse().ok()?,
        longitude: c[5].trim().parse().ok()?,
    })
}
