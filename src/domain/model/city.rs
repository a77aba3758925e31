use crate::domain::report::ReportRow;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

/// A city record. The `Default` value is the placeholder returned for unknown ids.
#[derive(Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct City {
    pub id: u32,
    pub name: String,
    /// ISO country code.
    pub country: String,
    pub country_name: String,
    pub latitude: f32,
    pub longitude: f32,
}

impl ReportRow for City {
    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_name(&self) -> &str {
        &self.country_name
    }
}

/// Cities keyed by id, shared by every hotel that refers to them.
#[derive(Debug, Default)]
pub struct CityTable {
    cities: HashMap<u32, Arc<City>>,
    /// Insertion order of the source file, for reports over the whole table.
    ordered: Vec<Arc<City>>,
    placeholder: Arc<City>,
}

impl CityTable {
    pub fn new(cities: impl IntoIterator<Item = City>) -> Self {
        let mut table = CityTable::default();
        for city in cities {
            let city = Arc::new(city);
            if table.cities.insert(city.id, city.clone()).is_none() {
                table.ordered.push(city);
            }
        }
        table
    }

    /// Returns the city with the given id, or an empty placeholder record.
    pub fn lookup(&self, id: u32) -> Arc<City> {
        self.cities
            .get(&id)
            .cloned()
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// Like [`CityTable::lookup`] for a textual id; an unparsable id yields the placeholder.
    pub fn lookup_str(&self, id: &str) -> Arc<City> {
        match id.trim().parse::<u32>() {
            Ok(id) => self.lookup(id),
            Err(_) => self.placeholder.clone(),
        }
    }

    pub fn rows(&self) -> &[Arc<City>] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prague() -> City {
        City {
            id: 7,
            name: "Prague".to_string(),
            country: "CZ".to_string(),
            country_name: "Czech Republic".to_string(),
            latitude: 50.08,
            longitude: 14.43,
        }
    }

    #[test]
    fn lookup_finds_known_city() {
        let table = CityTable::new([prague()]);
        assert_eq!(table.lookup(7).name, "Prague");
        assert_eq!(table.lookup_str(" 7 ").name, "Prague");
    }

    #[test]
    fn unknown_or_malformed_id_yields_placeholder() {
        let table = CityTable::new([prague()]);
        assert_eq!(*table.lookup(8), City::default());
        assert_eq!(*table.lookup_str("abc"), City::default());
        assert_eq!(*CityTable::default().lookup(7), City::default());
    }

    #[test]
    fn duplicate_ids_keep_the_first_row() {
        let mut other = prague();
        other.name = "Praha".to_string();
        let table = CityTable::new([prague(), other]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(7).name, "Prague");
    }
}
