//! Column declarations of the demo reports.

use crate::domain::model::{City, Hotel};
use crate::domain::report::{CellValue, Column, Report};

/// Default row limit of every report.
pub const DEFAULT_ROW_LIMIT: i64 = 15;

pub const HOTEL_BASE: &str = "http://hotelbase.org/";
pub const DATA_LICENSE: &str =
    "https://web.archive.org/web/20150407085757/http://api.hotelsbase.org/documentation.php";

pub struct Reports {
    pub hotels: Report<Hotel>,
    pub plain_hotels: Report<Hotel>,
    pub cities: Report<City>,
}

impl Reports {
    pub fn new() -> Self {
        Self {
            hotels: hotel_report(),
            plain_hotels: plain_hotel_report(),
            cities: city_report(),
        }
    }
}

impl Default for Reports {
    fn default() -> Self {
        Self::new()
    }
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn number(value: impl Into<f64>) -> CellValue {
    CellValue::Number(value.into())
}

/// The full hotel report with star glyphs and home page links.
pub fn hotel_report() -> Report<Hotel> {
    Report::new("Common Hotel Report", DEFAULT_ROW_LIMIT)
        .column(Column::new("name", "Hotel", |h: &Hotel| text(&h.name)).sortable())
        .column(Column::new("city", "City", |h: &Hotel| text(h.city_name())).sortable())
        .column(Column::new("street", "Street", |h: &Hotel| text(&h.street)).sortable())
        .column(Column::new("price", "Price", |h: &Hotel| CellValue::Amount(h.price)).sortable())
        .column(Column::new("currency", "Currency", |h: &Hotel| text(&h.currency)))
        .column(Column::new("phone", "Phone", |h: &Hotel| text(&h.phone)))
        .column(
            Column::new("stars", "Stars", |h: &Hotel| CellValue::Stars(h.stars))
                .sortable_by(|a, b| a.stars.total_cmp(&b.stars)),
        )
        .column(Column::new("home_page", "Home page", |h: &Hotel| {
            CellValue::Link(h.home_page.clone())
        }))
}

/// The same rows with plain values only.
pub fn plain_hotel_report() -> Report<Hotel> {
    Report::new("Simple Hotel Report", DEFAULT_ROW_LIMIT)
        .column(Column::new("name", "Hotel", |h: &Hotel| text(&h.name)).sortable())
        .column(Column::new("city", "City", |h: &Hotel| text(h.city_name())).sortable())
        .column(Column::new("street", "Street", |h: &Hotel| text(&h.street)).sortable())
        .column(Column::new("price", "Price", |h: &Hotel| CellValue::Amount(h.price)).sortable())
        .column(Column::new("currency", "Currency", |h: &Hotel| text(&h.currency)))
        .column(Column::new("phone", "Phone", |h: &Hotel| text(&h.phone)))
        .column(Column::new("stars", "Stars", |h: &Hotel| number(h.stars)).sortable())
}

pub fn city_report() -> Report<City> {
    Report::new("City Report", DEFAULT_ROW_LIMIT)
        .column(Column::new("id", "Id", |c: &City| number(c.id)).sortable())
        .column(Column::new("name", "City", |c: &City| text(&c.name)).sortable())
        .column(Column::new("country", "Country", |c: &City| text(&c.country)).sortable())
        .column(
            Column::new("country_name", "Country name", |c: &City| text(&c.country_name))
                .sortable(),
        )
        .column(Column::new("latitude", "Latitude", |c: &City| number(c.latitude)))
        .column(Column::new("longitude", "Longitude", |c: &City| number(c.longitude)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CityTable;
    use crate::domain::report::{RowQuery, SortDirection, SortSpec};
    use std::sync::Arc;

    fn hotel(name: &str, city: &Arc<City>, stars: f32, price: f64) -> Hotel {
        Hotel {
            name: name.to_string(),
            note: String::new(),
            city: city.clone(),
            street: String::new(),
            phone: String::new(),
            stars,
            home_page: String::new(),
            price,
            currency: "USD".to_string(),
            active: true,
        }
    }

    #[test]
    fn hotel_report_sorts_by_stars_descending() {
        let cities = CityTable::new([City {
            id: 1,
            name: "Prague".to_string(),
            ..City::default()
        }]);
        let prague = cities.lookup(1);
        let hotels = vec![
            hotel("A", &prague, 3.0, 10.0),
            hotel("B", &prague, 5.0, 10.0),
            hotel("C", &prague, 4.0, 10.0),
        ];
        let query = RowQuery {
            limit: DEFAULT_ROW_LIMIT,
            sort: Some(SortSpec {
                key: "stars".to_string(),
                direction: SortDirection::Desc,
            }),
            ..RowQuery::default()
        };
        let rows = hotel_report().select_rows(&hotels, &query);
        let names: Vec<&str> = rows.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn sortable_headers_are_declared_once() {
        let reports = Reports::new();
        let sortable: Vec<&str> = reports
            .hotels
            .columns()
            .iter()
            .filter(|c| c.is_sortable())
            .map(|c| c.key())
            .collect();
        assert_eq!(sortable, vec!["name", "city", "street", "price", "stars"]);
        assert!(reports.hotels.sortable_column("phone").is_none());
        assert!(reports.cities.sortable_column("country_name").is_some());
    }
}
