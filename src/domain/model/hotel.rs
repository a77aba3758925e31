use crate::domain::model::City;
use crate::domain::report::ReportRow;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Hotel {
    pub name: String,
    pub note: String,
    /// Shared with every other hotel of the same city.
    #[schema(value_type = City)]
    pub city: Arc<City>,
    pub street: String,
    pub phone: String,
    pub stars: f32,
    pub home_page: String,
    pub price: f64,
    pub currency: String,
    pub active: bool,
}

impl Hotel {
    pub fn city_name(&self) -> &str {
        &self.city.name
    }
}

impl ReportRow for Hotel {
    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_name(&self) -> &str {
        self.city_name()
    }
}
