//! Process-wide cache of the demo tables.
//!
//! Each table is loaded on first access and kept for the lifetime of the process. A failed
//! load is logged and reported as an empty table; the cell stays empty, so the next request
//! tries again.

use crate::domain::model::{CityTable, Hotel};
use crate::storage::csv::{self, LoadError, CITIES_FILE, HOTELS_FILE};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info};

pub struct RowSource {
    data_dir: PathBuf,
    cities: OnceCell<Arc<CityTable>>,
    hotels: OnceCell<Arc<Vec<Hotel>>>,
}

impl RowSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cities: OnceCell::new(),
            hotels: OnceCell::new(),
        }
    }

    /// The city table, or an empty table if it cannot be loaded.
    pub async fn cities(&self) -> Arc<CityTable> {
        match self.try_cities().await {
            Ok(table) => table,
            Err(e) => {
                error!(error = %e, "City reading fails");
                Arc::new(CityTable::default())
            }
        }
    }

    /// All hotels in file order, or an empty list if they cannot be loaded.
    pub async fn hotels(&self) -> Arc<Vec<Hotel>> {
        match self.try_hotels().await {
            Ok(hotels) => hotels,
            Err(e) => {
                error!(error = %e, "Hotel reading fails");
                Arc::new(Vec::new())
            }
        }
    }

    pub async fn try_cities(&self) -> Result<Arc<CityTable>, LoadError> {
        self.cities
            .get_or_try_init(|| async {
                let content = csv::read_resource(&self.data_dir, CITIES_FILE).await?;
                let table = CityTable::new(csv::parse_cities(&content));
                info!(count = table.len(), "Loaded cities");
                Ok::<_, LoadError>(Arc::new(table))
            })
            .await
            .cloned()
    }

    pub async fn try_hotels(&self) -> Result<Arc<Vec<Hotel>>, LoadError> {
        self.hotels
            .get_or_try_init(|| async {
                let cities = self.try_cities().await?;
                let content = csv::read_resource(&self.data_dir, HOTELS_FILE).await?;
                let hotels = csv::parse_hotels(&content, &cities);
                info!(count = hotels.len(), "Loaded hotels");
                Ok::<_, LoadError>(Arc::new(hotels))
            })
            .await
            .cloned()
    }
}
