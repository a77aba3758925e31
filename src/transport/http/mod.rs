pub mod html;
pub mod params;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod api;
    pub mod combo_box;
    pub mod common;
    pub mod form;
    pub mod health;
    pub mod regexp;
    pub mod reports;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
