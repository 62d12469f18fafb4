//! UI Components
//!
//! Presentational Leptos components. State lives in the catalog store.

mod catalog_card;
mod catalog_grid;
mod chrome;
mod search_bar;
mod status;

pub use catalog_card::CatalogCard;
pub use catalog_grid::{CatalogGrid, NoResults};
pub use chrome::{PokedexFooter, PokedexHeader};
pub use search_bar::SearchBar;
pub use status::{ErrorMessage, LoadingSpinner};
