//! Catalog State Store
//!
//! Owns the full list, the search term and the derived visible list.
//! All mutation goes through explicit methods that re-derive `visible`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::LoadError;
use crate::filter::filter_by_name;
use crate::models::CatalogItem;

/// Load lifecycle: Idle -> Loading -> Loaded | Failed
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Holds the message shown to the user
    Failed(String),
}

/// What the main area shows; exactly one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Loading,
    Error(String),
    NoResults,
    Grid,
}

/// Catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Everything fetched, in upstream order
    pub all: Vec<CatalogItem>,
    /// `all` filtered by `search_term`
    pub visible: Vec<CatalogItem>,
    pub search_term: String,
    pub status: LoadStatus,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading`. Returns false if a load already started for this state.
    pub fn begin_load(&mut self) -> bool {
        if self.status != LoadStatus::Idle {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Publish the outcome of the fetch
    pub fn finish_load(&mut self, result: Result<Vec<CatalogItem>, LoadError>) {
        if self.status != LoadStatus::Loading {
            log::warn!("Ignoring load result in state {:?}", self.status);
            return;
        }
        match result {
            Ok(items) => {
                self.all = items;
                self.status = LoadStatus::Loaded;
                self.refilter();
            }
            Err(err) => {
                log::error!("Catalog load failed: {}", err);
                self.all.clear();
                self.visible.clear();
                self.status = LoadStatus::Failed(err.user_message());
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = filter_by_name(&self.all, &self.search_term);
    }

    /// Idle counts as loading: the fetch starts right after mount
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Idle | LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn panel(&self) -> Panel {
        if self.is_loading() {
            Panel::Loading
        } else if let Some(msg) = self.error() {
            Panel::Error(msg.to_string())
        } else if self.visible.is_empty() {
            Panel::NoResults
        } else {
            Panel::Grid
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}
