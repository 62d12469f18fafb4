//! Catalog Grid Component
//!
//! Renders the visible list as cards, keyed by identifier.

use leptos::prelude::*;

use crate::components::CatalogCard;
use crate::store::{use_catalog_store, CatalogStateStoreFields};

const NO_RESULTS_MESSAGE: &str = "No Pokémon found.";

#[component]
pub fn CatalogGrid() -> impl IntoView {
    let state = use_catalog_store();

    view! {
        <div class="pokemon-grid">
            <For
                each=move || state.visible().get()
                key=|item| item.identifier
                children=move |item| view! { <CatalogCard item=item /> }
            />
        </div>
    }
}

/// Shown instead of an empty grid
#[component]
pub fn NoResults() -> impl IntoView {
    view! {
        <p class="no-pokemon-found">{NO_RESULTS_MESSAGE}</p>
    }
}
