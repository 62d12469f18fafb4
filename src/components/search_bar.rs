//! Search Bar Component
//!
//! Live name filter. Every keystroke updates the search term.

use leptos::prelude::*;

use crate::store::{use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let state = use_catalog_store();

    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-bar"
                placeholder="Search Pokémon..."
                prop:value=move || state.search_term().get()
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    state.update(|s| s.set_search_term(term));
                }
            />
        </div>
    }
}
