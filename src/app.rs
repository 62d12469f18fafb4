//! Pokédex App
//!
//! Root component: owns the catalog store, loads the catalog once on
//! mount and picks the panel to show.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    CatalogGrid, ErrorMessage, LoadingSpinner, NoResults, PokedexFooter, PokedexHeader, SearchBar,
};
use crate::config::CatalogConfig;
use crate::store::{CatalogState, CatalogStore, Panel};

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::default();
    let state: CatalogStore = Store::new(CatalogState::new());

    // Provide context to all children
    provide_context(state);

    // Load the catalog on mount. Nothing is tracked, so this runs once.
    Effect::new(move |_| {
        let started = state.try_update(|s| s.begin_load()).unwrap_or(false);
        if !started {
            return;
        }
        let config = config.clone();
        spawn_local(async move {
            let result = api::fetch_catalog(&config).await;
            if state.try_update(|s| s.finish_load(result)).is_none() {
                log::debug!("Catalog view disposed before load finished, result discarded");
            }
        });
    });

    // Only changes when the panel kind changes, not on every keystroke
    let panel = Memo::new(move |_| state.with(|s| s.panel()));

    view! {
        <div class="pokedex-body">
            <div class="pokedex">
                <PokedexHeader />

                <div class="pokedex-screen">
                    <h1 class="pokedex-title">"Pokédex"</h1>

                    <SearchBar />

                    <main>
                        {move || match panel.get() {
                            Panel::Loading => view! { <LoadingSpinner /> }.into_any(),
                            Panel::Error(message) => view! { <ErrorMessage message=message /> }.into_any(),
                            Panel::NoResults => view! { <NoResults /> }.into_any(),
                            Panel::Grid => view! { <CatalogGrid /> }.into_any(),
                        }}
                    </main>
                </div>

                <PokedexFooter />
            </div>
        </div>
    }
}
