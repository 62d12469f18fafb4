//! Page Chrome
//!
//! Decorative header lights and the attribution footer.

use leptos::prelude::*;

const LIGHTS: &[&str] = &["light-red", "light-yellow", "light-green"];

#[component]
pub fn PokedexHeader() -> impl IntoView {
    view! {
        <header class="pokedex-header">
            <div class="pokedex-header-lights">
                <div class="pokedex-header-light-main"></div>
                {LIGHTS.iter().map(|color| view! {
                    <div class=format!("pokedex-light {}", color)></div>
                }).collect_view()}
            </div>
        </header>
    }
}

#[component]
pub fn PokedexFooter() -> impl IntoView {
    view! {
        <footer class="pokedex-footer">
            <p>
                "Powered by the "
                <a href="https://pokeapi.co/" target="_blank" rel="noopener noreferrer">
                    "PokéAPI"
                </a>
            </p>
        </footer>
    }
}
