//! Catalog Card Component

use leptos::prelude::*;

use crate::models::{pad_identifier, CatalogItem};

/// Number shown on a card, e.g. `#007`
pub fn card_number(identifier: u32) -> String {
    format!("#{}", pad_identifier(identifier))
}

/// Image, name and number of one entry
#[component]
pub fn CatalogCard(item: CatalogItem) -> impl IntoView {
    let CatalogItem { identifier, name, image_url } = item;

    view! {
        <div class="pokemon-card">
            <div class="pokemon-card-image-wrapper">
                <img
                    src=image_url
                    alt=name.clone()
                    class="pokemon-card-image"
                    loading="lazy"
                />
            </div>
            <h2 class="pokemon-card-name">{name}</h2>
            <p class="pokemon-card-id">{card_number(identifier)}</p>
        </div>
    }
}
