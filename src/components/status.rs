//! Load Status Components
//!
//! Spinner while the catalog loads, message box when it failed.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            <p class="loading-text">"Loading..."</p>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <strong>"Error!"</strong>
            <p>{message}</p>
        </div>
    }
}
