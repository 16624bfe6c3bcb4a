// Root component: provides shared state, loads the catalog once, and
// renders the toolbar plus the active view.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::error::CatalogError;

use crate::components::toolbar::Toolbar;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::EngineHandle;
use crate::state::app_state::{AppState, View};
use crate::views::{Compare, Digits, Tracker};

/// The one user-visible message a catalog failure collapses into. The
/// engine keeps the causes distinct; the display text is decided here.
fn catalog_banner(error: &CatalogError) -> String {
    match error {
        CatalogError::Shape(_) => {
            "Unexpected data format received from the coin directory. Please check the API or try later."
                .to_string()
        }
        CatalogError::Decode(_) => {
            "Failed to decode JSON from the coin directory response. Check the URL and try again."
                .to_string()
        }
        CatalogError::Transport(detail) => format!("An unexpected error occurred: {}", detail),
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let palette = use_context_provider(|| ThemePalette::from_name(&config.app.theme));
    let mut state = use_context_provider(|| Signal::new(AppState::default()));
    let engine = use_context::<EngineHandle>();

    // One catalog fetch per process start. Any failure becomes a single
    // banner plus an empty catalog; the pickers treat that as "nothing to
    // select".
    use_future(move || {
        let engine = engine.clone();
        async move {
            match engine.market.load_catalog().await {
                Ok(entries) => {
                    let mut s = state.write();
                    s.catalog = entries;
                    s.catalog_loading = false;
                }
                Err(error) => {
                    tracing::error!(error = %error, "Catalog load failed");
                    let mut s = state.write();
                    s.catalog = Vec::new();
                    s.catalog_loading = false;
                    s.catalog_error = Some(catalog_banner(&error));
                }
            }
        }
    });

    let active_view = state.read().active_view;
    let loading_hint = if state.read().catalog_loading {
        Some(rsx! {
            div {
                style: "padding: 6px 16px; color: {palette.muted}; font-size: 0.85em;",
                "Loading coin catalog..."
            }
        })
    } else {
        None
    };
    let banner = state.read().catalog_error.clone().map(|message| {
        rsx! {
            div {
                style: "padding: 10px 16px; background-color: {palette.error}; color: #ffffff;",
                "{message}"
            }
        }
    });

    let body = match active_view {
        View::Tracker => rsx! { Tracker {} },
        View::Compare => rsx! { Compare {} },
        View::Digits => rsx! { Digits {} },
    };

    rsx! {
        div {
            style: "min-height: 100vh; background-color: {palette.background}; color: {palette.foreground};
                    font-family: 'Segoe UI', 'Helvetica Neue', sans-serif;",
            Toolbar {}
            {banner}
            {loading_hint}
            {body}
        }
    }
}
