// Toolbar switching between the three tools.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::{AppState, View};

#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let palette = use_context::<ThemePalette>();

    let active = state.read().active_view;

    let buttons = View::ALL.into_iter().map(|view| {
        let title = view.title();
        let background = if view == active {
            palette.primary.clone()
        } else {
            "transparent".to_string()
        };
        rsx! {
            button {
                key: "{title}",
                style: "padding: 8px 18px; border: none; cursor: pointer; border-radius: 4px;
                        background-color: {background}; color: {palette.foreground}; font-size: 1em;",
                onclick: move |_| state.write().active_view = view,
                "{title}"
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; gap: 8px; padding: 10px 16px; align-items: center;
                    background-color: {palette.surface}; border-bottom: 1px solid {palette.border};",
            span {
                style: "font-weight: bold; margin-right: 16px; color: {palette.foreground};",
                "Home Analyst"
            }
            {buttons}
        }
    }
}
