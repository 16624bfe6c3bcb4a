// Time-window selector: the four day-count windows the charting endpoint
// accepts, shown with their display labels.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::TimeWindow;

use crate::config::theme::ThemePalette;

struct WindowOption {
    days: String,
    label: &'static str,
    active: bool,
}

#[component]
pub fn WindowSelect(selected: TimeWindow, on_select: EventHandler<TimeWindow>) -> Element {
    let palette = use_context::<ThemePalette>();

    let selected_days = selected.days().to_string();
    let options: Vec<WindowOption> = TimeWindow::ALL
        .into_iter()
        .map(|window| WindowOption {
            days: window.days().to_string(),
            label: window.label(),
            active: window == selected,
        })
        .collect();

    rsx! {
        div {
            div {
                style: "font-size: 0.85em; color: {palette.muted}; margin-bottom: 4px;",
                "Select the time frame"
            }
            select {
                style: "padding: 8px; background-color: {palette.surface}; color: {palette.foreground};
                        border: 1px solid {palette.border}; border-radius: 4px;",
                value: "{selected_days}",
                onchange: move |evt| {
                    if let Some(window) = evt.value().parse::<u32>().ok().and_then(TimeWindow::from_days) {
                        on_select.call(window);
                    }
                },
                for option_def in options {
                    option {
                        value: "{option_def.days}",
                        selected: option_def.active,
                        "{option_def.label}"
                    }
                }
            }
        }
    }
}
