// Single-coin price tracker: pick a coin and a window, plot the history,
// and summarize the price extremes.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::data::series as series_ops;
use shared::models::{CoinEntry, TimeWindow};
use shared::utils::{format_date, format_usd};

use crate::components::chart::{ChartLine, LineChart};
use crate::components::coin_picker::CoinPicker;
use crate::components::window_select::WindowSelect;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::EngineHandle;
use crate::state::app_state::AppState;

#[component]
pub fn Tracker() -> Element {
    let state = use_context::<Signal<AppState>>();
    let engine = use_context::<EngineHandle>();
    let config = use_context::<AppConfig>();
    let palette = use_context::<ThemePalette>();

    let mut selected = use_signal(|| None::<CoinEntry>);
    let mut window = use_signal(|| TimeWindow::Year);

    let series = use_resource(move || {
        let engine = engine.clone();
        let coin = selected();
        let window = window();
        async move {
            match coin {
                Some(coin) => Some(
                    engine
                        .market
                        .price_series(&coin.id, window)
                        .await
                        .map_err(|e| e.to_string()),
                ),
                None => None,
            }
        }
    });

    let catalog = state.read().catalog.clone();
    let chart_config = config.chart.clone();
    let line_color = chart_config
        .series_colors
        .first()
        .cloned()
        .unwrap_or_else(|| "#26a69a".to_string());

    let body = match &*series.read() {
        Some(Some(Ok(series_data))) => {
            let label = selected()
                .map(|coin| coin.name)
                .unwrap_or_else(|| series_data.coin_id.clone());
            let summary = series_ops::extremes(series_data).map(|extremes| {
                rsx! {
                    p { "Maximum price of {format_usd(extremes.max_price)} USD on {format_date(extremes.max_date)}" }
                    p { "Minimum price of {format_usd(extremes.min_price)} USD on {format_date(extremes.min_date)}" }
                }
            });
            rsx! {
                LineChart {
                    lines: vec![ChartLine {
                        label,
                        color: line_color.clone(),
                        series: series_data.clone(),
                    }],
                    config: chart_config.clone(),
                    foreground: palette.foreground.clone(),
                }
                {summary}
            }
        }
        Some(Some(Err(message))) => rsx! {
            p { style: "color: {palette.error};", "Failed to load price history: {message}" }
        },
        Some(None) => rsx! {
            p { style: "color: {palette.muted};", "Select a cryptocurrency to plot its price history." }
        },
        None => rsx! {
            p { style: "color: {palette.muted};", "Loading price history..." }
        },
    };

    rsx! {
        div {
            style: "padding: 16px;",
            h2 { "Cryptocurrency Price Tracker" }
            div {
                style: "display: flex; gap: 24px; align-items: flex-end; margin-bottom: 16px;",
                CoinPicker {
                    label: "Select a cryptocurrency".to_string(),
                    entries: catalog,
                    selected: selected(),
                    on_select: move |coin| selected.set(Some(coin)),
                }
                WindowSelect {
                    selected: window(),
                    on_select: move |w| window.set(w),
                }
            }
            {body}
        }
    }
}
