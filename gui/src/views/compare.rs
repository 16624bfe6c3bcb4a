// Two-coin comparison: both series fetched sequentially per interaction
// and drawn on shared axes.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{CoinEntry, PriceSeries, TimeWindow};

use crate::components::chart::{ChartLine, LineChart};
use crate::components::coin_picker::CoinPicker;
use crate::components::window_select::WindowSelect;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::EngineHandle;
use crate::state::app_state::AppState;

type FetchedPair = Vec<(CoinEntry, Result<PriceSeries, String>)>;

#[component]
pub fn Compare() -> Element {
    let state = use_context::<Signal<AppState>>();
    let engine = use_context::<EngineHandle>();
    let config = use_context::<AppConfig>();
    let palette = use_context::<ThemePalette>();

    let mut coin_a = use_signal(|| None::<CoinEntry>);
    let mut coin_b = use_signal(|| None::<CoinEntry>);
    let mut window = use_signal(|| TimeWindow::Week);

    let fetched = use_resource(move || {
        let engine = engine.clone();
        let a = coin_a();
        let b = coin_b();
        let window = window();
        async move {
            match (a, b) {
                (Some(a), Some(b)) => {
                    // Two ordered requests per interaction; one failing
                    // leaves the other's outcome untouched.
                    let first = engine
                        .market
                        .price_series(&a.id, window)
                        .await
                        .map_err(|e| e.to_string());
                    let second = engine
                        .market
                        .price_series(&b.id, window)
                        .await
                        .map_err(|e| e.to_string());
                    let pair: FetchedPair = vec![(a, first), (b, second)];
                    Some(pair)
                }
                _ => None,
            }
        }
    });

    let catalog = state.read().catalog.clone();
    let chart_config = config.chart.clone();

    let body = match &*fetched.read() {
        Some(Some(outcomes)) => {
            let mut lines = Vec::new();
            let mut failures = Vec::new();
            for (index, (coin, outcome)) in outcomes.iter().enumerate() {
                match outcome {
                    Ok(series) => lines.push(ChartLine {
                        label: coin.name.clone(),
                        color: chart_config
                            .series_colors
                            .get(index % chart_config.series_colors.len().max(1))
                            .cloned()
                            .unwrap_or_else(|| "#26a69a".to_string()),
                        series: series.clone(),
                    }),
                    Err(message) => {
                        failures.push(format!("{}: {}", coin.name, message));
                    }
                }
            }
            let failure_lines = failures.into_iter().map(|message| {
                rsx! {
                    p { style: "color: {palette.error};", "Failed to load price history for {message}" }
                }
            });
            let chart = if lines.is_empty() {
                None
            } else {
                Some(rsx! {
                    LineChart {
                        lines: lines,
                        config: chart_config.clone(),
                        foreground: palette.foreground.clone(),
                    }
                })
            };
            rsx! {
                {chart}
                {failure_lines}
            }
        }
        Some(None) => rsx! {
            p { style: "color: {palette.muted};", "Select two cryptocurrencies to compare their prices." }
        },
        None => rsx! {
            p { style: "color: {palette.muted};", "Loading price histories..." }
        },
    };

    rsx! {
        div {
            style: "padding: 16px;",
            h2 { "Cryptocurrency Price Comparison Tracker" }
            div {
                style: "display: flex; gap: 24px; align-items: flex-end; margin-bottom: 16px; flex-wrap: wrap;",
                CoinPicker {
                    label: "Select the first cryptocurrency".to_string(),
                    entries: catalog.clone(),
                    selected: coin_a(),
                    on_select: move |coin| coin_a.set(Some(coin)),
                }
                CoinPicker {
                    label: "Select the second cryptocurrency".to_string(),
                    entries: catalog,
                    selected: coin_b(),
                    on_select: move |coin| coin_b.set(Some(coin)),
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
