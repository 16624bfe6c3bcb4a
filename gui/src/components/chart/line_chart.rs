// SVG line chart component: one polyline per series, shared axes, legend
// keyed by display name.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::PriceSeries;
use shared::utils::{format_date, format_usd};

use super::geometry::{self, PlotRect};
use crate::config::ChartConfig;

/// One plotted line: a shaped series plus its legend label and color.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: String,
    pub color: String,
    pub series: PriceSeries,
}

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;

struct YTick {
    line_y: String,
    text_y: String,
    label: String,
}

struct XTick {
    x: String,
    label: String,
}

struct Polyline {
    points: String,
    color: String,
}

#[component]
pub fn LineChart(lines: Vec<ChartLine>, config: ChartConfig, foreground: String) -> Element {
    let rect = PlotRect {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: config.width - MARGIN_LEFT - MARGIN_RIGHT,
        height: config.height - MARGIN_TOP - MARGIN_BOTTOM,
    };

    let bounds = match geometry::data_bounds(lines.iter().map(|l| &l.series)) {
        Some(bounds) => bounds,
        None => {
            return rsx! {
                p { "No data points to plot." }
            }
        }
    };

    let y_ticks: Vec<YTick> = geometry::price_ticks(&bounds, config.y_ticks)
        .into_iter()
        .map(|price| {
            let y = geometry::y_for(price, &bounds, &rect);
            YTick {
                line_y: format!("{:.2}", y),
                text_y: format!("{:.2}", y + 4.0),
                label: format_usd(price),
            }
        })
        .collect();

    let x_ticks: Vec<XTick> = geometry::time_ticks(&bounds, config.x_ticks)
        .into_iter()
        .map(|tick| XTick {
            x: format!("{:.2}", geometry::x_for(tick.timestamp_millis(), &bounds, &rect)),
            label: format_date(tick.date_naive()),
        })
        .collect();

    let polylines: Vec<Polyline> = lines
        .iter()
        .map(|line| Polyline {
            points: geometry::polyline_points(&line.series, &bounds, &rect),
            color: line.color.clone(),
        })
        .collect();

    let plot_right = rect.left + rect.width;
    let plot_bottom = rect.top + rect.height;
    let label_y = plot_bottom + 18.0;
    let y_label_x = rect.left - 8.0;

    rsx! {
        svg {
            width: "{config.width}",
            height: "{config.height}",
            view_box: "0 0 {config.width} {config.height}",

            // horizontal grid with price labels
            for tick in y_ticks {
                line {
                    x1: "{rect.left}",
                    x2: "{plot_right}",
                    y1: "{tick.line_y}",
                    y2: "{tick.line_y}",
                    stroke: "{config.grid_color}",
                    stroke_width: "1",
                }
                text {
                    x: "{y_label_x}",
                    y: "{tick.text_y}",
                    fill: "{foreground}",
                    font_size: "11",
                    text_anchor: "end",
                    "{tick.label}"
                }
            }

            // date labels along the bottom edge
            for tick in x_ticks {
                text {
                    x: "{tick.x}",
                    y: "{label_y}",
                    fill: "{foreground}",
                    font_size: "11",
                    text_anchor: "middle",
                    "{tick.label}"
                }
            }

            // axis frame
            line {
                x1: "{rect.left}",
                x2: "{rect.left}",
                y1: "{rect.top}",
                y2: "{plot_bottom}",
                stroke: "{foreground}",
                stroke_width: "1",
            }
            line {
                x1: "{rect.left}",
                x2: "{plot_right}",
                y1: "{plot_bottom}",
                y2: "{plot_bottom}",
                stroke: "{foreground}",
                stroke_width: "1",
            }

            for polyline_def in polylines {
                polyline {
                    points: "{polyline_def.points}",
                    fill: "none",
                    stroke: "{polyline_def.color}",
                    stroke_width: "{config.line_width}",
                }
            }
        }
        div {
            style: "display: flex; gap: 16px; margin-top: 4px;",
            for line_def in lines {
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    span {
                        style: "display: inline-block; width: 14px; height: 3px; background-color: {line_def.color};",
                    }
                    span { style: "font-size: 0.9em;", "{line_def.label} Price" }
                }
            }
        }
    }
}
