// Line chart rendering: pure geometry plus the SVG component.
pub mod geometry;
pub mod line_chart;

pub use line_chart::{ChartLine, LineChart};
