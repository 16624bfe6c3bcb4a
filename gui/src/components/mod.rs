// GUI components module
pub mod chart;
pub mod coin_picker;
pub mod toolbar;
pub mod window_select;
