// Service layer: the operations the GUI invokes, one module per concern.
pub mod digits;
pub mod market;

pub use digits::DigitService;
pub use market::MarketService;
