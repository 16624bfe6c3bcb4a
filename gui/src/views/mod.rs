// The three interactive tools.
mod compare;
mod digits;
mod tracker;

pub use compare::Compare;
pub use digits::Digits;
pub use tracker::Tracker;
