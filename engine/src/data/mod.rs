// Remote market data access and local series shaping.
pub mod coingecko;
pub mod series;
