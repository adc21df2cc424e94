pub mod client;
pub mod supermarket_finder;
