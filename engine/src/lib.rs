//! lotto-engine: Lottery game core modules

pub mod allocator;
pub mod config;
pub mod currency;
pub mod errors;
pub mod logger;
pub mod player;
pub mod report;
pub mod resolver;
