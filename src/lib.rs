// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod fixtures;
pub mod query;
pub mod specs;
pub mod trending;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use config::{ClientOptions, Mode, Since};
pub use core::{Document, Fetcher, HttpFetcher, Node};
pub use error::{Result, TrendingError};
pub use specs::SelectorTable;
pub use trending::Trending;
pub use types::{Developer, Language, Project};
