// src/core/mod.rs

pub mod dom;
pub mod links;
pub mod net;
pub mod sanitize;

pub use dom::{Document, Node};
pub use net::{Fetcher, HttpFetcher};
