//! HTTP client for the search engine

mod client;

pub use client::EngineClient;
