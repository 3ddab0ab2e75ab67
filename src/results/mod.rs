//! Typed decoding of engine search responses

mod types;

pub use types::{Item, SearchHit, SearchResponse};
