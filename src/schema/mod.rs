//! Index schema descriptor
//!
//! Declares the searchable shape of an [`crate::results::Item`] and the
//! text analysis applied to identifier-like fields. Issued once at setup
//! time; steady-state querying never touches it.

use serde_json::{json, Value};

/// Analyzer applied to prefix-searchable fields.
pub const EDGE_ANALYZER: &str = "custom_edge_ngram_analyzer";

/// Tokenizer backing [`EDGE_ANALYZER`].
pub const EDGE_TOKENIZER: &str = "customized_edge_tokenizer";

/// Shortest indexed prefix. Queries below this length cannot match a
/// generated token.
pub const MIN_GRAM: u32 = 3;

/// Longest indexed prefix.
pub const MAX_GRAM: u32 = 10;

/// Build the schema document for the items index.
///
/// `id` and `name` are indexed with edge-ngram prefixes (lower-cased,
/// letters and digits) so partially typed identifiers match. The remaining
/// fields use default analysis, and `dynamic: true` keeps the mapping open
/// to fields added later.
pub fn index_schema() -> Value {
    json!({
        "settings": {
            "analysis": {
                "analyzer": {
                    EDGE_ANALYZER: {
                        "type": "custom",
                        "tokenizer": EDGE_TOKENIZER,
                        "filter": ["lowercase"]
                    }
                },
                "tokenizer": {
                    EDGE_TOKENIZER: {
                        "type": "edge_ngram",
                        "min_gram": MIN_GRAM,
                        "max_gram": MAX_GRAM,
                        "token_chars": ["letter", "digit"]
                    }
                }
            }
        },
        "mappings": {
            "dynamic": true,
            "properties": {
                "id": { "type": "text", "analyzer": EDGE_ANALYZER },
                "name": { "type": "text", "analyzer": EDGE_ANALYZER },
                "description": { "type": "text" },
                "categories": { "type": "text" },
                "client_id": { "type": "text" }
            }
        }
    })
}
