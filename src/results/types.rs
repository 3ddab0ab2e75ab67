//! Result envelope and catalog entity types
//!
//! Wire shape (Elasticsearch 7):
//! `{ took, hits: { total: { value }, hits: [ { _score, _index, _type,
//! _version?, _source: Item } ] } }`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A catalog entry, owned by the external document store and only ever
/// read by this crate. `client_id` is the tenant partition key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: String,
    #[serde(default)]
    pub client_id: String,
}

/// One matched item plus the engine-assigned metadata for the match.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// Relevance score, higher is more relevant.
    #[serde(rename = "_score")]
    pub score: f64,
    /// Index the document was matched in.
    #[serde(rename = "_index")]
    pub index: String,
    /// Mapping type, kept for ES7 compatibility.
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    /// Document version counter, when the engine reports one.
    #[serde(rename = "_version", default)]
    pub version: Option<i64>,
    /// The decoded item, owned by value.
    #[serde(rename = "_source")]
    pub source: Item,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    took: i64,
    hits: RawHits,
}

#[derive(Debug, Deserialize)]
struct RawHits {
    total: TotalHits,
    hits: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TotalHits {
    value: i64,
}

/// Decoded top-level search envelope. Hit order is the engine's relevance
/// order and is preserved as-is.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Engine-reported elapsed time in milliseconds.
    pub took: i64,
    /// Total match count; may exceed `hits.len()` when the result set is
    /// larger than the requested page.
    pub total: i64,
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// Decode a response body.
    ///
    /// A malformed top-level envelope is an [`Error::Decode`]. Individual
    /// hits that fail to decode are skipped with a warning so one bad
    /// document cannot abort the whole page.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: RawResponse = serde_json::from_str(body).map_err(Error::Decode)?;

        let mut hits = Vec::with_capacity(raw.hits.hits.len());
        for value in raw.hits.hits {
            match serde_json::from_value::<SearchHit>(value) {
                Ok(hit) => hits.push(hit),
                Err(err) => warn!("skipping undecodable hit: {}", err),
            }
        }

        Ok(Self {
            took: raw.took,
            total: raw.hits.total.value,
            hits,
        })
    }

    /// Strip engine metadata, keeping the items in engine order.
    pub fn into_items(self) -> Vec<Item> {
        self.hits.into_iter().map(|hit| hit.source).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, name: &str, score: f64) -> serde_json::Value {
        serde_json::json!({
            "_score": score,
            "_index": "items",
            "_type": "_doc",
            "_source": {
                "id": id,
                "name": name,
                "description": "",
                "categories": "",
                "client_id": "client-A"
            }
        })
    }

    #[test]
    fn test_decode_three_hits_in_order() {
        let body = serde_json::json!({
            "took": 4,
            "hits": {
                "total": { "value": 3 },
                "hits": [hit("a", "Anvil", 2.0), hit("b", "Bolt", 1.5), hit("c", "Crate", 0.9)]
            }
        })
        .to_string();

        let response = SearchResponse::from_json(&body).unwrap();
        assert_eq!(response.took, 4);
        assert_eq!(response.total, 3);
        let ids: Vec<_> = response.into_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decode_empty_hits() {
        let body = r#"{"took":1,"hits":{"total":{"value":0},"hits":[]}}"#;
        let response = SearchResponse::from_json(body).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.hits.is_empty());
    }

    #[test]
    fn test_missing_hits_is_decode_error() {
        let body = r#"{"took":1}"#;
        let err = SearchResponse::from_json(body).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_malformed_hit_is_skipped() {
        let body = serde_json::json!({
            "took": 2,
            "hits": {
                "total": { "value": 2 },
                "hits": [hit("a", "Anvil", 2.0), { "_score": 1.0 }]
            }
        })
        .to_string();

        let response = SearchResponse::from_json(&body).unwrap();
        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0].source.id, "a");
    }

    #[test]
    fn test_optional_version() {
        let mut with_version = hit("a", "Anvil", 1.0);
        with_version["_version"] = serde_json::json!(7);
        let body = serde_json::json!({
            "took": 1,
            "hits": { "total": { "value": 1 }, "hits": [with_version] }
        })
        .to_string();

        let response = SearchResponse::from_json(&body).unwrap();
        assert_eq!(response.hits[0].version, Some(7));
    }
}
