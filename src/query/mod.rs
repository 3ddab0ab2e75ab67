//! Structured query construction for tenant-scoped searches
//!
//! The request body is built as a typed object graph and serialized with
//! serde, so caller-supplied values are always bound as JSON string values.
//! Quotes or structural delimiters in a tenant id or query string stay
//! literal data and cannot alter the boolean structure of the query.

use serde::Serialize;
use std::collections::HashMap;

/// Field carrying the tenant partition key on every document.
pub const TENANT_FIELD: &str = "client_id";

/// Fields covered by the free-text clause, scored with best-fields
/// semantics (highest single-field score wins, not a sum).
pub const TEXT_FIELDS: [&str; 2] = ["name", "id"];

/// Page window for a search request. When unset the engine's configured
/// default page size applies (first page only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of hits to return.
    pub size: u32,
    /// Offset of the first hit.
    pub from: u32,
}

impl Page {
    pub fn new(size: u32, from: u32) -> Self {
        Self { size, from }
    }
}

/// Builder for a tenant-isolated search request.
///
/// The rendered query is a `bool.must` conjunction of an exact match on
/// [`TENANT_FIELD`] and a `multi_match` over [`TEXT_FIELDS`]. The tenant
/// clause is always present; it is the sole isolation mechanism. An empty
/// or whitespace-only query string omits the free-text clause, so the
/// request matches every document owned by the tenant.
#[derive(Debug, Clone)]
pub struct TenantQuery {
    tenant_id: String,
    query_text: String,
    page: Option<Page>,
}

impl TenantQuery {
    pub fn new(tenant_id: impl Into<String>, query_text: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            query_text: query_text.into(),
            page: None,
        }
    }

    /// Request an explicit page window instead of the engine default.
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Render the request body sent to the engine's search endpoint.
    pub fn body(&self) -> SearchBody {
        let mut must = vec![Clause::tenant(&self.tenant_id)];
        if !self.query_text.trim().is_empty() {
            must.push(Clause::free_text(&self.query_text));
        }

        SearchBody {
            query: Query {
                boolean: BoolClause { must },
            },
            size: self.page.map(|p| p.size),
            from: self.page.map(|p| p.from),
        }
    }
}

/// Top-level search request body.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBody {
    query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
struct Query {
    #[serde(rename = "bool")]
    boolean: BoolClause,
}

#[derive(Debug, Clone, Serialize)]
struct BoolClause {
    must: Vec<Clause>,
}

/// One leaf clause of the boolean query. Externally tagged serialization
/// produces the engine's `{"match": {...}}` / `{"multi_match": {...}}`
/// syntax directly.
#[derive(Debug, Clone, Serialize)]
enum Clause {
    #[serde(rename = "match")]
    Match(HashMap<&'static str, String>),
    #[serde(rename = "multi_match")]
    MultiMatch(MultiMatch),
}

impl Clause {
    fn tenant(tenant_id: &str) -> Self {
        let mut fields = HashMap::new();
        fields.insert(TENANT_FIELD, tenant_id.to_string());
        Self::Match(fields)
    }

    fn free_text(query_text: &str) -> Self {
        Self::MultiMatch(MultiMatch {
            query: query_text.to_string(),
            kind: "best_fields",
            fields: TEXT_FIELDS.to_vec(),
            operator: "or",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
struct MultiMatch {
    query: String,
    #[serde(rename = "type")]
    kind: &'static str,
    fields: Vec<&'static str>,
    operator: &'static str,
}
