use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single catalog entry. The name doubles as the lookup key; no
/// surrogate ID is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Pokemon {
    pub name: String,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub type_name: String,
}

/// Typed creation payload. Missing or mistyped fields are rejected at
/// deserialization time, before an entity is constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePokemonRequest {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,
}

impl CreatePokemonRequest {
    pub fn into_pokemon(self) -> Pokemon {
        Pokemon {
            name: self.name,
            type_name: self.type_name,
        }
    }
}

/// One page of catalog entries plus the bookkeeping a client needs to
/// iterate through the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonPage {
    pub items: Vec<Pokemon>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PokemonPage {
    pub fn new(items: Vec<Pokemon>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            items,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }
}

/// Number of pages needed to cover `total` rows at `limit` rows per
/// page. An empty table has zero pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}
