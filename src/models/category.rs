use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A labeled grouping that questions belong to. Read-only through the API;
/// rows come from the startup seed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}
