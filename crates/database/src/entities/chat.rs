//! Chat entity definitions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub name: String,
    pub member_ids: Vec<i64>,
    pub created_at: String,
}

/// Insert payload for a chat. Member ids keep their order and are not
/// de-duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChat {
    pub name: String,
    pub member_ids: Vec<i64>,
}
