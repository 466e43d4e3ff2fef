use serde::{Deserialize, Serialize};

/// A permit application. `id` is assigned by its category store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permit {
    pub id: i64,
    /// Owner reference supplied by the caller, never checked
    pub pid: i64,
    pub status: bool,
}

/// Fields accepted when creating a permit.
///
/// `id` and `status` are bound so that clients sending a full permit are
/// not rejected, but the server always assigns both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PermitInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub pid: i64,
    #[serde(default)]
    pub status: Option<bool>,
}
