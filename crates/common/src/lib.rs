//! Pieces shared by every crate in the workspace: logging bootstrap and
//! small response types that are not owned by a single domain.

use serde::{Deserialize, Serialize};

pub mod utils {
    pub mod logging;
}

/// Liveness payload returned by `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok".to_string() }
    }
}
