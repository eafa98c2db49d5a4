use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handle to a registered table: the identifier statements reference it by
/// and the moment the registration happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResource {
    pub identifier: String,
    pub version: DateTime<Utc>,
}

impl TableResource {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            version: Utc::now(),
        }
    }
}
