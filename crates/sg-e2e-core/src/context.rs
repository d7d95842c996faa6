//! Block context a message executes under.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The block header fields the dispatcher sees for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContext {
    pub chain_id: String,
    pub height: u64,
    pub time: DateTime<Utc>,
}

impl ChainContext {
    pub fn new(chain_id: impl Into<String>, height: u64, time: DateTime<Utc>) -> Self {
        Self {
            chain_id: chain_id.into(),
            height,
            time,
        }
    }

    /// Context for the first block (height 1).
    pub fn genesis(chain_id: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self::new(chain_id, 1, time)
    }
}
