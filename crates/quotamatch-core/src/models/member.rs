//! Roster member model.
//!
//! Wire field names (`nome`, `cognome`, `matricola`) follow the roster
//! payload of the treasurer application, so a roster round-trips without
//! renaming.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RosterError};

/// Opaque caller-assigned member identifier.
///
/// Rosters in the wild carry either numeric ids or UUID strings; both pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberId::Number(n) => write!(f, "{}", n),
            MemberId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for MemberId {
    fn from(n: i64) -> Self {
        MemberId::Number(n)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        MemberId::Text(s.to_string())
    }
}

/// A member of the association roster.
///
/// Immutable for the duration of one reconciliation call; the roster is
/// supplied wholesale by the caller and never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,

    /// Given name.
    pub nome: String,

    /// Family name.
    pub cognome: String,

    /// Institutional identifier code; matched with precedence over the
    /// name pair when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matricola: Option<String>,
}

impl Member {
    /// Display name in the statement review convention ("cognome nome").
    pub fn display_name(&self) -> String {
        format!("{} {}", self.cognome, self.nome)
    }
}

/// Parse a roster payload (JSON array of members), preserving order.
///
/// Roster order is significant: matching evaluates members in this order
/// and stops at the first hit.
pub fn roster_from_json(payload: &str) -> Result<Vec<Member>> {
    serde_json::from_str(payload).map_err(|e| RosterError::Malformed(e.to_string()).into())
}
