//! Output record for a candidate amount/member association.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::member::MemberId;

/// Provenance tag stamped on every match record.
pub const ENGINE_TAG: &str = "Rust-Lopdf";

/// One candidate association between a located amount and a roster member.
///
/// Wire field names are fixed by the transport contract of the treasurer
/// application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Raw statement line the amount was found on (trimmed, not
    /// normalized).
    pub linea_originale: String,

    /// Identifier of the matched member, as supplied in the roster.
    pub membro_id: MemberId,

    /// Display name, "cognome nome".
    pub nome_trovato: String,

    /// The located amount.
    pub importo_trovato: Decimal,

    /// Fixed provenance tag identifying the matching engine.
    pub confidenza: String,
}
