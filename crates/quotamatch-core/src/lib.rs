//! Core library for reconciling Italian association statements.
//!
//! This crate provides:
//! - PDF page text extraction (lopdf, with a pdf-extract fallback)
//! - Italian amount location and parsing (`1.250,50` style)
//! - Roster matching by matricola or given/family name pair
//! - Match record models for the transport layers

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{PdfError, QuotamatchError, Result, RosterError};
pub use models::config::{CoreConfig, PdfConfig};
pub use models::member::{roster_from_json, Member, MemberId};
pub use models::record::{MatchRecord, ENGINE_TAG};
pub use pdf::{PageTextSource, PdfPageSource, StatementPage};
pub use statement::rules::{format_italian_amount, parse_italian_amount, AmountExtractor};
pub use statement::{build_context, match_member, normalize, StatementReconciler};
