//! Statement matching pipeline.
//!
//! Data flows strictly forward: normalized lines -> located amounts ->
//! backward context windows -> roster matching -> accumulated records.

pub mod context;
pub mod matcher;
pub mod normalize;
mod reconciler;
pub mod rules;

pub use context::build_context;
pub use matcher::match_member;
pub use normalize::normalize;
pub use reconciler::StatementReconciler;
