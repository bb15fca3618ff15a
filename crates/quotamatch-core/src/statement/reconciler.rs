//! The reconciliation pipeline: pages in, match records out.

use tracing::{debug, info};

use crate::models::config::CoreConfig;
use crate::models::member::Member;
use crate::models::record::{MatchRecord, ENGINE_TAG};
use crate::pdf::{PageTextSource, PdfPageSource, StatementPage};
use crate::Result;

use super::context::build_context;
use super::matcher::match_member;
use super::normalize::normalize;
use super::rules::amounts::AmountExtractor;

/// Single-pass statement reconciler.
///
/// Stateless across calls: every invocation builds and returns its own
/// record list, so the reconciler can be shared freely between requests.
pub struct StatementReconciler {
    config: CoreConfig,
    amounts: AmountExtractor,
}

impl StatementReconciler {
    /// Create a reconciler with default configuration.
    pub fn new() -> Self {
        Self::with_config(CoreConfig::default())
    }

    pub fn with_config(config: CoreConfig) -> Self {
        Self {
            config,
            amounts: AmountExtractor::new(),
        }
    }

    /// Reconcile a PDF document against a roster.
    ///
    /// Fails only when the document itself is unreadable; zero matches is
    /// a valid, successful, empty result.
    pub fn reconcile_pdf(&self, data: &[u8], roster: &[Member]) -> Result<Vec<MatchRecord>> {
        let mut source = PdfPageSource::with_config(self.config.pdf.clone());
        source.load(data)?;
        let pages = source.extract_pages()?;
        info!("loaded statement with {} pages", pages.len());
        Ok(self.reconcile_pages(&pages, roster))
    }

    /// Reconcile already-extracted pages against a roster.
    ///
    /// Pure: no I/O, no shared state. Pages are processed independently;
    /// context windows never cross a page boundary. Records come out in
    /// page order, then line order within the page.
    pub fn reconcile_pages(&self, pages: &[StatementPage], roster: &[Member]) -> Vec<MatchRecord> {
        let mut records = Vec::new();
        let max_pages = self.config.pdf.max_pages;

        for (seen, page) in pages.iter().enumerate() {
            if max_pages > 0 && seen >= max_pages {
                debug!("page cap reached at {}", max_pages);
                break;
            }

            let Some(text) = page.text.as_deref() else {
                debug!("page {}: no text, skipped", page.number);
                continue;
            };

            self.reconcile_page(page.number, text, roster, &mut records);
        }

        info!("found {} candidate matches", records.len());
        records
    }

    fn reconcile_page(
        &self,
        number: u32,
        text: &str,
        roster: &[Member],
        records: &mut Vec<MatchRecord>,
    ) {
        let raw_lines: Vec<&str> = text.lines().collect();
        let lines: Vec<String> = raw_lines.iter().map(|l| normalize(l)).collect();

        for (i, line) in lines.iter().enumerate() {
            let Some(amount) = self.amounts.extract(line) else {
                continue;
            };

            let context = build_context(&lines, i);

            let Some(member) = match_member(&context, roster) else {
                debug!("page {} line {}: amount {} has no roster match", number, i, amount);
                continue;
            };

            records.push(MatchRecord {
                linea_originale: raw_lines[i].trim().to_string(),
                membro_id: member.id.clone(),
                nome_trovato: member.display_name(),
                importo_trovato: amount,
                confidenza: ENGINE_TAG.to_string(),
            });
        }
    }
}

impl Default for StatementReconciler {
    fn default() -> Self {
        Self::new()
    }
}
