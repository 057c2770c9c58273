//! Applies one suggestion rule to one stored page.
//!
//! Failure never propagates out of `apply`: every outcome, including
//! unreadable pages and failed writes, comes back as a report so sibling
//! suggestions still get evaluated.

use crate::domain::models::{ReportStatus, SuggestionReport};
use crate::rules::SuggestionRule;
use crate::services::storage::PageStore;

const BODY_CLOSE: &str = "</body>";

pub fn apply(store: &dyn PageStore, rule: &SuggestionRule, slug: &str) -> SuggestionReport {
    let content = match store.read(slug) {
        Ok(Some(content)) => content,
        Ok(None) => {
            return report(
                rule,
                ReportStatus::Error,
                format!("page not found: {}", slug),
            )
        }
        Err(e) => {
            return report(
                rule,
                ReportStatus::Error,
                format!("could not read page {}: {}", slug, e),
            )
        }
    };

    if content.contains(rule.marker) {
        return report(
            rule,
            ReportStatus::Skipped,
            format!("already applied to {}", slug),
        );
    }

    let updated = insert_block(&content, rule.block);
    match store.write(slug, &updated) {
        Ok(()) => report(
            rule,
            ReportStatus::Applied,
            format!("inserted {} block into {}", rule.kind, slug),
        ),
        Err(e) => report(
            rule,
            ReportStatus::Error,
            format!("could not write page {}: {}", slug, e),
        ),
    }
}

/// Insert before the first `</body>` regardless of its case; a document
/// without one gets the block appended at the end instead.
fn insert_block(content: &str, block: &str) -> String {
    match content.to_ascii_lowercase().find(BODY_CLOSE) {
        Some(idx) => format!("{}{}\n{}", &content[..idx], block, &content[idx..]),
        None => {
            let mut out = content.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(block);
            out.push('\n');
            out
        }
    }
}

fn report(rule: &SuggestionRule, status: ReportStatus, message: String) -> SuggestionReport {
    SuggestionReport {
        rule: rule.kind.to_string(),
        title: rule.title.to_string(),
        message,
        status,
    }
}
