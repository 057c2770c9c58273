//! End-to-end feedback submission: persist the entry, classify the text,
//! mutate the target page per candidate, assemble the report list.

use crate::domain::models::{FeedbackEntry, ReportStatus, SubmitOutcome, SuggestionReport};
use crate::rules::{classify, SuggestionRule};
use crate::services::mutator;
use crate::services::storage::{FeedbackLog, PageStore};

pub fn submit(
    pages: &dyn PageStore,
    log: &dyn FeedbackLog,
    rules: &[SuggestionRule],
    text: &str,
    target: Option<&str>,
) -> SubmitOutcome {
    if text.trim().is_empty() {
        return SubmitOutcome {
            persisted: false,
            reports: vec![SuggestionReport {
                rule: "validation".to_string(),
                title: "Feedback rejected".to_string(),
                message: "feedback text must not be empty".to_string(),
                status: ReportStatus::Error,
            }],
        };
    }

    // Logging is best-effort history; classification proceeds either way.
    let persisted = log
        .append(FeedbackEntry {
            page: target.map(str::to_string),
            text: text.to_string(),
            created_at: chrono::Utc::now(),
        })
        .is_ok();

    let matched = classify(text, rules);

    let mut reports = Vec::new();
    if matched.is_empty() {
        reports.push(SuggestionReport {
            rule: "none".to_string(),
            title: "No suggestion".to_string(),
            message: "no improvement rule matched this feedback".to_string(),
            status: ReportStatus::Note,
        });
    }

    for rule in matched {
        match target {
            None => reports.push(SuggestionReport {
                rule: rule.kind.to_string(),
                title: rule.title.to_string(),
                message: rule.description.to_string(),
                status: ReportStatus::Note,
            }),
            Some(slug) => reports.push(mutator::apply(pages, rule, slug)),
        }
    }

    SubmitOutcome { persisted, reports }
}
