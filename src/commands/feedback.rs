use crate::cli::{Cli, Commands, FeedbackCommands};
use crate::domain::models::{FeedbackEntry, JsonOut, RuleInfo};
use crate::services::orchestrator::submit;
use crate::services::output::print_out;
use crate::services::storage::{FeedbackLog, Workspace};

pub fn handle_feedback_commands(cli: &Cli, ws: &Workspace) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Feedback { command } => match command {
            FeedbackCommands::Submit { text, page } => {
                let pages = ws.pages();
                let log = ws.feedback_log();
                let outcome = submit(&pages, &log, &ws.active_rules(), text, page.as_deref());
                ws.audit(
                    "feedback_submit",
                    serde_json::json!({
                        "page": page,
                        "persisted": outcome.persisted,
                        "reports": outcome.reports.len()
                    }),
                );
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&JsonOut {
                            ok: true,
                            data: outcome
                        })?
                    );
                } else {
                    if !outcome.persisted {
                        println!("warning: feedback was not persisted");
                    }
                    for r in &outcome.reports {
                        println!("{}\t{}\t{}", r.rule, r.status.as_str(), r.message);
                    }
                }
            }
            FeedbackCommands::History { limit } => {
                let mut entries: Vec<FeedbackEntry> = ws.feedback_log().load();
                entries.reverse();
                if let Some(n) = limit {
                    entries.truncate(*n);
                }
                print_out(cli.json, &entries, |e| {
                    format!(
                        "{}\t{}\t{}",
                        e.created_at.to_rfc3339(),
                        e.page.as_deref().unwrap_or("-"),
                        e.text
                    )
                })?;
            }
        },
        Commands::Suggest { text } => {
            let rules = ws.active_rules();
            let matched: Vec<RuleInfo> = crate::rules::classify(text, &rules)
                .into_iter()
                .map(|r| RuleInfo {
                    kind: r.kind.to_string(),
                    title: r.title.to_string(),
                    description: r.description.to_string(),
                })
                .collect();
            if matched.is_empty() && !cli.json {
                println!("no suggestion found");
            } else {
                print_out(cli.json, &matched, |r| {
                    format!("{}\t{}\t{}", r.kind, r.title, r.description)
                })?;
            }
        }
        Commands::Rules => {
            let rules: Vec<RuleInfo> = ws
                .active_rules()
                .iter()
                .map(|r| RuleInfo {
                    kind: r.kind.to_string(),
                    title: r.title.to_string(),
                    description: r.description.to_string(),
                })
                .collect();
            print_out(cli.json, &rules, |r| {
                format!("{}\t{}\t{}", r.kind, r.title, r.description)
            })?;
        }
        Commands::Page { .. } => unreachable!("routed from main"),
    }

    Ok(())
}
