use crate::domain::models::{ConfigFile, FeedbackEntry};
use std::path::{Path, PathBuf};

/// Pages are read and written through this port so the pipeline never
/// touches the filesystem directly.
pub trait PageStore {
    fn read(&self, slug: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, slug: &str, content: &str) -> anyhow::Result<()>;
    fn list(&self) -> anyhow::Result<Vec<String>>;
}

/// Append-only feedback history. `load` is best-effort: a missing or
/// unparsable log reads as empty rather than erroring.
pub trait FeedbackLog {
    fn load(&self) -> Vec<FeedbackEntry>;
    fn append(&self, entry: FeedbackEntry) -> anyhow::Result<()>;
}

/// Resolved site directory layout: pages folder, feedback log, audit log.
pub struct Workspace {
    root: PathBuf,
    pages_dir: PathBuf,
    feedback_path: PathBuf,
    disabled_rules: Vec<String>,
}

impl Workspace {
    pub fn open(site: &str) -> anyhow::Result<Self> {
        let root = PathBuf::from(site);
        let config = load_config(&root)?;
        let pages_dir = root.join(config.general.pages_dir.as_deref().unwrap_or("pages"));
        let feedback_path = root.join(
            config
                .general
                .feedback_file
                .as_deref()
                .unwrap_or("feedback.json"),
        );
        Ok(Workspace {
            root,
            pages_dir,
            feedback_path,
            disabled_rules: config.general.disabled_rules,
        })
    }

    pub fn pages(&self) -> FsPageStore {
        FsPageStore {
            dir: self.pages_dir.clone(),
        }
    }

    pub fn feedback_log(&self) -> JsonFeedbackLog {
        JsonFeedbackLog {
            path: self.feedback_path.clone(),
        }
    }

    pub fn active_rules(&self) -> Vec<crate::rules::SuggestionRule> {
        crate::rules::RULES
            .iter()
            .filter(|r| !self.disabled_rules.iter().any(|d| d == r.kind))
            .copied()
            .collect()
    }

    pub fn audit(&self, action: &str, data: serde_json::Value) {
        audit(&self.root, action, data);
    }
}

fn load_config(root: &Path) -> anyhow::Result<ConfigFile> {
    let path = root.join("sitemend.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Stores each page as `<dir>/<slug>.html`.
pub struct FsPageStore {
    dir: PathBuf,
}

impl PageStore for FsPageStore {
    fn read(&self, slug: &str) -> anyhow::Result<Option<String>> {
        let path = self.dir.join(format!("{}.html", slug));
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&self, slug: &str, content: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(format!("{}.html", slug)), content)?;
        Ok(())
    }

    fn list(&self) -> anyhow::Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(vec![]);
        }
        let mut out = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.file_type()?.is_file() {
                if let Some(stem) = name.strip_suffix(".html") {
                    out.push(stem.to_string());
                }
            }
        }
        out.sort();
        Ok(out)
    }
}

/// The whole history is rewritten on every append. The log is small and
/// best-effort; it is not a correctness-critical ledger.
pub struct JsonFeedbackLog {
    path: PathBuf,
}

impl FeedbackLog for JsonFeedbackLog {
    fn load(&self) -> Vec<FeedbackEntry> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return vec![];
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn append(&self, entry: FeedbackEntry) -> anyhow::Result<()> {
        let mut entries = self.load();
        entries.push(entry);
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

pub fn audit(root: &Path, action: &str, data: serde_json::Value) {
    let path = root.join(".sitemend/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
