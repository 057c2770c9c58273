use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestEnv {
    _tmp: TempDir,
    site: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let site = tmp.path().join("site");
        fs::create_dir_all(&site).expect("create site dir");
        Self { _tmp: tmp, site }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sitemend").expect("binary built");
        cmd.arg("--site")
            .arg(self.site.to_str().expect("site path utf8"));
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    fn page_path(&self, slug: &str) -> PathBuf {
        self.site.join("pages").join(format!("{}.html", slug))
    }
}

#[test]
fn page_create_list_show_cycle() {
    let env = TestEnv::new();

    let created = env.run_json(&["page", "create", "Home"]);
    assert_eq!(created["ok"], true);
    assert_eq!(created["data"], "home");
    assert!(env.page_path("home").exists());

    let list = env.run_json(&["page", "list"]);
    assert_eq!(list["ok"], true);
    let names = list["data"].as_array().expect("page name array");
    assert_eq!(names.len(), 1);
    assert_eq!(names[0], "home");

    let show = env.run_json(&["page", "show", "home"]);
    assert_eq!(show["data"]["page"], "home");
    let content = show["data"]["content"].as_str().expect("content string");
    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("<title>home</title>"));
}

#[test]
fn invalid_page_name_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["page", "create", "bad name!"])
        .assert()
        .failure()
        .stderr(contains("invalid page name"));
    env.cmd()
        .args(["page", "create", "../escape"])
        .assert()
        .failure()
        .stderr(contains("invalid page name"));
}

#[test]
fn create_refuses_duplicate_page() {
    let env = TestEnv::new();
    env.run_json(&["page", "create", "home"]);
    env.cmd()
        .args(["page", "create", "HOME"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn feedback_applies_block_then_skips() {
    let env = TestEnv::new();
    env.run_json(&["page", "create", "home"]);

    let first = env.run_json(&["feedback", "submit", "the page is slow", "--page", "home"]);
    assert_eq!(first["data"]["persisted"], true);
    assert_eq!(first["data"]["reports"][0]["rule"], "performance");
    assert_eq!(first["data"]["reports"][0]["status"], "applied");
    let after_first = fs::read_to_string(env.page_path("home")).expect("page file");
    assert!(after_first.contains("data-sitemend=\"performance\""));

    let second = env.run_json(&["feedback", "submit", "the page is slow", "--page", "home"]);
    assert_eq!(second["data"]["reports"][0]["status"], "skipped");
    let after_second = fs::read_to_string(env.page_path("home")).expect("page file");
    assert_eq!(after_second, after_first);
}

#[test]
fn multi_match_reports_follow_table_order() {
    let env = TestEnv::new();
    env.run_json(&["page", "create", "home"]);

    let out = env.run_json(&[
        "feedback",
        "submit",
        "slow page, and please add a contact button",
        "--page",
        "home",
    ]);
    let reports = out["data"]["reports"].as_array().expect("report array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["rule"], "call-to-action");
    assert_eq!(reports[0]["status"], "applied");
    assert_eq!(reports[1]["rule"], "performance");
    assert_eq!(reports[1]["status"], "applied");
}

#[test]
fn feedback_without_target_reports_note_and_mutates_nothing() {
    let env = TestEnv::new();
    env.run_json(&["page", "create", "home"]);
    let before = fs::read_to_string(env.page_path("home")).expect("page file");

    let out = env.run_json(&["feedback", "submit", "slow page, please improve speed"]);
    assert_eq!(out["data"]["persisted"], true);
    assert_eq!(out["data"]["reports"][0]["rule"], "performance");
    assert_eq!(out["data"]["reports"][0]["status"], "note");

    let after = fs::read_to_string(env.page_path("home")).expect("page file");
    assert_eq!(after, before);
}

#[test]
fn empty_feedback_is_rejected_without_logging() {
    let env = TestEnv::new();
    env.run_json(&["page", "create", "home"]);

    let out = env.run_json(&["feedback", "submit", "   ", "--page", "home"]);
    assert_eq!(out["data"]["persisted"], false);
    assert_eq!(out["data"]["reports"][0]["status"], "error");
    assert!(!env.site.join("feedback.json").exists());
}

#[test]
fn unmatched_feedback_notes_no_suggestion() {
    let env = TestEnv::new();
    let out = env.run_json(&["feedback", "submit", "lovely site, thank you"]);
    assert_eq!(out["data"]["persisted"], true);
    assert_eq!(out["data"]["reports"][0]["rule"], "none");
    assert_eq!(out["data"]["reports"][0]["status"], "note");
}

#[test]
fn page_without_body_anchor_gets_block_appended() {
    let env = TestEnv::new();
    env.run_json(&["page", "save", "frag", "--content", "<p>just a fragment</p>"]);

    let out = env.run_json(&["feedback", "submit", "so slow", "--page", "frag"]);
    assert_eq!(out["data"]["reports"][0]["status"], "applied");

    let content = fs::read_to_string(env.page_path("frag")).expect("page file");
    assert!(content.starts_with("<p>just a fragment</p>"));
    assert!(content.contains("data-sitemend=\"performance\""));
}

#[test]
fn history_lists_most_recent_first() {
    let env = TestEnv::new();
    env.run_json(&["feedback", "submit", "older note about fonts"]);
    env.run_json(&["feedback", "submit", "newer note, page is slow"]);

    let hist = env.run_json(&["feedback", "history"]);
    let entries = hist["data"].as_array().expect("history array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["text"], "newer note, page is slow");
    assert_eq!(entries[1]["text"], "older note about fonts");

    let limited = env.run_json(&["feedback", "history", "--limit", "1"]);
    assert_eq!(limited["data"].as_array().expect("history array").len(), 1);
}

#[test]
fn suggest_is_a_dry_run() {
    let env = TestEnv::new();
    let out = env.run_json(&["suggest", "the page feels slow"]);
    let matched = out["data"].as_array().expect("suggestion array");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["kind"], "performance");
    assert!(!env.site.join("feedback.json").exists());
    assert!(!env.site.join("pages").exists());
}

#[test]
fn disabled_rule_is_excluded_from_classification() {
    let env = TestEnv::new();
    fs::write(
        env.site.join("sitemend.toml"),
        "[general]\ndisabled_rules = [\"performance\"]\n",
    )
    .expect("write config");
    env.run_json(&["page", "create", "home"]);

    let out = env.run_json(&["feedback", "submit", "the page is slow", "--page", "home"]);
    assert_eq!(out["data"]["reports"][0]["rule"], "none");
    assert_eq!(out["data"]["reports"][0]["status"], "note");

    let rules = env.run_json(&["rules"]);
    let kinds: Vec<&str> = rules["data"]
        .as_array()
        .expect("rule array")
        .iter()
        .map(|r| r["kind"].as_str().expect("kind string"))
        .collect();
    assert!(!kinds.contains(&"performance"));
}
