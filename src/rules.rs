//! Static suggestion rule table and feedback classification.
//!
//! Classification is deterministic keyword containment over a normalized
//! form of the feedback text. The table is compiled into the binary; there
//! is no runtime registration.

/// A single improvement rule.
///
/// `marker` is a distinguishing substring of `block`; its presence in a
/// page's markup means the rule was already applied there.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub triggers: &'static [&'static str],
    pub marker: &'static str,
    pub block: &'static str,
}

/// Declaration order here is the order reports come back in.
/// `kind` must stay unique across the table.
pub const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        kind: "call-to-action",
        title: "Add a call to action",
        description: "The feedback mentions contact or conversion; add a prominent call-to-action section at the end of the page.",
        triggers: &[
            "call to action",
            "cta",
            "contact",
            "button",
            "問い合わせ",
            "ボタン",
            "誘導",
        ],
        marker: "data-sitemend=\"call-to-action\"",
        block: r#"<section data-sitemend="call-to-action" class="cta">
  <h2>Get in touch</h2>
  <p>Questions or feedback? We would love to hear from you.</p>
  <a class="cta-button" href="contact.html">Contact us</a>
</section>"#,
    },
    SuggestionRule {
        kind: "performance",
        title: "Defer image loading",
        description: "The feedback mentions slowness; mark images below the fold for lazy loading.",
        triggers: &[
            "slow", "speed", "performance", "loading", "遅い", "重い", "速度",
        ],
        marker: "data-sitemend=\"performance\"",
        block: r#"<script data-sitemend="performance">
  document.querySelectorAll("img:not([loading])").forEach((img) => {
    img.setAttribute("loading", "lazy");
  });
</script>"#,
    },
    SuggestionRule {
        kind: "freshness",
        title: "Show the last updated date",
        description: "The feedback mentions stale content; append a footer that shows when the page last changed.",
        triggers: &["outdated", "stale", "old content", "last updated", "更新", "古い"],
        marker: "data-sitemend=\"freshness\"",
        block: r#"<footer data-sitemend="freshness" class="page-updated">
  <small>Last updated: <span id="sitemend-updated"></span></small>
  <script>
    document.getElementById("sitemend-updated").textContent = document.lastModified;
  </script>
</footer>"#,
    },
    SuggestionRule {
        kind: "readability",
        title: "Improve text readability",
        description: "The feedback mentions hard-to-read text; relax line height and bump the base font size.",
        triggers: &[
            "hard to read",
            "readability",
            "small text",
            "font",
            "読みにく",
            "見にく",
            "文字",
        ],
        marker: "data-sitemend=\"readability\"",
        block: r#"<style data-sitemend="readability">
  body { line-height: 1.7; font-size: 1.05rem; }
</style>"#,
    },
];

/// Case fold plus half-width fold, so full-width latin input ("ＣＴＡ")
/// matches the same triggers as its ASCII spelling.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            _ => c,
        })
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Match `text` against `rules` in declaration order. Non-exclusive: one
/// text may match several rules. An empty result is a normal outcome.
pub fn classify<'a>(text: &str, rules: &'a [SuggestionRule]) -> Vec<&'a SuggestionRule> {
    let folded = normalize(text);
    rules
        .iter()
        .filter(|r| r.triggers.iter().any(|t| folded.contains(t)))
        .collect()
}
