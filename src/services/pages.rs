use crate::services::storage::PageStore;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("invalid page name: {0} (use letters, digits, hyphen, underscore)")]
    InvalidName(String),
    #[error("page already exists: {0}")]
    AlreadyExists(String),
    #[error("page not found: {0}")]
    NotFound(String),
}

/// Page names are restricted to `[A-Za-z0-9_-]+` and stored lowercased.
pub fn sanitize_page_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some(name.to_ascii_lowercase())
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn blank_page_template(name: &str) -> String {
    let title = escape_html(name);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>{title}</title>\n</head>\n<body>\n    <h1>{title}</h1>\n    <p>Start editing this page to add content.</p>\n</body>\n</html>\n"
    )
}

/// Create a page from the blank template. Refuses to clobber an existing
/// page; returns the sanitized slug on success.
pub fn create_page(store: &dyn PageStore, name: &str) -> anyhow::Result<String> {
    let slug =
        sanitize_page_name(name).ok_or_else(|| PageError::InvalidName(name.to_string()))?;
    if store.read(&slug)?.is_some() {
        return Err(PageError::AlreadyExists(slug).into());
    }
    store.write(&slug, &blank_page_template(&slug))?;
    Ok(slug)
}

/// Overwrite a page's markup verbatim. Saving a slug with no stored page
/// creates it, matching the editor's save path.
pub fn save_page(store: &dyn PageStore, name: &str, content: &str) -> anyhow::Result<String> {
    let slug =
        sanitize_page_name(name).ok_or_else(|| PageError::InvalidName(name.to_string()))?;
    store.write(&slug, content)?;
    Ok(slug)
}

pub fn show_page(store: &dyn PageStore, name: &str) -> anyhow::Result<String> {
    let slug =
        sanitize_page_name(name).ok_or_else(|| PageError::InvalidName(name.to_string()))?;
    store
        .read(&slug)?
        .ok_or_else(|| PageError::NotFound(slug).into())
}
