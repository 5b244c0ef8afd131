use regex::{Captures, Regex};
use std::{path::Path, sync::OnceLock};

use crate::{error::TemplateError, models::notification::ReminderContent};

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder regex")
    })
}

/// HTML reminder layout with `{{title}}` / `{{message}}` placeholders.
///
/// Loaded once and never mutated; every invocation renders into a fresh string.
#[derive(Debug, Clone)]
pub struct ReminderTemplate {
    source: String,
}

impl ReminderTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TemplateError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::new(source))
    }

    pub fn render(&self, content: &ReminderContent) -> Result<String, TemplateError> {
        let mut unknown = None;
        let rendered = placeholder().replace_all(&self.source, |caps: &Captures| {
            match &caps[1] {
                "title" => escape_html(&content.title),
                "message" => escape_html(&content.message),
                other => {
                    unknown.get_or_insert_with(|| other.to_string());
                    String::new()
                }
            }
        });

        match unknown {
            Some(name) => Err(TemplateError::UnknownPlaceholder(name)),
            None => Ok(rendered.into_owned()),
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
