//! Small text helpers shared across generation.

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Escape a value for inclusion inside a single-quoted TypeScript string
/// literal. Backslashes first so escaped quotes are not double-escaped.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render a JSDoc block from an optional summary and description.
/// Returns `None` when neither is present.
pub fn doc_comment(summary: Option<&str>, description: Option<&str>) -> Option<String> {
    if summary.is_none() && description.is_none() {
        return None;
    }
    let mut lines = vec!["/**".to_string()];
    if let Some(summary) = summary {
        lines.push(format!(" * @summary {summary}"));
    }
    if let Some(description) = description {
        lines.push(format!(" * @description {description}"));
    }
    lines.push(" */".to_string());
    Some(lines.join("\n"))
}
