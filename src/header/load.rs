use super::scan::extract_model;
use super::types::HeaderModel;
use anyhow::Context;
use std::path::Path;

/// Strip comments and blanks, yielding the declaration lines of `text`
///
/// Each line is cut at the first `//`, trimmed, and omitted entirely if
/// nothing remains. Lazy over the input; the scanner stops consuming as
/// soon as the record body ends.
pub fn normalize_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter_map(|line| {
        let line = match line.find("//") {
            Some(comment) => &line[..comment],
            None => line,
        };
        let line = line.trim();
        (!line.is_empty()).then_some(line)
    })
}

/// Read a header file and scan it into a [`HeaderModel`]
pub fn load_header(path: impl AsRef<Path>) -> anyhow::Result<HeaderModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read header file: {path:?}"))?;
    let model = extract_model(&content)
        .with_context(|| format!("Failed to scan header file: {path:?}"))?;
    Ok(model)
}
