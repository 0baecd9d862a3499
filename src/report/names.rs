use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One username per line; surrounding whitespace trimmed, blank lines skipped
pub fn read_usernames<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read usernames from {}", path.display()))?;
    Ok(parse_usernames(&contents))
}

fn parse_usernames(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
