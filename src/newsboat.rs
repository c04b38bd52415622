use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};
use log::debug;

/// Prefix marking newsboat tag/metadata lines, which carry no URL.
const TAG_PREFIX: &str = "[--";

/// Reads feed URLs from a newsboat-style urls file, one URL per line.
/// Tag lines are skipped; everything else lands in the set with trailing
/// whitespace stripped. Duplicate lines collapse.
pub fn parse_file(path: &str) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read newsboat urls file {path}"))?;
    let links = parse_links(&content);
    debug!("parsed {} link(s) from {}", links.len(), path);
    Ok(links)
}

fn parse_links(content: &str) -> HashSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(TAG_PREFIX))
        .map(|line| line.trim_end().to_string())
        .collect()
}
