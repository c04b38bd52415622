pub mod cli;
pub mod diff;
pub mod newsboat;
pub mod opml;
pub mod render;

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::Args;

pub fn run(args: Args) -> Result<()> {
    // Both paths are checked before any parsing starts, failing on the
    // first missing one.
    check_files(&[&args.opml_filepath, &args.newsboat_filepath])?;

    let opml_links = opml::parse_file(&args.opml_filepath)
        .with_context(|| format!("failed to parse OPML file {}", args.opml_filepath))?;
    let newsboat_links = newsboat::parse_file(&args.newsboat_filepath)?;

    let diff = diff::compute_link_diff(&opml_links, &newsboat_links);
    render::render_report(&diff)
}

fn check_files(paths: &[&str]) -> Result<()> {
    for path in paths {
        if !Path::new(path).exists() {
            bail!("File \"{path}\" not found");
        }
    }
    Ok(())
}
