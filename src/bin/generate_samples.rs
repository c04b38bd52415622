use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Generate a matching OPML/newsboat sample pair for testing the diff.
#[derive(Parser)]
struct Args {
    /// Output directory to write generated files into
    #[clap(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of feeds present in both files
    #[clap(short, long, default_value = "5")]
    common: usize,

    /// Number of feeds unique to each file
    #[clap(short, long, default_value = "2")]
    unique: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let common: Vec<String> = (0..args.common)
        .map(|i| format!("https://example.com/feed/{i:03}"))
        .collect();
    let opml_only: Vec<String> = (0..args.unique)
        .map(|i| format!("https://opml-only.example.com/feed/{i:03}"))
        .collect();
    let newsboat_only: Vec<String> = (0..args.unique)
        .map(|i| format!("https://newsboat-only.example.com/feed/{i:03}"))
        .collect();

    let mut opml_feeds = common.clone();
    opml_feeds.extend(opml_only);
    let opml_path = args.out_dir.join("sample.opml");
    fs::write(&opml_path, opml_document(&opml_feeds)?)
        .with_context(|| format!("failed to write {}", opml_path.display()))?;

    // Newsboat files interleave tag lines with URLs; the tag line must be
    // skipped by the parser.
    let mut lines = vec!["[--Samples--]".to_string()];
    lines.extend(common);
    lines.extend(newsboat_only);
    let urls_path = args.out_dir.join("sample-urls");
    fs::write(&urls_path, lines.join("\n") + "\n")
        .with_context(|| format!("failed to write {}", urls_path.display()))?;

    println!("Wrote: {}", opml_path.display());
    println!("Wrote: {}", urls_path.display());
    Ok(())
}

fn opml_document(urls: &[String]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut opml = BytesStart::new("opml");
    opml.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(opml))?;

    writer.write_event(Event::Start(BytesStart::new("head")))?;
    writer.write_event(Event::Start(BytesStart::new("title")))?;
    writer.write_event(Event::Text(BytesText::new("Sample subscriptions")))?;
    writer.write_event(Event::End(BytesEnd::new("title")))?;
    writer.write_event(Event::End(BytesEnd::new("head")))?;

    writer.write_event(Event::Start(BytesStart::new("body")))?;
    for url in urls {
        let mut outline = BytesStart::new("outline");
        outline.push_attribute(("type", "rss"));
        outline.push_attribute(("text", url.as_str()));
        outline.push_attribute(("xmlUrl", url.as_str()));
        writer.write_event(Event::Empty(outline))?;
    }
    writer.write_event(Event::End(BytesEnd::new("body")))?;

    writer.write_event(Event::End(BytesEnd::new("opml")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).context("generated OPML contains invalid UTF-8")
}
