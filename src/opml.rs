use std::collections::HashSet;
use std::fs;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Errors that can occur while reading an OPML subscription list.
#[derive(Debug, Error)]
pub enum OpmlError {
    /// File I/O error.
    #[error("failed to read OPML file: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing failed.
    #[error("XML parse error: {0}")]
    Xml(String),

    /// The document has no `<body>` element.
    #[error("no <body> element in OPML document")]
    MissingBody,

    /// A subscription outline lacks the required `xmlUrl` attribute.
    #[error("<outline> element missing the xmlUrl attribute")]
    MissingXmlUrl,
}

/// Reads feed URLs from an OPML file.
///
/// Only direct `<outline>` children of the document's first `<body>` are
/// consulted, and each must carry an `xmlUrl` attribute. Outlines nested
/// deeper than one level below `<body>` are not visited.
pub fn parse_file(path: &str) -> Result<HashSet<String>, OpmlError> {
    let content = fs::read_to_string(path)?;
    let links = parse_links(&content)?;
    debug!("parsed {} link(s) from {}", links.len(), path);
    Ok(links)
}

fn parse_links(content: &str) -> Result<HashSet<String>, OpmlError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut links = HashSet::new();
    let mut buf = Vec::new();
    let mut body_seen = false;
    let mut in_body = false;
    // Depth below <body>; direct children sit at depth 0.
    let mut depth: usize = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if !in_body => {
                if !body_seen && e.name().as_ref() == b"body" {
                    body_seen = true;
                    in_body = true;
                }
            }
            Ok(Event::Start(e)) => {
                if depth == 0 && e.name().as_ref() == b"outline" {
                    links.insert(xml_url(&e, &reader)?);
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) if !in_body => {
                if !body_seen && e.name().as_ref() == b"body" {
                    // <body/> with no outlines
                    body_seen = true;
                }
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 && e.name().as_ref() == b"outline" {
                    links.insert(xml_url(&e, &reader)?);
                }
            }
            Ok(Event::End(_)) if in_body => {
                if depth == 0 {
                    // closing </body>; any later <body> is never visited
                    in_body = false;
                } else {
                    depth -= 1;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(OpmlError::Xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if !body_seen {
        return Err(OpmlError::MissingBody);
    }
    Ok(links)
}

fn xml_url(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<String, OpmlError> {
    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| OpmlError::Xml(e.to_string()))?;
        if attr.key.as_ref() == b"xmlUrl" {
            let value = attr
                .decode_and_unescape_value(reader.decoder())
                .map_err(|e| OpmlError::Xml(e.to_string()))?;
            return Ok(value.to_string());
        }
    }
    Err(OpmlError::MissingXmlUrl)
}
