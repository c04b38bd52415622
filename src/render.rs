use std::io::{self, IsTerminal};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::diff::LinkDiff;

pub fn render_report(diff: &LinkDiff) -> Result<()> {
    // Style only when talking to a terminal so piped output stays plain.
    let styled = io::stdout().is_terminal();
    render_section("New links from opml:", &diff.new_in_opml, styled);
    render_section("New links from newsboat:", &diff.new_in_newsboat, styled);
    Ok(())
}

fn render_section(header: &str, links: &[String], styled: bool) {
    if styled {
        println!("{}", header.bold());
    } else {
        println!("{header}");
    }
    for link in links {
        if styled {
            println!("{}", link.as_str().green());
        } else {
            println!("{link}");
        }
    }
}
