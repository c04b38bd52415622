use std::collections::HashSet;

/// The two one-sided differences between the OPML and newsboat link sets.
#[derive(Debug, PartialEq, Eq)]
pub struct LinkDiff {
    /// URLs present in the OPML source but missing from the newsboat list.
    pub new_in_opml: Vec<String>,
    /// URLs present in the newsboat list but missing from the OPML source.
    pub new_in_newsboat: Vec<String>,
}

pub fn compute_link_diff(opml: &HashSet<String>, newsboat: &HashSet<String>) -> LinkDiff {
    let mut new_in_opml: Vec<String> = opml.difference(newsboat).cloned().collect();
    let mut new_in_newsboat: Vec<String> = newsboat.difference(opml).cloned().collect();

    // Sets are unordered; sort so output is stable across runs.
    new_in_opml.sort();
    new_in_newsboat.sort();

    LinkDiff {
        new_in_opml,
        new_in_newsboat,
    }
}
