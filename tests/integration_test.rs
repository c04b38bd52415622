use opml_nb_diff::{newsboat, opml};

#[test]
fn parse_sample_files() {
    let opml_links = opml::parse_file("tests/fixtures/sample.opml").expect("parse opml");
    let newsboat_links = newsboat::parse_file("tests/fixtures/sample-urls").expect("parse urls");

    assert_eq!(opml_links.len(), 3);
    assert!(opml_links.contains("http://a.example.com/feed"));
    assert!(opml_links.contains("http://d.example.com/feed"));

    // Three distinct URLs: the duplicate line collapses and tag lines are out.
    assert_eq!(newsboat_links.len(), 3);
    assert!(newsboat_links.contains("http://c.example.com/feed"));
}

#[test]
fn tag_lines_are_excluded() {
    let newsboat_links = newsboat::parse_file("tests/fixtures/sample-urls").expect("parse urls");
    assert!(!newsboat_links.iter().any(|l| l.starts_with("[--")));
}

#[test]
fn missing_file_is_an_error() {
    assert!(opml::parse_file("tests/fixtures/no-such.opml").is_err());
    assert!(newsboat::parse_file("tests/fixtures/no-such-urls").is_err());
}
