use assert_matches::assert_matches;
use pocket2bookmark::conversion::{convert_all, ConversionEngine};
use pocket2bookmark::{ConversionConfig, ConversionError};
use pretty_assertions::assert_eq;

fn header() -> Vec<&'static str> {
    vec!["title", "url", "time_added", "tags"]
}

#[test]
fn test_example_row_renders_exactly() {
    let rows = vec![
        header(),
        vec!["My Site", "http://example.com", "1690000000", "tech|news"],
    ];

    let body = convert_all(rows, true, '|', ',').unwrap();
    assert_eq!(
        body,
        "<DT><A HREF=\"http://example.com\" ADD_DATE=\"1690000000\" TAGS=\"tech,news\">My Site</A>\n"
    );
}

#[test]
fn test_output_row_count_matches_input() {
    let mut rows = vec![header()];
    for _ in 0..25 {
        rows.push(vec!["t", "http://x", "1", ""]);
    }

    let skipped = convert_all(rows.clone(), true, '|', ',').unwrap();
    assert_eq!(skipped.lines().count(), 25);

    let kept = convert_all(rows, false, '|', ',').unwrap();
    assert_eq!(kept.lines().count(), 26);
}

#[test]
fn test_row_order_preserved() {
    let titles = ["zeta", "alpha", "mu", "beta"];
    let rows: Vec<Vec<&str>> = titles
        .iter()
        .map(|t| vec![*t, "http://x", "1", ""])
        .collect();

    let body = convert_all(rows, false, '|', ',').unwrap();
    let rendered: Vec<&str> = body
        .lines()
        .map(|line| {
            let start = line.find("\">").unwrap() + 2;
            let end = line.rfind("</A>").unwrap();
            &line[start..end]
        })
        .collect();
    assert_eq!(rendered, titles);
}

#[test]
fn test_title_is_trimmed() {
    let rows = vec![vec!["  My Title  ", "http://x", "1", ""]];
    let body = convert_all(rows, false, '|', ',').unwrap();
    assert!(body.contains(">My Title</A>"));
}

#[test]
fn test_field_count_boundaries() {
    let three = vec![header(), vec!["t", "u", "1"]];
    assert_matches!(
        convert_all(three, true, '|', ','),
        Err(ConversionError::MalformedRecord { row: 1, fields: 3 })
    );

    let four = vec![header(), vec!["t", "u", "1", "x"]];
    assert!(convert_all(four, true, '|', ',').is_ok());

    let six = vec![header(), vec!["t", "u", "1", "x", "0", "unread"]];
    let body = convert_all(six, true, '|', ',').unwrap();
    assert!(!body.contains("unread"));
}

#[test]
fn test_empty_row_is_malformed() {
    let rows: Vec<Vec<&str>> = vec![vec![]];
    assert_matches!(
        convert_all(rows, false, '|', ','),
        Err(ConversionError::MalformedRecord { row: 1, fields: 0 })
    );
}

#[test]
fn test_header_only_document() {
    let engine = ConversionEngine::new(ConversionConfig::default());
    let doc = engine
        .convert_str("title,url,time_added,tags\n", "part_000000.csv")
        .unwrap();

    assert_eq!(
        doc.content,
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
<TITLE>Bookmarks</TITLE>\n\
<H1>Bookmarks</H1>\n\
<H2>part_000000.csv</H2>\n\
<DL><p>\n\
</DL><p>"
    );
}

#[test]
fn test_markup_characters_pass_through() {
    let rows = vec![vec!["<script>", "http://x/?a=\"b\"", "1", "a&b"]];
    let body = convert_all(rows, false, '|', ',').unwrap();
    assert_eq!(
        body,
        "<DT><A HREF=\"http://x/?a=\"b\"\" ADD_DATE=\"1\" TAGS=\"a&b\"><script></A>\n"
    );
}
