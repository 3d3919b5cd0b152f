use pocket2bookmark::conversion::{convert_all, replace_tag_delimiter};

fn tags_of(body: &str) -> &str {
    let start = body.find("TAGS=\"").unwrap() + 6;
    let end = body[start..].find("\">").unwrap() + start;
    &body[start..end]
}

#[test]
fn test_every_occurrence_replaced() {
    assert_eq!(replace_tag_delimiter("a|b|c|d", '|', ','), "a,b,c,d");
    assert_eq!(replace_tag_delimiter("|leading|", '|', ','), ",leading,");
    assert_eq!(replace_tag_delimiter("a||b", '|', ','), "a,,b");
}

#[test]
fn test_no_other_characters_altered() {
    let input = "Rust ü; C++ | go-lang |  spaced ";
    let output = replace_tag_delimiter(input, '|', ',');

    assert_eq!(output.chars().count(), input.chars().count());
    for (before, after) in input.chars().zip(output.chars()) {
        if before == '|' {
            assert_eq!(after, ',');
        } else {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_multibyte_delimiters() {
    assert_eq!(replace_tag_delimiter("a→b", '→', '·'), "a·b");
}

#[test]
fn test_tag_containing_output_delimiter_is_lossy() {
    // "a,b" was one tag in the export; after substitution it reads like two
    let single_tag = vec![vec!["t", "u", "1", "a,b|c"]];
    let split_tags = vec![vec!["t", "u", "1", "a|b|c"]];

    let from_single = convert_all(single_tag, false, '|', ',').unwrap();
    let from_split = convert_all(split_tags, false, '|', ',').unwrap();

    assert_eq!(tags_of(&from_single), "a,b,c");
    assert_eq!(tags_of(&from_single), tags_of(&from_split));
}

#[test]
fn test_custom_delimiters_through_conversion() {
    let rows = vec![vec!["t", "u", "1", "one;two;three"]];
    let body = convert_all(rows, false, ';', ' ').unwrap();
    assert_eq!(tags_of(&body), "one two three");
}

#[test]
fn test_empty_tags() {
    let rows = vec![vec!["t", "u", "1", ""]];
    let body = convert_all(rows, false, '|', ',').unwrap();
    assert_eq!(tags_of(&body), "");
}
