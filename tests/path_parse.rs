use crawlbin::parse::{normalize, parse, ParsedBlock, Segment};
use crawlbin::resolve::resolve_str;
use crawlbin::{FixedIndex, MalformedInputError};

#[test]
fn bare_segment_gets_wrapped() {
    assert_eq!(normalize("h1_off+vary_cookie").unwrap(), "[h1_off+vary_cookie]");
}

#[test]
fn wrapped_segment_kept() {
    assert_eq!(normalize("[h1_off][vary_cookie]").unwrap(), "[h1_off][vary_cookie]");
}

#[test]
fn inner_brackets_become_parens() {
    assert_eq!(
        normalize("[meta_index+[vary_cookie,vary_referer]]").unwrap(),
        "[meta_index+(vary_cookie,vary_referer)]"
    );
}

#[test]
fn bare_segment_with_choice() {
    assert_eq!(normalize("a+[b,c]").unwrap(), "[a+(b,c)]");
}

#[test]
fn segment_starting_but_not_ending_with_bracket_is_wrapped() {
    assert_eq!(normalize("[a]+b").unwrap(), "[(a)+b]");
}

#[test]
fn malformed_inputs() {
    assert!(matches!(
        normalize("a]"),
        Err(MalformedInputError::UnexpectedClosingBracket { .. })
    ));
    assert!(matches!(
        normalize("[[[a]]]"),
        Err(MalformedInputError::TooDeepNesting { .. })
    ));
    assert_eq!(normalize("[a][b"), Err(MalformedInputError::UnclosedBracket));
}

#[test]
fn parse_full_path() {
    let parsed = parse("[mobile:response_404+[h1_off,h1_multiple]][vary_cookie]").unwrap();
    assert_eq!(
        parsed.blocks,
        vec![
            ParsedBlock {
                category: Some("mobile".into()),
                segments: vec![
                    Segment::Plain(vec!["response_404".into(), String::new()]),
                    Segment::Choice(vec!["h1_off".into(), "h1_multiple".into()]),
                    Segment::Plain(vec![String::new()]),
                ],
            },
            ParsedBlock {
                category: None,
                segments: vec![Segment::Plain(vec!["vary_cookie".into()])],
            },
        ]
    );
}

#[test]
fn category_prefix_allows_spaces_and_digits() {
    let parsed = parse("[team 2:h1_off]").unwrap();
    assert_eq!(parsed.blocks[0].category.as_deref(), Some("team 2"));
}

#[test]
fn uppercase_prefix_is_not_a_category() {
    let parsed = parse("[Bot:h1_off]").unwrap();
    assert_eq!(parsed.blocks[0].category, None);
}

#[test]
fn empty_choice_group_parses() {
    let parsed = parse("[a+[]]").unwrap();
    assert!(parsed.blocks[0]
        .segments
        .contains(&Segment::Choice(Vec::new())));
}

#[test]
fn resolver_pins_first_choice() {
    assert_eq!(resolve_str("a+(b,c)", &FixedIndex(0)).unwrap(), "a+b");
}

#[test]
fn resolver_pins_last_choice() {
    assert_eq!(resolve_str("a+(b,c)", &FixedIndex(9)).unwrap(), "a+c");
}

#[test]
fn resolver_drops_empty_groups_and_tokens() {
    assert_eq!(resolve_str("a++()+b", &FixedIndex(0)).unwrap(), "a+b");
}

#[test]
fn resolver_dedupes() {
    assert_eq!(resolve_str("a+(a,a)", &FixedIndex(0)).unwrap(), "a");
}
