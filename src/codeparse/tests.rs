use super::{CodeParser, CodeTemplate};
use crate::error::Error;

fn amazon_parser() -> CodeParser {
    let mut parser = CodeParser::new();
    parser
        .add(
            CodeTemplate::new(
                "AmazonAffiliate",
                r#"<a href="http://www.amazon.com/gp/product/{ASIN}/{AffiliateCode}">{Title}</a>"#,
            )
            .with_default("AffiliateCode", "my-amazon-code"),
        )
        .unwrap();
    parser
}

#[test]
fn amazon_affiliate_marker_renders() {
    let parser = amazon_parser();
    let input =
        "The book you should study is {{AmazonAffiliate:ASIN=B00SLXVBC4;Title=Elasticsearch: The Definitive Guide}}.";
    let expected = r#"The book you should study is <a href="http://www.amazon.com/gp/product/B00SLXVBC4/my-amazon-code">Elasticsearch: The Definitive Guide</a>."#;
    assert_eq!(parser.parse(input), expected);
}

#[test]
fn youtube_marker_renders() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("YouTube", "https://www.youtube.com/watch?v={Code}")).unwrap();

    let out = parser.parse("The book is {{YouTube:Code=XC2RYiaM6WU}}.");
    assert_eq!(out, "The book is https://www.youtube.com/watch?v=XC2RYiaM6WU.");
}

#[test]
fn unregistered_tag_passes_through() {
    let parser = CodeParser::new();
    let input = "x {{Unknown:a=1}} y";
    assert_eq!(parser.parse(input), input);
}

#[test]
fn duplicate_tag_registration_is_an_error() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("Tag", "{A}")).unwrap();
    let err = parser.add(CodeTemplate::new("Tag", "{B}")).unwrap_err();
    assert!(matches!(err, Error::DuplicateTag(tag) if tag == "Tag"));
    assert_eq!(parser.len(), 1);
    assert_eq!(parser.handler("Tag").unwrap().template(), "{A}");
}

#[test]
fn inline_value_beats_handler_default() {
    let parser = amazon_parser();
    let out = parser.parse("{{AmazonAffiliate:ASIN=X;Title=T;AffiliateCode=override}}");
    assert_eq!(out, r#"<a href="http://www.amazon.com/gp/product/X/override">T</a>"#);
}

#[test]
fn first_inline_occurrence_of_a_name_wins() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("Echo", "{A}")).unwrap();

    let out = parser.parse("{{Echo:A=first;A=second}}");
    assert_eq!(out, "first");
}

#[test]
fn single_quoted_value_may_embed_the_pair_separator() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("Echo", "{A}|{B}")).unwrap();

    let out = parser.parse("{{Echo:A='x;y';B=2}}");
    assert_eq!(out, "x;y|2");
}

#[test]
fn malformed_pair_is_skipped_not_fatal() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("Echo", "{A}-{B}")).unwrap();

    // "junk" has no `=` and is dropped; the valid pairs still render.
    let out = parser.parse("{{Echo:A=1;junk;B=2}}");
    assert_eq!(out, "1-2");
}

#[test]
fn multiple_markers_resolve_independently_left_to_right() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("YouTube", "https://www.youtube.com/watch?v={Code}")).unwrap();
    parser.add(CodeTemplate::new("Echo", "{A}")).unwrap();

    let out = parser.parse("{{Echo:A=one}} and {{YouTube:Code=abc}} and {{Echo:A=two}}");
    assert_eq!(out, "one and https://www.youtube.com/watch?v=abc and two");
}

#[test]
fn repeated_identical_markers_each_render() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("Echo", "[{A}]")).unwrap();

    let out = parser.parse("{{Echo:A=x}} {{Echo:A=x}}");
    assert_eq!(out, "[x] [x]");
}

#[test]
fn marker_with_only_defaults_renders() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("Badge", "[{Label}]").with_default("Label", "new")).unwrap();

    // The pair series must be non-empty to form a marker; an unknown name
    // merely goes unused by the template.
    let out = parser.parse("{{Badge:x=1}}");
    assert_eq!(out, "[new]");
}

#[test]
fn mixed_registered_and_unregistered_markers() {
    let mut parser = CodeParser::new();
    parser.add(CodeTemplate::new("Echo", "{A}")).unwrap();

    let out = parser.parse("{{Echo:A=ok}} {{Nope:A=1}}");
    assert_eq!(out, "ok {{Nope:A=1}}");
}
