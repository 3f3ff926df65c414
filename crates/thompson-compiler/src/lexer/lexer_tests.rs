use thompson_core::{MetaChar, Span};

use super::{LexError, Quantity, QuantityKind, TokenKind, lex};
use crate::test_utils::dump_tokens;

fn snapshot(source: &str) -> String {
    let tokens = lex(source).unwrap();
    dump_tokens(source, &tokens)
}

fn error(source: &str) -> LexError {
    lex(source).unwrap_err()
}

#[test]
fn plain_chars() {
    insta::assert_snapshot!(snapshot("a中$,-"), @r#"
    Char "a"
    Char "中"
    Char "$"
    Char ","
    Char "-"
    "#);
}

#[test]
fn escapes_and_meta_chars() {
    insta::assert_snapshot!(snapshot(r"\*\\\d.\n"), @r#"
    Char "\*"
    Char "\\"
    Meta "\d"
    Meta "."
    Meta "\n"
    "#);
}

#[test]
fn unicode_escapes() {
    let tokens = lex(r"\u{6587}\u{0200d3}").unwrap();

    assert_eq!(
        tokens[0].kind,
        TokenKind::Unicode {
            code_point: 0x6587,
            width: 4
        }
    );
    assert_eq!(
        tokens[1].kind,
        TokenKind::Unicode {
            code_point: 0x200d3,
            width: 6
        }
    );
    assert_eq!(tokens[1].span, Span::new(8, 18));
}

#[test]
fn unicode_escape_drops_trailing_spaces() {
    let tokens = lex(r"\u{41  }").unwrap();

    assert_eq!(
        tokens[0].kind,
        TokenKind::Unicode {
            code_point: 0x41,
            width: 4
        }
    );
}

#[test]
fn char_set_members() {
    insta::assert_snapshot!(snapshot(r"[^a-z\d-]"), @r#"
    CharSet "[^a-z\d-]"
      Entity "^"
      Char "a"
      Entity "-"
      Char "z"
      Meta "\d"
      Char "-"
    "#);
}

#[test]
fn char_set_punctuation_is_literal() {
    insta::assert_snapshot!(snapshot(r"[-*+?.{}()[\]^$\\|]"), @r#"
    CharSet "[-*+?.{}()[\]^$\\|]"
      Char "-"
      Char "*"
      Char "+"
      Char "?"
      Char "."
      Char "{"
      Char "}"
      Char "("
      Char ")"
      Char "["
      Char "\]"
      Char "^"
      Char "$"
      Char "\\"
      Char "|"
    "#);
}

#[test]
fn escaped_dash_in_set() {
    insta::assert_snapshot!(snapshot(r"[+\-0]"), @r#"
    CharSet "[+\-0]"
      Char "+"
      Char "\-"
      Char "0"
    "#);
}

#[test]
fn quantifiers() {
    insta::assert_snapshot!(snapshot("a*b+?c?d{2}e{2,4}?f{5,}"), @r#"
    Char "a"
    Quantity "*"
    Char "b"
    LazyQuantity "+?"
    Char "c"
    Quantity "?"
    Char "d"
    Quantity "{2}"
    Char "e"
    LazyQuantity "{2,4}?"
    Char "f"
    Quantity "{5,}"
    "#);
}

#[test]
fn quantity_bounds_drop_trailing_spaces() {
    let tokens = lex("a{2 ,4 }").unwrap();

    assert_eq!(
        tokens[1].kind,
        TokenKind::Quantity(Quantity {
            kind: QuantityKind::Range { from: 2, to: 4 },
            greedy: true,
        })
    );
}

#[test]
fn quantity_bounds_reject_leading_blanks() {
    assert_eq!(
        error("a{ 2}"),
        LexError::InvalidDecimalDigits {
            span: Span::new(2, 4)
        }
    );
    assert!(matches!(error("a{\t2}"), LexError::InvalidDecimalDigits { .. }));
    assert!(matches!(error("a{2\t}"), LexError::InvalidDecimalDigits { .. }));
    assert!(matches!(error("a{1, 3}"), LexError::InvalidDecimalDigits { .. }));
}

#[test]
fn group_feature_markers() {
    insta::assert_snapshot!(snapshot("(?:a)|(b)"), @r#"
    Entity "("
    Entity "?"
    Char ":"
    Char "a"
    Entity ")"
    Entity "|"
    Entity "("
    Char "b"
    Entity ")"
    "#);
}

#[test]
fn trailing_question_after_lazy_bound() {
    insta::assert_snapshot!(snapshot("a{2}??"), @r#"
    Char "a"
    LazyQuantity "{2}?"
    Quantity "?"
    "#);
}

#[test]
fn unterminated() {
    assert_eq!(
        error("ab[cd"),
        LexError::UnterminatedCharSet {
            span: Span::new(2, 5)
        }
    );
    assert_eq!(
        error("a{2"),
        LexError::UnterminatedQuantity {
            span: Span::new(1, 3)
        }
    );
}

#[test]
fn quantity_errors() {
    assert!(matches!(error("a{}"), LexError::EmptyQuantity { .. }));
    assert!(matches!(error("a{,3}"), LexError::MissingLowerBound { .. }));
    assert!(matches!(error("a{x}"), LexError::InvalidDecimalDigits { .. }));
    assert!(matches!(error("a{1,y}"), LexError::InvalidDecimalDigits { .. }));
    assert!(matches!(error("a{99999999999}"), LexError::InvalidDecimalDigits { .. }));
    assert!(matches!(error("a{ }"), LexError::BlankDecimalDigits { .. }));
    assert!(matches!(error("a{1, }"), LexError::BlankDecimalDigits { .. }));
}

#[test]
fn number_error_span_points_at_bound() {
    assert_eq!(
        error("a{1,zz}"),
        LexError::InvalidDecimalDigits {
            span: Span::new(4, 6)
        }
    );
}

#[test]
fn escape_errors() {
    assert_eq!(
        error(r"a\q"),
        LexError::UnsupportedEscape {
            target: Some('q'),
            span: Span::new(1, 3)
        }
    );
    assert_eq!(
        error("a\\"),
        LexError::UnsupportedEscape {
            target: None,
            span: Span::new(1, 2)
        }
    );
    assert!(matches!(error(r"\-"), LexError::UnsupportedEscape { .. }));
}

#[test]
fn unicode_errors() {
    assert!(matches!(error(r"\u{41}"), LexError::InvalidUnicodeEscape { .. }));
    assert!(matches!(error(r"\uA"), LexError::InvalidUnicodeEscape { .. }));
    assert!(matches!(error(r"\u{zz12}"), LexError::InvalidHexDigits { .. }));
    assert!(matches!(error(r"\u{    }"), LexError::BlankHexDigits { .. }));
    assert!(matches!(error(r"\u{ 061}"), LexError::InvalidHexDigits { .. }));
    assert!(matches!(error(r"\u{ 61 }"), LexError::InvalidHexDigits { .. }));
    assert!(matches!(error(r"\u{110000}"), LexError::CodePointOutOfRange { .. }));
}

#[test]
fn meta_chars_inside_set() {
    let tokens = lex(r"[\W]").unwrap();

    let TokenKind::CharSet(inner) = &tokens[0].kind else {
        panic!("expected char set");
    };
    assert_eq!(inner[0].kind, TokenKind::Meta(MetaChar::NotWord));
}

#[test]
fn tokens_serialize_to_json() {
    let tokens = lex("a*").unwrap();

    let json = serde_json::to_string(&tokens).unwrap();

    insta::assert_snapshot!(json, @r#"[{"kind":{"Char":"a"},"span":{"start":0,"end":1}},{"kind":{"Quantity":{"kind":"Star","greedy":true}},"span":{"start":1,"end":2}}]"#);
}
