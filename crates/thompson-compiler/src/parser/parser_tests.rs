use thompson_core::{Char, CharSet, Expr, Group, MetaChar, Quantifier, SetItem, Symbol};

use super::{GroupFeature, ParseError, parse};
use crate::lexer::lex;
use crate::test_utils::parse_str;

fn error(source: &str) -> ParseError {
    parse(&lex(source).unwrap()).unwrap_err()
}

fn quantifier_of(source: &str) -> Quantifier {
    match parse_str(source) {
        Some(Expr::Repetition { quantifier, .. }) => quantifier,
        other => panic!("expected repetition, got {other:?}"),
    }
}

#[test]
fn canonical_patterns_round_trip() {
    let patterns = [
        "a",
        "中",
        r"\*",
        r"\w",
        r"\u{6587}",
        r"\u{0200d3}",
        "[abc]",
        r"[*+?.{}()[\]^$\\|-]",
        "[0-9]",
        "[+0-9A-F]",
        r"[0-9\w]",
        "[^ab]",
        "abc",
        "你好",
        "0x[a-f]",
        "a|b",
        "a|[0-9]",
        "a*",
        "a+",
        "a?",
        "a{2,4}",
        "a{5,}",
        "a{5}",
        "[a-z]+",
        "a+?",
        "a{2,4}?",
        "(a)",
        "([0-9])",
        "(ab)",
        "(a|b)",
        "(a*)",
        "ab?",
        "a(x|y)",
        "a|foo|bar",
        "a|b+",
        "(foo)|(bar)",
        "(foo){1,3}",
        "()",
    ];

    for pattern in patterns {
        let expr = parse_str(pattern).unwrap();
        assert_eq!(expr.to_string(), pattern);
    }
}

#[test]
fn empty_pattern() {
    assert_eq!(parse_str(""), None);
}

#[test]
fn single_char() {
    assert_eq!(parse_str("a"), Some(Expr::char('a')));
}

#[test]
fn concatenation_keeps_order() {
    let Some(Expr::Alternative(items)) = parse_str(r"a\d") else {
        panic!("expected alternative");
    };

    assert_eq!(items, [Expr::char('a'), Expr::meta(MetaChar::Digit)]);
}

#[test]
fn bounded_quantifiers() {
    assert_eq!(
        quantifier_of("a{2,4}"),
        Quantifier::Range {
            from: 2,
            to: 4,
            greedy: true
        }
    );
    assert_eq!(
        quantifier_of("a{2,4}?"),
        Quantifier::Range {
            from: 2,
            to: 4,
            greedy: false
        }
    );
    assert_eq!(
        quantifier_of("a{5,}"),
        Quantifier::ManyTimesOrMore {
            n: 5,
            greedy: true
        }
    );
    assert_eq!(quantifier_of("a{5}"), Quantifier::ManyTimes(5));
    assert_eq!(quantifier_of("a{5}?"), Quantifier::ManyTimes(5));
}

#[test]
fn lazy_quantifiers() {
    assert_eq!(
        quantifier_of("a*?"),
        Quantifier::ZeroOrMore { greedy: false }
    );
    assert_eq!(
        quantifier_of("a??"),
        Quantifier::OneOrZero { greedy: false }
    );
}

#[test]
fn groups_numbered_by_opening_paren() {
    let Some(Expr::Group(outer)) = parse_str("((a)(b))") else {
        panic!("expected group");
    };
    let Some(Expr::Alternative(inner)) = outer.expr.as_deref() else {
        panic!("expected alternative");
    };
    let numbers: Vec<_> = inner
        .iter()
        .map(|e| match e {
            Expr::Group(Group { number, .. }) => *number,
            _ => None,
        })
        .collect();

    assert_eq!(outer.number, Some(1));
    assert_eq!(numbers, [Some(2), Some(3)]);
    assert!(outer.capturing);
}

#[test]
fn empty_group_has_no_body() {
    let Some(Expr::Group(group)) = parse_str("()") else {
        panic!("expected group");
    };

    assert_eq!(group.expr, None);
    assert_eq!(group.number, Some(1));
}

#[test]
fn negated_set_with_range() {
    let expected = CharSet::new(
        vec![
            SetItem::Range(thompson_core::CharRange::new(
                Char::literal('a'),
                Char::literal('f'),
            )),
            SetItem::Meta(MetaChar::Digit),
        ],
        true,
    );

    assert_eq!(
        parse_str(r"[^a-f\d]"),
        Some(Expr::Symbol(Symbol::CharSet(expected)))
    );
}

#[test]
fn invalid_disjunctions() {
    assert!(matches!(error("|a"), ParseError::InvalidDisjunction { .. }));
    assert!(matches!(error("a|"), ParseError::InvalidDisjunction { .. }));
    assert!(matches!(error("a||b"), ParseError::InvalidDisjunction { .. }));
    assert!(matches!(error("(a|)"), ParseError::InvalidDisjunction { .. }));
}

#[test]
fn unsupported_group_features() {
    let feature = |source| match error(source) {
        ParseError::UnsupportedGroupFeature { feature, .. } => feature,
        other => panic!("unexpected error {other:?}"),
    };

    assert_eq!(feature("(?:a)"), GroupFeature::NonCapturing);
    assert_eq!(feature("(?=a)"), GroupFeature::LookAhead);
    assert_eq!(feature("(?!a)"), GroupFeature::LookAhead);
    assert_eq!(feature("(?<=a)"), GroupFeature::LookBehind);
    assert_eq!(feature("(?<!a)"), GroupFeature::LookBehind);
    assert_eq!(feature("(?<name>a)"), GroupFeature::Named);
    assert_eq!(feature("(?)"), GroupFeature::Unknown);
}

#[test]
fn nothing_to_repeat() {
    assert!(matches!(error("*a"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(error("a**"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(error("a|+"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(error("(*a)"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn range_needs_chars() {
    assert!(matches!(error(r"[a-\d]"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(error(r"[\w-a]"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn unexpected_token_message() {
    let err = error("a{2}{3}");

    insta::assert_snapshot!(err, @"invalid token in this position: quantifier `{3}`");
}

#[test]
fn unicode_range_endpoints() {
    let Some(Expr::Symbol(Symbol::CharSet(set))) = parse_str(r"[\u{4e00}-\u{9fff}]") else {
        panic!("expected char set");
    };

    assert!(set.includes('文'));
    assert!(!set.includes('a'));
}
