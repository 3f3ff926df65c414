use thompson_core::{Builder, Char, Expr, MetaChar, Symbol};

use super::{TransformError, transform};
use crate::test_utils::{normalize_str, parse_str};

fn render(expr: Expr) -> String {
    transform(&expr).unwrap().to_string()
}

#[test]
fn plain_chars_unchanged() {
    assert_eq!(render(Builder::char('a')), "a");
    assert_eq!(render(Builder::char('*')), r"\*");
    assert_eq!(render(Builder::unicode(0x6587)), r"\u{6587}");
}

#[test]
fn control_escapes_become_unicode() {
    let expr = transform(&Builder::meta(MetaChar::LineFeed)).unwrap();

    assert_eq!(expr, Expr::Symbol(Symbol::Char(Char::unicode(0x0a))));
    assert_eq!(expr.to_string(), r"\u{a}");
    assert_eq!(render(Builder::meta(MetaChar::Tab)), r"\u{9}");
}

#[test]
fn class_escapes_become_sets() {
    assert_eq!(render(Builder::meta(MetaChar::Word)), "[A-Za-z0-9_]");
    assert_eq!(render(Builder::meta(MetaChar::NotWord)), "[^A-Za-z0-9_]");
    assert_eq!(render(Builder::meta(MetaChar::Digit)), "[0-9]");
    assert_eq!(
        render(Builder::meta(MetaChar::Space)),
        r"[ \u{c}\u{a}\u{d}\u{9}\u{b}\u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}]"
    );
}

#[test]
fn classes_spliced_into_sets() {
    let set = Builder::char_set().chars("ab").build();
    let word = Builder::char_set().meta(MetaChar::Word).char('-').build();

    assert_eq!(render(set), "[ab]");
    assert_eq!(render(word), "[A-Za-z0-9_-]");
}

#[test]
fn seq_with_set() {
    let expr = Builder::seq()
        .chars("foo")
        .char_set(|set| set.char('+').char('-').meta(MetaChar::Digit))
        .build();

    assert_eq!(render(expr), r"foo[+\-0-9]");
}

#[test]
fn or_with_set() {
    let expr = Builder::or()
        .char('a')
        .char_set(|set| set.char('+').char('-').meta(MetaChar::Digit))
        .build();

    assert_eq!(render(expr), r"a|[+\-0-9]");
}

#[test]
fn equal_bounds_collapse() {
    let expr = Builder::repeat(Builder::meta(MetaChar::Digit)).range(3, 3);

    assert_eq!(render(expr), "[0-9]{3}");
}

#[test]
fn group_keeps_metadata() {
    let expr = Builder::group(Builder::meta(MetaChar::Digit))
        .number(4)
        .name("digits")
        .build();

    let Expr::Group(group) = transform(&expr).unwrap() else {
        panic!("expected group");
    };
    assert_eq!(group.number, Some(4));
    assert_eq!(group.name.as_deref(), Some("digits"));
    assert_eq!(render(Builder::group(Builder::meta(MetaChar::Digit)).build()), "([0-9])");
}

#[test]
fn look_around_body_transformed() {
    let expr = Builder::look_ahead(Builder::meta(MetaChar::Digit), false);

    assert_eq!(render(expr), "(?=[0-9])");
}

#[test]
fn unsupported_meta_chars() {
    for meta in [MetaChar::Dot, MetaChar::Backspace, MetaChar::Null] {
        assert_eq!(
            transform(&Builder::meta(meta)),
            Err(TransformError::UnsupportedMetaChar { meta })
        );
    }
    let in_set = Builder::char_set().meta(MetaChar::Backspace).build();
    assert!(matches!(
        transform(&in_set),
        Err(TransformError::UnsupportedMetaChar { .. })
    ));
}

#[test]
fn negated_class_inside_set() {
    let set = Builder::char_set().char('a').meta(MetaChar::NotDigit).build();

    assert_eq!(
        transform(&set),
        Err(TransformError::UnsupportedNestedMeta {
            meta: MetaChar::NotDigit
        })
    );
}

#[test]
fn idempotent() {
    let patterns = [
        r"\w+",
        r"[\s\d_]*?",
        r"a(\t|\W){2,2}",
        r"[^\n\d]",
        r"\u{0200d3}|x",
    ];

    for pattern in patterns {
        let once = normalize_str(pattern).unwrap();
        let twice = transform(&once).unwrap();
        assert_eq!(twice, once, "{pattern}");
    }
}

#[test]
fn parsed_patterns() {
    let expr = normalize_str(r"[\w\n]").unwrap();

    assert_eq!(expr.to_string(), r"[A-Za-z0-9_\u{a}]");
    assert!(parse_str(".").is_some());
}
