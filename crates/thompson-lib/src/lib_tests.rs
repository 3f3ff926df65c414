use crate::{
    CompileError, Error, Expr, LexError, ParseError, Quantifier, Span, TransformError, compile,
    normalize, parse, test,
};

fn quantifier(pattern: &str) -> Quantifier {
    match parse(pattern).unwrap() {
        Some(Expr::Repetition { quantifier, .. }) => quantifier,
        other => panic!("expected repetition, got {other:?}"),
    }
}

#[test]
fn single_char() {
    assert!(test("a", "a").unwrap());
    assert!(!test("a", "b").unwrap());
    assert!(!test("a", "").unwrap());
}

#[test]
fn empty_pattern() {
    assert!(test("", "").unwrap());
    assert!(!test("", "a").unwrap());
}

#[test]
fn star_and_sets() {
    assert!(test("a*", "").unwrap());
    assert!(test("a*", "aaa").unwrap());
    assert!(!test("a*", "aab").unwrap());
    assert!(test("[^ab]", "c").unwrap());
    assert!(!test("[^ab]", "a").unwrap());
}

#[test]
fn starred_group() {
    assert!(test("(ab)*", "").unwrap());
    assert!(test("(ab)*", "abab").unwrap());
    assert!(!test("(ab)*", "aba").unwrap());
}

#[test]
fn single_accepting_state() {
    let automaton = compile("ab").unwrap();

    let accepting = automaton.states().iter().filter(|s| s.accept).count();

    assert_eq!(accepting, 1);
    assert!(automaton.state(automaton.out_state()).accept);
}

#[test]
fn bounded_quantifiers_parse() {
    assert_eq!(
        quantifier("a{2,4}"),
        Quantifier::Range {
            from: 2,
            to: 4,
            greedy: true
        }
    );
    assert_eq!(
        quantifier("a{2,4}?"),
        Quantifier::Range {
            from: 2,
            to: 4,
            greedy: false
        }
    );
    assert_eq!(
        quantifier("a{5,}"),
        Quantifier::ManyTimesOrMore {
            n: 5,
            greedy: true
        }
    );
    assert_eq!(quantifier("a{5}"), Quantifier::ManyTimes(5));
}

#[test]
fn bounded_quantifiers_do_not_compile() {
    for pattern in ["a{2,4}", "a{5}", "a{5,}", "(ab){1,2}?"] {
        let error = compile(pattern).unwrap_err();
        assert!(
            matches!(error, Error::Compile(CompileError::UnsupportedQuantifier { .. })),
            "{pattern}: {error:?}"
        );
    }
}

#[test]
fn space_class_rendering() {
    let expr = normalize(r"\s").unwrap().unwrap();

    insta::assert_snapshot!(expr.to_string(), @r"[ \u{c}\u{a}\u{d}\u{9}\u{b}\u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}]");
}

#[test]
fn word_class_rendering() {
    let word = normalize(r"\w").unwrap().unwrap();
    let not_word = normalize(r"\W").unwrap().unwrap();

    assert_eq!(word.to_string(), "[A-Za-z0-9_]");
    assert_eq!(not_word.to_string(), "[^A-Za-z0-9_]");
}

#[test]
fn canonical_patterns_round_trip() {
    let patterns = [
        "a",
        "abc",
        "a|b|cd",
        "(a)(b(c))",
        "a*b+?c?",
        "(ab)*?",
        r"\*\+\?\.\{\}\(\)\[\]\^\$\\\|",
        "[^a-z0-9]",
        "[-a]",
        "[a-]",
        r"[a\-z]",
        r"[\]\\]",
        r"\d\D\w\W\s\S",
        r"\n\t\r\f\v\0",
        r"\u{6587}\u{0200d3}",
        "a{2,4}",
        "a{5}",
        "a{5,}?",
        "()",
        "[]",
    ];
    for pattern in patterns {
        let expr = parse(pattern).unwrap();
        let rendered = expr.map(|e| e.to_string()).unwrap_or_default();
        assert_eq!(rendered, pattern);
    }
}

#[test]
fn transform_is_idempotent() {
    for pattern in [r"\s+\d", r"[\w-]", "a{3,3}", r"(\t|\W)*", r"[^\d\t]"] {
        let once = normalize(pattern).unwrap().unwrap();
        let twice = thompson_compiler::transform(&once).unwrap();
        assert_eq!(twice, once, "{pattern}");
    }
}

#[test]
fn errors_from_each_pass() {
    assert_eq!(
        test("[ab", "a").unwrap_err(),
        Error::Lex(LexError::UnterminatedCharSet {
            span: Span::new(0, 3)
        })
    );
    assert_eq!(
        test("a)", "a").unwrap_err(),
        Error::Parse(ParseError::UnbalancedGroup {
            span: Span::new(1, 2)
        })
    );
    assert!(matches!(
        test(r"[\W]", "a").unwrap_err(),
        Error::Transform(TransformError::UnsupportedNestedMeta { .. })
    ));
    assert!(matches!(
        test(r"a\b", "a").unwrap_err(),
        Error::Transform(TransformError::UnsupportedMetaChar { .. })
    ));
}

#[test]
fn error_spans() {
    assert_eq!(compile("a(").unwrap_err().span(), Some(Span::new(1, 2)));
    assert_eq!(compile("a{2}").unwrap_err().span(), None);
}

#[test]
fn unsupported_group_syntax() {
    for pattern in ["(?:a)", "(?=a)", "(?<name>a)", "(?<=a)"] {
        assert!(
            matches!(
                parse(pattern).unwrap_err(),
                Error::Parse(ParseError::UnsupportedGroupFeature { .. })
            ),
            "{pattern}"
        );
    }
}
