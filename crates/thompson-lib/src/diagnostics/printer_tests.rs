use crate::{Error, compile, lex, parse, test};

fn parse_error(pattern: &str) -> Error {
    parse(pattern).unwrap_err()
}

#[test]
fn unbalanced_group() {
    let error = parse_error("(ab");

    let result = error.printer().source("(ab").render();

    insta::assert_snapshot!(result, @r"
    error: unbalanced parenthesis
      |
    1 | (ab
      | ^
    ");
}

#[test]
fn multi_char_span() {
    let error = lex(r"a\q").unwrap_err();

    let result = error.printer().source(r"a\q").render();

    insta::assert_snapshot!(result, @r"
    error: unsupported escape `\q`
      |
    1 | a\q
      |  ^^
    ");
}

#[test]
fn stray_pipe() {
    let error = parse_error("ab||c");

    let result = error.printer().source("ab||c").render();

    insta::assert_snapshot!(result, @r"
    error: `|` needs an expression on both sides
      |
    1 | ab||c
      |    ^
    ");
}

#[test]
fn path_is_shown() {
    let error = lex(r"a\q").unwrap_err();

    let result = error.printer().source(r"a\q").path("pattern").render();

    assert!(result.contains("pattern:1:2"), "{result}");
}

#[test]
fn without_source() {
    let error = lex(r"a\q").unwrap_err();

    insta::assert_snapshot!(error.printer().render(), @r"error: unsupported escape `\q`");
}

#[test]
fn spanless_errors_render_plain() {
    let error = compile("a{2}").unwrap_err();

    let result = error.printer().source("a{2}").render();

    insta::assert_snapshot!(result, @"error: bounded repetition `{2}` is not supported");
}

#[test]
fn transform_error_renders_plain() {
    let error = test("a.b", "axb").unwrap_err();

    let result = error.printer().source("a.b").colored(true).render();

    insta::assert_snapshot!(result, @"error: meta character `.` is not supported");
}
