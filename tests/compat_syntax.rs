// compat_syntax.rs - Integration tests for the supported pattern syntax.
//
// x: pattern must match input, n: pattern must not match input,
// e: pattern must fail to parse with the given kind at the given offset.
// Every match check runs through the full pipeline with and without the
// prefilter.

use lockstep::error::{RegexError, SyntaxErrorKind};
use lockstep::regcomp::compile;
use lockstep::regexec::{matches, matches_unfiltered};
use lockstep::regparse::parse;

fn run(pattern: &[u8], input: &[u8]) -> bool {
    let tree = parse(pattern).unwrap_or_else(|e| {
        panic!(
            "parse failed for {:?}: {}",
            std::str::from_utf8(pattern).unwrap_or("<invalid>"),
            e
        )
    });
    let nfa = compile(tree);

    let filtered = matches(&nfa, input);
    let unfiltered = matches_unfiltered(&nfa, input);
    assert_eq!(
        filtered,
        unfiltered,
        "prefilter disagrees for {:?} against {:?}",
        std::str::from_utf8(pattern).unwrap_or("<invalid>"),
        std::str::from_utf8(input).unwrap_or("<invalid>"),
    );
    filtered
}

fn x(pattern: &[u8], input: &[u8]) {
    assert!(
        run(pattern, input),
        "x: expected match for {:?} against {:?}",
        std::str::from_utf8(pattern).unwrap_or("<invalid>"),
        std::str::from_utf8(input).unwrap_or("<invalid>"),
    );
}

fn n(pattern: &[u8], input: &[u8]) {
    assert!(
        !run(pattern, input),
        "n: expected no match for {:?} against {:?}",
        std::str::from_utf8(pattern).unwrap_or("<invalid>"),
        std::str::from_utf8(input).unwrap_or("<invalid>"),
    );
}

fn e(pattern: &[u8], kind: SyntaxErrorKind, offset: usize) {
    match parse(pattern) {
        Err(RegexError::Syntax { kind: k, offset: o }) => {
            assert_eq!(
                (k, o),
                (kind, offset),
                "e: wrong error for {:?}",
                std::str::from_utf8(pattern).unwrap_or("<invalid>"),
            );
        }
        other => panic!(
            "e: expected syntax error for {:?}, got {:?}",
            std::str::from_utf8(pattern).unwrap_or("<invalid>"),
            other
        ),
    }
}

#[test]
fn test_literals() {
    x(b"a", b"a");
    x(b"a", b"xax");
    x(b"abc", b"zzabczz");
    x(b"_9Z", b"a_9Zb");
    n(b"a", b"");
    n(b"a", b"A");
    n(b"abc", b"ab c");
    n(b"abc", b"acb");
}

#[test]
fn test_anchors() {
    x(b"^a$", b"a");
    n(b"^a$", b"ab");
    n(b"^a$", b"ba");
    x(b"^ab", b"abzz");
    n(b"^ab", b"zab");
    x(b"ab$", b"zzab");
    n(b"ab$", b"abz");
    x(b"^$", b"");
    n(b"^$", b"a");
}

#[test]
fn test_alternation() {
    x(b"a|b", b"b");
    n(b"a|b", b"c");
    x(b"cat|dog|bird", b"hotdogs");
    x(b"^(cat|dog)$", b"dog");
    n(b"^(cat|dog)$", b"cog");
    // Anchors apply to the whole alternation.
    x(b"^ab|cd$", b"ab");
    x(b"^ab|cd$", b"cd");
    n(b"^ab|cd$", b"abzz");
    n(b"^ab|cd$", b"zzcd");
}

#[test]
fn test_quantifiers() {
    x(b"^a*$", b"");
    x(b"^a*$", b"aaaaa");
    n(b"^a+$", b"");
    x(b"^a+$", b"aaa");
    x(b"^a?b$", b"b");
    x(b"^a?b$", b"ab");
    n(b"^a?b$", b"aab");
    x(b"^ab*c$", b"ac");
    x(b"^ab*c$", b"abbbc");
    x(b"^ab+c$", b"abc");
    n(b"^ab+c$", b"ac");
}

#[test]
fn test_groups() {
    x(b"^(ab)+$", b"ababab");
    n(b"^(ab)+$", b"aba");
    x(b"^(ab)*$", b"");
    x(b"^(a|b)*c$", b"ababbc");
    n(b"^(a|b)*c$", b"abxc");
    x(b"^((a|b)c)+$", b"acbcac");
    x(b"^x(y(z)+)?w$", b"xw");
    x(b"^x(y(z)+)?w$", b"xyzzw");
    n(b"^x(y(z)+)?w$", b"xyw");
}

#[test]
fn test_nullable_nesting() {
    x(b"^(a*)*$", b"");
    x(b"^(a*)+$", b"aaa");
    x(b"^(a?)+b$", b"aab");
    x(b"^((a*)*|b)*$", b"abba");
    n(b"^((a*)*|b)*$", b"abca");
}

#[test]
fn test_empty_pattern() {
    x(b"", b"");
    n(b"", b"a");
    x(b"^", b"");
    n(b"^", b"a");
    x(b"$", b"");
    n(b"$", b"a");
}

#[test]
fn test_unanchored_nullable() {
    x(b"a*", b"");
    x(b"a*", b"bbb");
    x(b"b?$", b"xyz");
}

#[test]
fn test_binary_subject() {
    x(b"ab", b"\x00\xffab\x80");
    n(b"ab", b"a\x00b");
    x(b"b$", b"\xffb");
}

#[test]
fn test_long_subject() {
    let mut text = vec![b'a'; 10_000];
    text.extend_from_slice(b"ab");
    x(b"(ab)+$", &text);
    x(b"^a*ab$", &text);
    n(b"^a*$", &text);
}

#[test]
fn test_syntax_errors() {
    e(b"(a", SyntaxErrorKind::UnmatchedOpenParenthesis, 0);
    e(b"a)", SyntaxErrorKind::UnmatchedCloseParenthesis, 1);
    e(b"a**", SyntaxErrorKind::NestedRepeatOperator, 2);
    e(b"a?+", SyntaxErrorKind::NestedRepeatOperator, 2);
    e(b"+", SyntaxErrorKind::TargetOfRepeatNotSpecified, 0);
    e(b"a|", SyntaxErrorKind::EmptyAlternative, 2);
    e(b"(|a)", SyntaxErrorKind::EmptyAlternative, 1);
    e(b"a()", SyntaxErrorKind::EmptyGroup, 2);
    e(b"a$b", SyntaxErrorKind::TrailingAfterEndAnchor, 2);
    e(b"a^b", SyntaxErrorKind::MisplacedAnchor, 1);
    e(b"a.c", SyntaxErrorKind::UnexpectedCharacter(b'.'), 1);
    e(b"a\\*", SyntaxErrorKind::UnexpectedCharacter(b'\\'), 1);
    e(b"a{3}", SyntaxErrorKind::UnexpectedCharacter(b'{'), 1);
    e(b"\xc3\xa9", SyntaxErrorKind::UnexpectedCharacter(0xc3), 0);
}
