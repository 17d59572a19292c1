// Criterion benchmark suite for lockstep
//
// Run: cargo bench
// Specific group: cargo bench -- compile
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lockstep::regcomp::compile;
use lockstep::regexec::{matches, matches_unfiltered};
use lockstep::regint::Nfa;
use lockstep::regparse::parse;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build(pattern: &[u8]) -> Nfa {
    compile(parse(pattern).expect("benchmark pattern must parse"))
}

// ---------------------------------------------------------------------------
// 1. compile -- parse + Thompson construction
// ---------------------------------------------------------------------------

fn bench_compile(c: &mut Criterion) {
    let patterns: &[(&str, &[u8])] = &[
        ("literal", b"hello_world"),
        ("alternation", b"alpha|beta|gamma|delta"),
        ("quantifier", b"a+b+c?d*"),
        ("group", b"(abc)+(def)*"),
        ("nested", b"^((a|b)*c(d|e)+)?f$"),
    ];

    let mut group = c.benchmark_group("compile");
    for (name, pat) in patterns {
        group.bench_with_input(BenchmarkId::from_parameter(name), pat, |b, pat| {
            b.iter(|| black_box(build(black_box(pat))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. search -- unanchored search with and without the prefilter
// ---------------------------------------------------------------------------

fn bench_search(c: &mut Criterion) {
    let mut text = b"the_quick_brown_fox_jumps_over_the_lazy_dog_".repeat(200);
    text.extend_from_slice(b"near_the_riverbank");

    let cases: &[(&str, &[u8])] = &[
        ("literal", b"riverbank"),
        ("alternation", b"river|bank"),
        ("anchored_end", b"riverbank$"),
        ("missing", b"zebra"),
    ];

    let mut group = c.benchmark_group("search");
    for (name, pat) in cases {
        let nfa = build(pat);
        group.bench_with_input(BenchmarkId::new("prefilter", name), &text[..], |b, text| {
            b.iter(|| black_box(matches(&nfa, black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("plain", name), &text[..], |b, text| {
            b.iter(|| black_box(matches_unfiltered(&nfa, black_box(text))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. pathological -- patterns that are exponential for backtracking engines
// ---------------------------------------------------------------------------

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    for n in [8usize, 16, 32] {
        let pattern = format!("^{}{}$", "a?".repeat(n), "a".repeat(n));
        let nfa = build(pattern.as_bytes());
        let text = "a".repeat(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), text.as_bytes(), |b, text| {
            b.iter(|| black_box(matches(&nfa, black_box(text))));
        });
    }

    let nfa = build(b"^(a*)*b$");
    let text = "a".repeat(64);
    group.bench_function("nested_star", |b| {
        b.iter(|| black_box(matches(&nfa, black_box(text.as_bytes()))));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_compile, bench_search, bench_pathological);
criterion_main!(benches);
