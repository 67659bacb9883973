use criterion::{criterion_group, criterion_main, Criterion};
use epsnfa::Nfa;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build", |b| {
        b.iter(|| {
            let _nfa = Nfa::new(black_box("((A*B|AC)D|(E.F)*G)*H")).unwrap();
        })
    });

    let nfa = Nfa::new("(A*B|AC)D").unwrap();
    c.bench_function("match", |b| {
        b.iter(|| {
            let _result = nfa.matches(black_box("AAAAAAAAAAAAAAAABD"));
        })
    });

    // Every position keeps the whole (A|B)* loop active.
    let nfa = Nfa::new("(A|B)*ABB").unwrap();
    let text = "AB".repeat(500) + "ABB";
    c.bench_function("match long alternation loop", |b| {
        b.iter(|| {
            let _result = nfa.matches(black_box(&text));
        })
    });

    let nfa = Nfa::new("A.*B").unwrap();
    let text = "A".to_string() + &"x".repeat(1000) + "C";
    c.bench_function("reject after long scan", |b| {
        b.iter(|| {
            let _result = nfa.matches(black_box(&text));
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
