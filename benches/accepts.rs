use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recognizer::prelude::*;

fn bench_accepts(c: &mut Criterion) {
    let blocks = samples::automaton_a();
    c.bench_function("accepts_blocks", |b| {
        b.iter(|| blocks.accepts(black_box("abbbbcccabbc")))
    });

    let computador = samples::computador();
    c.bench_function("accepts_computador", |b| {
        b.iter(|| computador.accepts(black_box("computador")))
    });

    c.bench_function("scan_sentence", |b| {
        b.iter(|| computador.scan(black_box("O computador, o computador.")))
    });

    let machine = samples::soda_machine();
    let coins = [Coin::TwentyFive, Coin::Fifty, Coin::OneHundred, Coin::TwentyFive];
    c.bench_function("moore_run", |b| b.iter(|| machine.run(black_box(&coins[..]))));
}

criterion_group!(benches, bench_accepts);
criterion_main!(benches);
