//! FILENAME: engine/benches/truth_table.rs
//! PURPOSE: Benchmarks truth-table enumeration over growing variable counts.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use engine::evaluate;
use parser::{parse, tokenize};

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_table");

    // Row count doubles per extra variable: 4, 32, and 1024 rows
    for formula in [
        "P AND Q",
        "A AND B OR NOT C THEN D OR E",
        "A AND B OR C AND D OR E AND F THEN G OR H AND I OR J",
    ] {
        let tokens = tokenize(formula);
        let tree = parse(&tokens).unwrap();

        group.bench_function(formula, |b| {
            b.iter(|| evaluate(black_box(&tokens), black_box(&tree)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumeration);
criterion_main!(benches);
