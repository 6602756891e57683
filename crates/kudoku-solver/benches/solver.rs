//! Benchmarks for the backtracking solver.
//!
//! Measures full solves on representative grids: a puzzle with a typical
//! number of givens, a completely empty grid, and the no-work path of an
//! already solved grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use kudoku_core::Grid;
use kudoku_solver::solver;

const PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const SOLVED: &str =
    "785439126612875349493621578857943261261758934934162785578394612126587493349216857";

fn bench_solve(c: &mut Criterion) {
    let puzzle: Grid = PUZZLE.parse().expect("valid grid string");
    let empty = Grid::new();
    let solved: Grid = SOLVED.parse().expect("valid grid string");

    let grids = [
        ("puzzle", &puzzle),
        ("empty", &empty),
        ("solved", &solved),
    ];

    let mut group = c.benchmark_group("solve");
    for (param, grid) in grids {
        group.bench_function(param, |b| {
            b.iter_batched_ref(
                || (*grid).clone(),
                |grid| hint::black_box(solver::solve(grid)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
