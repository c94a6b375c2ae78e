//! Criterion micro-benchmarks for placement, merging and closure scans.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera_bench::{build_board, cloister_grid, junction_grid, road_line, scattered_order};
use tessera_board::Board;
use tessera_core::{Cell, Direction};
use tessera_test_utils::ScoreTable;

/// Benchmark: place 1024 junction tiles, each merging into one feature.
fn bench_merge_grid_32(c: &mut Criterion) {
    let placements = junction_grid(32);
    c.bench_function("merge_grid_32", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for (cell, tile) in &placements {
                board.place_tile(tile.clone(), *cell).unwrap();
            }
            black_box(board.tile_count());
        });
    });
}

/// Benchmark: fill a 32x32 block of cloisters, scanning for closures each time.
fn bench_cloister_scan_32(c: &mut Criterion) {
    let placements = cloister_grid(32);
    c.bench_function("cloister_scan_32", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut table = ScoreTable::new();
            for (cell, tile) in &placements {
                board.place_tile(tile.clone(), *cell).unwrap();
                black_box(board.settle(&mut table));
            }
        });
    });
}

/// Benchmark: close a 500-cell road with its final cap.
fn bench_close_long_road(c: &mut Criterion) {
    let placements = road_line(500);
    let (last, rest) = placements.split_last().unwrap();
    let base = build_board(rest).unwrap();
    c.bench_function("close_long_road", |b| {
        b.iter(|| {
            let mut board = base.clone();
            board.place_tile(last.1.clone(), last.0).unwrap();
            black_box(board.resolve_closures());
        });
    });
}

/// Benchmark: rejected placements against a full board.
fn bench_rejections(c: &mut Criterion) {
    let board = build_board(&junction_grid(32)).unwrap();
    let probe = tessera_bench::cloister_tile();
    c.bench_function("check_placement_rejections", |b| {
        b.iter(|| {
            for x in -1..=32 {
                black_box(board.check_placement(&probe, Cell::new(x, 32)).is_err());
            }
        });
    });
}

/// Benchmark: feature lookups after heavy merging, in scattered order.
fn bench_feature_lookup(c: &mut Criterion) {
    let board = build_board(&junction_grid(32)).unwrap();
    let cells = scattered_order(32, 7);
    c.bench_function("feature_lookup_1024", |b| {
        b.iter(|| {
            for &cell in &cells {
                let key = board.find_path_feature(cell, Direction::North).unwrap();
                black_box(board.resolve(key));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_merge_grid_32,
    bench_cloister_scan_32,
    bench_close_long_road,
    bench_rejections,
    bench_feature_lookup
);
criterion_main!(benches);
