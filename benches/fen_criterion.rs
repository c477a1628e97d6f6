use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::utils::fen_generator::generate_fen;
use quince_chess::utils::fen_parser::parse_fen;
use quince_chess::utils::fen_validator::validate_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
    },
    BenchCase {
        name: "midgame",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    BenchCase {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    },
];

fn fen_benchmarks(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fen");
    group.throughput(Throughput::Elements(1));

    for case in CASES {
        group.bench_with_input(
            BenchmarkId::new("validate", case.name),
            &case.fen,
            |bencher, fen| bencher.iter(|| validate_fen(black_box(fen))),
        );

        group.bench_with_input(
            BenchmarkId::new("parse", case.name),
            &case.fen,
            |bencher, fen| bencher.iter(|| parse_fen(black_box(fen))),
        );

        group.bench_with_input(
            BenchmarkId::new("round_trip", case.name),
            &case.fen,
            |bencher, fen| {
                bencher.iter(|| {
                    let board = parse_fen(black_box(fen)).expect("bench FEN should parse");
                    generate_fen(&board)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, fen_benchmarks);
criterion_main!(benches);
