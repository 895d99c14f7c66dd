use cozy_chess::{Board, Color};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use endgame::Endgames;
use material::{MaterialConfig, MaterialTable};
use utils::{MaterialCounts, Position, Variant};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "8/8/8/4k3/8/8/8/R3K3 w - - 0 1",
];

fn bench_hits(c: &mut Criterion) {
    let endgames = Endgames::new();
    let mut table = MaterialTable::new(&MaterialConfig::default());
    let mut group = c.benchmark_group("material/hit");

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();
        let position = Position::new(&board);
        table.probe(&position, &endgames);

        group.bench_with_input(BenchmarkId::from_parameter(fen), &position, |b, position| {
            b.iter(|| black_box(table.probe(black_box(position), &endgames).imbalance()))
        });
    }

    group.finish();
}

fn bench_misses(c: &mut Criterion) {
    let endgames = Endgames::new();
    // One slot, two signatures: every probe recomputes
    let mut table = MaterialTable::new(&MaterialConfig { table_size: 1 });
    let a = MaterialCounts::from_code("KQRRBBNNPPPPKQRRBNNPPPPP", Color::White, Variant::Chess).unwrap();
    let b = a.flipped();

    c.bench_function("material/miss", |bench| {
        bench.iter(|| {
            black_box(table.probe_material(black_box(&a), &endgames).imbalance());
            black_box(table.probe_material(black_box(&b), &endgames).imbalance());
        })
    });
}

criterion_group!(benches, bench_hits, bench_misses);
criterion_main!(benches);
