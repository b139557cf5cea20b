use criterion::{criterion_group, criterion_main, Criterion};

use showdown::core::parse_cards;
use showdown::equity::{EquityCalculator, EvalCache, Position, Seat, Spot};

fn seat(position: Position, hole: &str) -> Seat {
    let cards = parse_cards(hole).unwrap();
    Seat {
        position,
        hole: [cards[0], cards[1]],
    }
}

fn turn_spot() -> Spot {
    Spot::new(
        vec![
            seat(Position::Button, "AhKh"),
            seat(Position::SmallBlind, "8c8d"),
            seat(Position::BigBlind, "6s5s"),
        ],
        parse_cards("2s7dTh9h").unwrap(),
        vec![],
    )
    .unwrap()
}

fn flop_spot() -> Spot {
    Spot::new(
        vec![
            seat(Position::Button, "AhKh"),
            seat(Position::SmallBlind, "8c8d"),
        ],
        parse_cards("2s7dTh").unwrap(),
        vec![],
    )
    .unwrap()
}

fn bench_river_enumeration(c: &mut Criterion) {
    let spot = turn_spot();
    c.bench_function("equity_turn_to_river", |b| {
        b.iter(|| {
            let cache = EvalCache::new();
            std::hint::black_box(EquityCalculator::new(&spot, &cache).calculate())
        });
    });
}

fn bench_turn_and_river_enumeration(c: &mut Criterion) {
    let spot = flop_spot();
    c.bench_function("equity_flop_to_river", |b| {
        b.iter(|| {
            let cache = EvalCache::new();
            std::hint::black_box(EquityCalculator::new(&spot, &cache).calculate())
        });
    });
}

fn bench_warm_cache(c: &mut Criterion) {
    let spot = turn_spot();
    let cache = EvalCache::new();
    EquityCalculator::new(&spot, &cache).calculate();
    c.bench_function("equity_turn_to_river_warm_cache", |b| {
        b.iter(|| std::hint::black_box(EquityCalculator::new(&spot, &cache).calculate()));
    });
}

criterion_group!(
    benches,
    bench_river_enumeration,
    bench_turn_and_river_enumeration,
    bench_warm_cache
);
criterion_main!(benches);
