//! Benchmarks for line code generation and admin list filtering

#![allow(clippy::indexing_slicing, missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ralli_admin::{ListQuery, filter};
use ralli_core::utils::{avatar_initials, compose_num_id, next_line_code, pad_code};
use ralli_core::{Line, LineStatus, StatType};
use std::hint::black_box;

fn stat_types(count: u32, sports: &[(&str, &str)]) -> Vec<StatType> {
    (0..count)
        .zip(sports.iter().cycle())
        .map(|(i, (sport, code))| {
            let line_code = pad_code(i / 4 + 1);
            StatType {
                id: (i + 1).to_string(),
                name: format!("Stat {i}"),
                description: format!("Benchmark stat number {i}"),
                num_id: compose_num_id(code, &line_code),
                sport: (*sport).to_string(),
                sport_code: (*code).to_string(),
                line_code,
            }
        })
        .collect()
}

fn lines(count: usize) -> Vec<Line> {
    let players = ["LeBron James", "Josh Allen", "Lionel Messi", "James Harden"];
    let sports = ["NBA", "NFL", "Soccer", "NBA"];
    (0..count)
        .map(|i| Line {
            id: (i + 1).to_string(),
            player_id: (i % 4 + 1).to_string(),
            player_name: players[i % 4].to_string(),
            stat_type_id: "1".to_string(),
            stat_name: "Points".to_string(),
            value: 20.5,
            sport: sports[i % 4].to_string(),
            game_time: "Tonight 8:00 PM".to_string(),
            status: LineStatus::Active,
            over_odds: "-110".to_string(),
            under_odds: "-110".to_string(),
        })
        .collect()
}

/// Line code generation over growing collections
fn bench_line_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_codes");
    let sports = [
        ("NBA", "00001"),
        ("NFL", "00002"),
        ("Soccer", "00003"),
        ("Baseball", "00004"),
    ];

    for size in [10u32, 100, 1_000, 10_000] {
        let existing = stat_types(size, &sports);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("next", size), &existing, |b, existing| {
            b.iter(|| next_line_code(black_box(existing), black_box("00002")));
        });
    }

    group.finish();
}

/// Search and sport filtering of the lines tab
fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let query = ListQuery::new("james", Some("NBA"));

    for size in [100usize, 1_000, 10_000] {
        let records = lines(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("lines", size), &records, |b, records| {
            b.iter(|| filter::apply(records.clone(), black_box(&query)));
        });
    }

    group.bench_function("avatar_initials", |b| {
        b.iter(|| avatar_initials(black_box("Shai Gilgeous Alexander")));
    });

    group.finish();
}

criterion_group!(benches, bench_line_codes, bench_filtering);
criterion_main!(benches);
