// Benchmark for flight-date calculations
// Measures a listing page worth of flight dates and countdowns

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use plant_flights::models::plant::{PlantRecord, PlantVariation};
use plant_flights::services::flight::{calculate_flight_date, CountdownEngine};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 10)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn listing_page(count: usize) -> Vec<PlantRecord> {
    let countries = ["Thailand", "philippines", "INDONESIA", "Ecuador", ""];
    (0..count)
        .map(|i| match i % 3 {
            0 => PlantRecord::with_country(countries[i % countries.len()]),
            1 => PlantRecord::with_variations(vec![
                PlantVariation::default(),
                PlantVariation::from_country(countries[i % countries.len()]),
            ]),
            _ => PlantRecord::default(),
        })
        .collect()
}

fn bench_flight_dates(c: &mut Criterion) {
    let mut group = c.benchmark_group("flight_dates");

    for count in [10, 100, 1000].iter() {
        let plants = listing_page(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &plants, |b, plants| {
            b.iter(|| {
                plants
                    .iter()
                    .map(|plant| calculate_flight_date(black_box(plant), black_box(now())))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

fn bench_year_info(c: &mut Criterion) {
    let mut group = c.benchmark_group("flight_year_info");
    let engine = CountdownEngine::default();

    for count in [10, 100, 1000].iter() {
        let plants = listing_page(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &plants, |b, plants| {
            b.iter(|| {
                plants
                    .iter()
                    .map(|plant| engine.flight_year_info(black_box(plant), black_box(now())))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flight_dates, bench_year_info);
criterion_main!(benches);
