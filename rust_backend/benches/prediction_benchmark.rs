use chrono::{DateTime, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use flight_fare::core::domain::{encode, CategoryField};
use flight_fare::models::{LinearModel, PredictionInput};
use flight_fare::parsing::parse_model_json_str;
use flight_fare::services::{encode_features, predict};
use flight_fare::time::DayOffsetMode;

fn sample_input() -> PredictionInput {
    PredictionInput {
        airline: "Air_India".to_string(),
        source_city: "Bangalore".to_string(),
        departure_time: "Late_Night".to_string(),
        stops: "two_or_more".to_string(),
        arrival_time: "Early_Morning".to_string(),
        destination_city: "Kolkata".to_string(),
        travel_class: "Business".to_string(),
        departure_date: "2026-12-24".to_string(),
    }
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-10-19T12:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    group.bench_function("encode_all_fields", |b| {
        let input = sample_input();
        b.iter(|| {
            for field in CategoryField::ALL {
                black_box(encode(field, black_box(input.value(field))).ok());
            }
        });
    });

    group.bench_function("encode_features", |b| {
        let input = sample_input();
        let now = now();
        b.iter(|| encode_features(black_box(&input), now, DayOffsetMode::Instant));
    });

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");

    let model = LinearModel::new(
        vec![1845.2, 310.75, 95.4, 5032.9, 150.1, 260.6, 45210.35, -135.8],
        4120.5,
    );
    let features = encode_features(&sample_input(), now(), DayOffsetMode::Instant)
        .expect("valid input");

    group.bench_function("predict", |b| {
        b.iter(|| predict(black_box(features.as_slice()), black_box(&model)));
    });

    let json = r#"{"coef": [1845.2, 310.75, 95.4, 5032.9, 150.1, 260.6, 45210.35, -135.8], "intercept": 4120.5}"#;
    group.bench_function("parse_model_json", |b| {
        b.iter(|| parse_model_json_str(black_box(json)));
    });

    group.finish();
}

criterion_group!(benches, bench_encoding, bench_prediction);
criterion_main!(benches);
