//! Integration tests for loading a model and estimating fares.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

use flight_fare::core::{CategoryField, FareError};
use flight_fare::io::{ModelLoader, ModelSource};
use flight_fare::models::{LinearModel, PredictionInput};
use flight_fare::services::{encode_features, predict, FarePredictor};
use flight_fare::state::ModelSlot;
use flight_fare::time::DayOffsetMode;

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn submission(departure_date: &str) -> PredictionInput {
    PredictionInput {
        airline: "Indigo".to_string(),
        source_city: "Delhi".to_string(),
        departure_time: "Morning".to_string(),
        stops: "one".to_string(),
        arrival_time: "Evening".to_string(),
        destination_city: "Mumbai".to_string(),
        travel_class: "Economy".to_string(),
        departure_date: departure_date.to_string(),
    }
}

fn model_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_file_model_end_to_end() {
    let file = model_file(r#"{"coef": [1, 1, 1, 1, 1, 1, 1, 1], "intercept": 0}"#);
    let source = ModelSource::File(file.path().to_path_buf());

    let slot = ModelSlot::new();
    let loaded = slot.init(&ModelLoader::default(), &source).await.unwrap();

    let estimate = FarePredictor::new(&loaded.model, DayOffsetMode::Instant)
        .estimate_at(&submission("2026-10-29"), at("2026-10-19T08:45:00Z"))
        .unwrap();

    assert_eq!(
        estimate.features.as_slice(),
        &[1.0, 0.0, 1.0, 1.0, 3.0, 2.0, 0.0, 10.0]
    );
    assert_eq!(estimate.price, 18);
}

#[tokio::test]
async fn test_realistic_model() {
    let file = model_file(
        r#"{
            "coef": [1845.2, 310.75, 95.4, 5032.9, 150.1, 260.6, 45210.35, -135.8],
            "intercept": 4120.5
        }"#,
    );
    let source = ModelSource::File(file.path().to_path_buf());
    let loaded = ModelLoader::default().load(&source).await.unwrap();

    let mut input = submission("2026-11-18");
    input.travel_class = "Business".to_string();

    let estimate = FarePredictor::new(&loaded.model, DayOffsetMode::Calendar)
        .estimate_at(&input, at("2026-10-19T18:00:00Z"))
        .unwrap();

    // [1, 0, 1, 1, 3, 2, 1, 30]
    let expected: f64 = 4120.5 + 1845.2 + 95.4 + 5032.9 + 3.0 * 150.1 + 2.0 * 260.6 + 45210.35
        - 30.0 * 135.8;
    assert_eq!(estimate.price, expected.round() as i64);
    assert!(estimate.to_string().starts_with('₹'));
}

#[tokio::test]
async fn test_model_with_wrong_dimension_is_rejected_at_load() {
    let file = model_file(r#"{"coef": [1, 1, 1], "intercept": 0}"#);
    let source = ModelSource::File(file.path().to_path_buf());

    let slot = ModelSlot::new();
    let err = slot.init(&ModelLoader::default(), &source).await.unwrap_err();
    assert!(matches!(err, FareError::InvalidModel(_)));
    assert!(!slot.is_loaded());
}

#[test]
fn test_hand_built_model_dimension_is_checked() {
    let model = LinearModel::new(vec![1.0; 7], 0.0);
    let features = encode_features(
        &submission("2026-10-29"),
        at("2026-10-19T08:45:00Z"),
        DayOffsetMode::Instant,
    )
    .unwrap();

    assert_eq!(
        predict(features.as_slice(), &model).unwrap_err(),
        FareError::DimensionMismatch {
            expected: 7,
            actual: 8
        }
    );
}

#[test]
fn test_every_empty_field_is_reported() {
    let now = at("2026-10-19T08:45:00Z");
    for field in CategoryField::ALL {
        let mut input = submission("2026-10-29");
        match field {
            CategoryField::Airline => input.airline.clear(),
            CategoryField::SourceCity => input.source_city.clear(),
            CategoryField::DepartureTime => input.departure_time.clear(),
            CategoryField::Stops => input.stops.clear(),
            CategoryField::ArrivalTime => input.arrival_time.clear(),
            CategoryField::DestinationCity => input.destination_city.clear(),
            CategoryField::TravelClass => input.travel_class.clear(),
        }

        let err = encode_features(&input, now, DayOffsetMode::Instant).unwrap_err();
        assert_eq!(
            err,
            FareError::InvalidCategory {
                field,
                value: String::new()
            }
        );
    }
}

proptest! {
    /// With integer parameters the rounded prediction equals exact integer
    /// arithmetic.
    #[test]
    fn prop_prediction_matches_integer_arithmetic(
        coef in prop::array::uniform8(-5000i64..5000),
        codes in prop::array::uniform7(0i64..6),
        days in -30i64..400,
        intercept in -100_000i64..100_000,
    ) {
        let mut features: Vec<i64> = codes.to_vec();
        features.push(days);

        let expected = intercept
            + coef.iter().zip(&features).map(|(c, x)| c * x).sum::<i64>();

        let model = LinearModel::new(coef.iter().map(|&c| c as f64).collect(), intercept as f64);
        let as_f64: Vec<f64> = features.iter().map(|&x| x as f64).collect();

        prop_assert_eq!(predict(&as_f64, &model).unwrap(), expected);
    }

    /// Adding a constant to the intercept shifts the prediction by that
    /// constant.
    #[test]
    fn prop_intercept_shift(
        coef in prop::array::uniform8(-100i64..100),
        shift in -1000i64..1000,
    ) {
        let coef: Vec<f64> = coef.iter().map(|&c| c as f64).collect();
        let features = [1.0, 0.0, 1.0, 1.0, 3.0, 2.0, 0.0, 10.0];

        let base = predict(&features, &LinearModel::new(coef.clone(), 0.0)).unwrap();
        let shifted = predict(&features, &LinearModel::new(coef, shift as f64)).unwrap();

        prop_assert_eq!(shifted - base, shift);
    }
}
