//! End-to-end tests from JSON rows to serialized trends

use rstest::rstest;
use serde_json::{json, Value};
use signal_trend::application::{TrendQuery, TrendService};
use signal_trend::domain::{SignalRow, TimeKey};
use signal_trend::infrastructure::read_rows;

fn row(geo_value: &str, signal: &str, time: i64, value: f64) -> Value {
    json!({
        "geo_type": "state",
        "geo_value": geo_value,
        "source": "jhu-csse",
        "signal": signal,
        "time_value": time,
        "value": value,
    })
}

async fn rows(values: Vec<Value>) -> Vec<SignalRow> {
    let input = serde_json::to_string(&values).unwrap();
    read_rows(input.as_bytes()).await.unwrap()
}

fn run(date: i64, rows: &[SignalRow]) -> Value {
    let query = TrendQuery::new(TimeKey::new(date), 28, 7).unwrap();
    let results = TrendService::new(query).compute(rows);
    serde_json::to_value(results).unwrap()
}

#[tokio::test]
async fn test_one_result_per_series() {
    let rows = rows(vec![
        row("pa", "confirmed", 20200601, 100.0),
        row("pa", "confirmed", 20200608, 110.0),
        row("pa", "deaths", 20200601, 10.0),
        row("pa", "deaths", 20200608, 9.0),
        row("ny", "confirmed", 20200608, 50.0),
    ])
    .await;

    let trends = run(20200608, &rows);
    let trends = trends.as_array().unwrap();
    assert_eq!(trends.len(), 3);

    let identities: Vec<(&str, &str)> = trends
        .iter()
        .map(|t| {
            (
                t["geo_value"].as_str().unwrap(),
                t["signal_signal"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        identities,
        vec![("ny", "confirmed"), ("pa", "confirmed"), ("pa", "deaths")]
    );

    // a lone row is its own min and max
    assert_eq!(trends[0]["min_trend"], "steady");
    assert_eq!(trends[0]["max_trend"], "steady");
    assert_eq!(trends[0]["basis_trend"], "unknown");

    // 110 over a floor of 100 against 100: reference sits on the floor
    assert_eq!(trends[1]["basis_trend"], "increasing");
    // 9 over a floor of 9 against 10: current is the floor
    assert_eq!(trends[2]["basis_trend"], "decreasing");
    assert_eq!(trends[2]["min_trend"], "steady");
}

#[rstest]
#[case::ten_percent_up(100.0, 110.0, "increasing")]
#[case::nine_percent_up(100.0, 109.0, "steady")]
#[case::nine_percent_down(100.0, 91.0, "steady")]
#[case::ten_percent_down(100.0, 90.0, "decreasing")]
#[tokio::test]
async fn test_basis_threshold(#[case] basis: f64, #[case] current: f64, #[case] expected: &str) {
    // A zero row fixes the floor at 0 so the raw ratio is the normalized one
    let rows = rows(vec![
        row("pa", "confirmed", 20200520, 0.0),
        row("pa", "confirmed", 20200601, basis),
        row("pa", "confirmed", 20200608, current),
    ])
    .await;

    let trends = run(20200608, &rows);
    assert_eq!(trends[0]["basis_trend"], expected);
}

#[tokio::test]
async fn test_missing_current_date_is_unclassified() {
    let rows = rows(vec![
        row("pa", "confirmed", 20200601, 100.0),
        row("pa", "confirmed", 20200605, 120.0),
    ])
    .await;

    let trends = run(20200608, &rows);
    assert_eq!(trends[0]["value"], Value::Null);
    assert_eq!(trends[0]["basis_value"], 100.0);
    assert_eq!(trends[0]["max_value"], 120.0);
    for field in ["basis_trend", "min_trend", "max_trend"] {
        assert_eq!(trends[0][field], "unknown");
    }
}
