#![cfg(test)]
use chrono::{Duration, Utc};
use weekly_ingestor::models::{bar::Bar, interval::Interval, series::BarSeries};

use bees_dashboard::{
    panel::SymbolPanel,
    sink::{JsonDirSink, PanelSink},
};

fn sample_panel() -> SymbolPanel {
    let start = Utc::now();
    let bars = vec![
        Bar {
            timestamp: start,
            open: 100.0,
            high: 101.0,
            low: 99.0,
            close: 100.5,
            volume: Some(1_000),
        },
        Bar {
            timestamp: start + Duration::weeks(1),
            open: 100.5,
            high: 102.0,
            low: 100.0,
            close: 101.5,
            volume: None,
        },
    ];
    SymbolPanel {
        label: "Gold BeES".to_string(),
        symbol: "GOLDBEES.NS".to_string(),
        series: BarSeries {
            symbol: "GOLDBEES.NS".to_string(),
            interval: Interval::Week,
            bars,
        },
        sma: vec![None, Some(101.0)],
    }
}

#[tokio::test]
async fn writes_one_json_file_per_panel() {
    let dir = tempfile::tempdir().unwrap();
    let sink = JsonDirSink::new(dir.path());

    let panel = sample_panel();
    let paths = sink.write(&[&panel]).await.unwrap();

    assert_eq!(paths.len(), 1);
    let path = &paths[0];
    assert!(path.exists());
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("GOLDBEES_NS_"));
    assert!(name.ends_with(".json"));
}

#[tokio::test]
async fn payload_round_trips_labels_and_absent_trend_values() {
    let dir = tempfile::tempdir().unwrap();
    let sink = JsonDirSink::new(dir.path());

    let panel = sample_panel();
    let paths = sink.write(&[&panel]).await.unwrap();

    let text = std::fs::read_to_string(&paths[0]).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(payload["label"], "Gold BeES");
    assert_eq!(payload["symbol"], "GOLDBEES.NS");
    assert_eq!(payload["series"]["bars"].as_array().unwrap().len(), 2);

    // An absent trend value serializes as JSON null, never a sentinel.
    assert!(payload["sma"][0].is_null());
    assert_eq!(payload["sma"][1], 101.0);

    let parsed: SymbolPanel = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, panel);
}

#[tokio::test]
async fn creates_the_target_directory_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("panels").join("weekly");
    let sink = JsonDirSink::new(&nested);

    let panel = sample_panel();
    let paths = sink.write(&[&panel]).await.unwrap();

    assert!(nested.is_dir());
    assert_eq!(paths.len(), 1);
}
