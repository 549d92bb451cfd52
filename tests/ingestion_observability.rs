use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use sample_processing::ingestion::{
    ingest_from_path, ingest_line_items_from_path, CompositeObserver, FileObserver, IngestionContext,
    IngestionFormat, IngestionObserver, IngestionOptions, IngestionSeverity, IngestionStats, RecordKind,
};
use sample_processing::ProcessingError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<(RecordKind, usize)>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push((ctx.kind, stats.rows));
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ProcessingError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &ProcessingError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn tmp_log() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("sample-processing-observer-{nanos}.log"))
}

#[test]
fn observer_receives_success_with_row_count() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let _ = ingest_from_path("tests/fixtures/readings.json", &opts).unwrap();
    let _ = ingest_line_items_from_path("tests/fixtures/items.csv", &opts).unwrap();

    assert_eq!(
        *obs.successes.lock().unwrap(),
        vec![(RecordKind::Samples, 3), (RecordKind::LineItems, 3)]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        format: Some(IngestionFormat::Csv),
        observer: Some(obs.clone()),
        alert_at_or_above: IngestionSeverity::Critical,
        ..Default::default()
    };

    // Missing file -> Io error -> Critical
    let _ = ingest_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Critical]);
    assert_eq!(alerts, vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        column: Some("definitely_missing".to_string()),
        observer: Some(obs.clone()),
        alert_at_or_above: IngestionSeverity::Critical,
        ..Default::default()
    };

    // Missing column -> Error severity (not Critical) -> should not alert
    let _ = ingest_from_path("tests/fixtures/readings.csv", &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_alert_threshold_alerts_on_parse_errors() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        column: Some("reading".to_string()),
        observer: Some(obs.clone()),
        alert_at_or_above: IngestionSeverity::Error,
        ..Default::default()
    };

    let _ = ingest_from_path("tests/fixtures/bad_readings.csv", &opts).unwrap_err();
    assert_eq!(*obs.alerts.lock().unwrap(), vec![IngestionSeverity::Error]);
}

#[test]
fn composite_and_file_observers_fan_out() {
    let log_path = tmp_log();
    let recorder = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![
        recorder.clone() as Arc<dyn IngestionObserver>,
        Arc::new(FileObserver::new(&log_path)),
    ]);
    let opts = IngestionOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    let _ = ingest_from_path("tests/fixtures/readings.ndjson", &opts).unwrap();
    let _ = ingest_from_path("tests/fixtures/missing.json", &opts).unwrap_err();

    assert_eq!(recorder.successes.lock().unwrap().len(), 1);
    assert_eq!(recorder.alerts.lock().unwrap().len(), 1);

    let log = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("ok kind=Samples format=Json"));
    assert!(lines[0].ends_with("rows=4"));
    assert!(lines[1].contains("fail severity=Critical"));
    assert!(lines[2].contains("ALERT severity=Critical"));

    let _ = std::fs::remove_file(&log_path);
}
