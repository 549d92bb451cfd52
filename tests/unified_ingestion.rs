use sample_processing::execution::{ExecutionEngine, ExecutionOptions};
use sample_processing::ingestion::{
    ingest_from_path, ingest_line_items_from_path, IngestionFormat, IngestionOptions, IngestionRequest,
};
use sample_processing::processing::{calculate_total, filter_data, format_currency, Thresholds, DEFAULT_CURRENCY};
use sample_processing::types::Number;

#[test]
fn ingest_from_path_infers_csv_and_json() {
    let csv_opts = IngestionOptions {
        column: Some("reading".to_string()),
        ..Default::default()
    };
    let from_csv = ingest_from_path("tests/fixtures/readings.csv", &csv_opts).unwrap();
    let from_json = ingest_from_path("tests/fixtures/readings.json", &IngestionOptions::default()).unwrap();

    assert_eq!(from_csv.len(), 4);
    assert_eq!(from_json.len(), 3);
    assert_eq!(from_csv[0], from_json[0]);
}

#[test]
fn explicit_format_overrides_extension() {
    let opts = IngestionOptions {
        format: Some(IngestionFormat::Json),
        ..Default::default()
    };
    // NDJSON content read through an explicit format.
    let values = ingest_from_path("tests/fixtures/readings.ndjson", &opts).unwrap();
    assert_eq!(values.len(), 4);

    // CSV text read as JSON fails on the first NDJSON line.
    let err = ingest_from_path("tests/fixtures/readings.csv", &opts).unwrap_err();
    assert!(err.to_string().contains("invalid ndjson at line 1"));
}

#[test]
fn unknown_extension_is_schema_mismatch() {
    let err = ingest_from_path("tests/fixtures/readings.parquet", &IngestionOptions::default()).unwrap_err();
    assert!(err.to_string().contains("schema mismatch"));
}

#[test]
fn request_runs_into_processor() {
    let p = IngestionRequest::new("tests/fixtures/readings.json").run().unwrap();
    assert_eq!(p.process(), vec![Number::Int64(2), Number::Int64(6)]);
    assert_eq!(p.get_stats().count, 2);
}

#[test]
fn load_process_filter_and_total_end_to_end() {
    let p = IngestionRequest::new("tests/fixtures/readings.ndjson").run().unwrap();
    let engine = ExecutionEngine::new(ExecutionOptions {
        num_threads: Some(2),
        chunk_size: 2,
    })
    .unwrap();

    let doubled = engine.process_parallel(&p);
    assert_eq!(doubled, vec![Number::Int64(2), Number::Float64(5.0)]);
    assert_eq!(
        engine.filter_parallel(&doubled, Thresholds::new(3)),
        filter_data(&doubled, Thresholds::new(3))
    );

    let items = ingest_line_items_from_path("tests/fixtures/items.json", &IngestionOptions::default()).unwrap();
    assert_eq!(format_currency(calculate_total(&items), DEFAULT_CURRENCY), "$22.97");
}
