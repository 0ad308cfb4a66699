use serde_json::json;

use super::*;

#[test]
fn extract_rows_accepts_bare_array() {
    let rows: Vec<DailyMovement> =
        extract_rows(json!([{ "date": "2026-03-01", "incoming": "10", "outgoing": "4" }]), LIST_KEYS).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].incoming, "10");
}

#[test]
fn extract_rows_accepts_data_and_items_envelopes() {
    let from_data: Vec<LowStockItem> =
        extract_rows(json!({ "data": [{ "itemId": 3, "code": "MAT-002" }], "total": 1 }), LIST_KEYS).unwrap();
    assert_eq!(from_data[0].item_id, 3);

    let from_items: Vec<LowStockItem> = extract_rows(json!({ "items": [{ "itemId": 1 }] }), LIST_KEYS).unwrap();
    assert_eq!(from_items[0].item_id, 1);
}

#[test]
fn extract_rows_skips_non_array_envelope_values() {
    let rows: Vec<WarehouseUtilization> = extract_rows(
        json!({ "data": null, "overall": [{ "warehouseId": 1, "capacity": 500, "currentCount": 320 }] }),
        UTILIZATION_KEYS,
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].capacity, Some(500.0));
}

#[test]
fn extract_rows_utilization_accepts_summary() {
    let rows: Vec<WarehouseUtilization> =
        extract_rows(json!({ "summary": [{ "warehouseId": 2 }, { "warehouseId": 3 }] }), UTILIZATION_KEYS).unwrap();
    assert_eq!(rows.iter().map(|r| r.warehouse_id).collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn extract_rows_only_utilization_reads_overall() {
    let rows: Vec<DailyMovement> = extract_rows(json!({ "overall": [{ "date": "x" }] }), LIST_KEYS).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn extract_rows_unknown_shape_is_empty() {
    let rows: Vec<DailyMovement> = extract_rows(json!({ "rows": [] }), LIST_KEYS).unwrap();
    assert!(rows.is_empty());
    let rows: Vec<DailyMovement> = extract_rows(json!("oops"), LIST_KEYS).unwrap();
    assert!(rows.is_empty());
    let rows: Vec<DailyMovement> = extract_rows(serde_json::Value::Null, LIST_KEYS).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn extract_rows_reports_malformed_rows() {
    let err = extract_rows::<LowStockItem>(json!([{ "itemId": "not-a-number" }]), LIST_KEYS).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
