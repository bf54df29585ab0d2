//! End-to-end behavior of the stores over the on-disk backend.

use std::fs;

use salesbook_cli::AppState;
use salesbook_shipping::{DEFAULT_LOCATION_NAME, UNKNOWN_LOCATION};

#[test]
fn first_run_seeds_default_location_on_disk() {
    let tmp = tempfile::tempdir().unwrap();

    let app = AppState::open_dir(tmp.path()).unwrap();
    assert_eq!(app.locations.len(), 1);
    assert_eq!(app.locations.list()[0].name(), DEFAULT_LOCATION_NAME);
    assert!(app.sales.is_empty());

    let raw = fs::read_to_string(tmp.path().join("shipping_locations.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["address"], "");
}

#[test]
fn removing_every_location_is_remembered_across_restarts() {
    let tmp = tempfile::tempdir().unwrap();

    let mut app = AppState::open_dir(tmp.path()).unwrap();
    let seeded = app.locations.list()[0].id_typed().to_string();
    assert!(app.remove_location(&seeded).unwrap());
    drop(app);

    let app = AppState::open_dir(tmp.path()).unwrap();
    assert!(app.locations.is_empty());
}

#[test]
fn sales_survive_restart_with_timestamps_intact() {
    let tmp = tempfile::tempdir().unwrap();

    let mut app = AppState::open_dir(tmp.path()).unwrap();
    let loc = app.add_location("Warehouse A", "123 St").unwrap();
    let loc_id = loc.id_typed().to_string();
    app.add_sale("Widget", "10.5", "3", Some(&loc_id)).unwrap();
    app.add_sale("Gadget", "2", "1", None).unwrap();
    let before = app.sales.list().to_vec();
    drop(app);

    let app = AppState::open_dir(tmp.path()).unwrap();
    assert_eq!(app.sales.list(), before.as_slice());

    let view = app.dashboard();
    assert_eq!(view.total_amount, 33.5);
    assert_eq!(view.rows[0].name, "Gadget");
    assert_eq!(view.rows[1].location_name, "Warehouse A");
}

#[test]
fn persisted_sales_use_documented_layout() {
    let tmp = tempfile::tempdir().unwrap();

    let mut app = AppState::open_dir(tmp.path()).unwrap();
    app.add_sale("Widget", "10.5", "3", None).unwrap();

    let raw = fs::read_to_string(tmp.path().join("sales_items.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &json[0];
    assert_eq!(entry["name"], "Widget");
    assert_eq!(entry["price"], 10.5);
    assert_eq!(entry["quantity"], 3);
    assert!(entry["id"].is_string());
    assert!(entry["timestamp"].as_str().unwrap().ends_with('Z'));
    assert!(entry.get("locationId").is_none());
}

#[test]
fn corrupt_sales_file_starts_empty_and_is_overwritten_on_next_change() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("sales_items.json"), "{ definitely not an array").unwrap();

    let mut app = AppState::open_dir(tmp.path()).unwrap();
    assert!(app.sales.is_empty());

    app.add_sale("Widget", "1", "1", None).unwrap();
    drop(app);

    let app = AppState::open_dir(tmp.path()).unwrap();
    assert_eq!(app.sales.len(), 1);
}

#[test]
fn deleted_location_leaves_sale_with_placeholder() {
    let tmp = tempfile::tempdir().unwrap();

    let mut app = AppState::open_dir(tmp.path()).unwrap();
    let loc = app.add_location("Warehouse A", "123 St").unwrap();
    let sale = app
        .add_sale("Widget", "10.5", "3", Some(&loc.id_typed().to_string()))
        .unwrap();
    app.remove_location(&loc.id_typed().to_string()).unwrap();
    drop(app);

    let app = AppState::open_dir(tmp.path()).unwrap();
    assert_eq!(app.sales.list()[0].location_id(), sale.location_id());
    assert_eq!(app.dashboard().rows[0].location_name, UNKNOWN_LOCATION);
}
