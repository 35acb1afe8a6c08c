use common::chart::configure_chart;
use common::listing::{list_datasets, ListingQuery, SortKey};
use common::model::dataset::DatasetRecord;
use common::model::table::TableData;
use serde_json::json;

fn records() -> Vec<DatasetRecord> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "title": "Flood Map",
            "organization": "DENR",
            "categories": [{"id": 1, "name": "Environment"}],
            "request_type": "submit_dataset",
            "created_at": "2024-01-01"
        },
        {
            "id": 2,
            "title": "School List",
            "organization": "DepEd",
            "categories": [{"id": 2, "name": "Education"}],
            "request_type": "request_dataset",
            "created_at": "2024-06-01"
        }
    ]))
    .expect("fixture records should decode")
}

fn titles(records: &[DatasetRecord], query: &ListingQuery) -> Vec<String> {
    list_datasets(records, query)
        .items
        .iter()
        .map(|r| r.title.clone())
        .collect()
}

#[test]
fn search_narrows_and_recent_orders_newest_first() {
    let records = records();
    let mut query = ListingQuery::with_query("school");
    query.set_sort(SortKey::Recent);
    assert_eq!(titles(&records, &query), vec!["School List"]);

    query.set_query("");
    assert_eq!(titles(&records, &query), vec!["School List", "Flood Map"]);
}

#[test]
fn facets_come_from_the_whole_collection() {
    let records = records();
    let page = list_datasets(&records, &ListingQuery::with_query("school"));
    assert_eq!(page.total_count, 1);
    assert_eq!(page.available_categories, vec!["Education", "Environment"]);
    assert_eq!(page.available_types, vec!["request_dataset", "submit_dataset"]);
}

#[test]
fn chart_for_population_table() {
    let table: TableData = serde_json::from_value(json!({
        "headers": ["Municipality", "Population"],
        "rows": [
            {"Municipality": "Tarlac City", "Population": 388675},
            {"Municipality": "Concepcion", "Population": 162543}
        ]
    }))
    .expect("fixture table should decode");

    let config = configure_chart(&table).expect("table has rows");
    assert_eq!(config.original_x_axis_key, "Municipality");
    assert_eq!(config.y_axis_keys, vec!["Population"]);
    assert_eq!(
        serde_json::to_value(&config.data).unwrap(),
        json!([
            {"name": "Tarlac City", "Population": 388675},
            {"name": "Concepcion", "Population": 162543}
        ])
    );
}

#[test]
fn chart_caps_large_tables() {
    let rows: Vec<_> = (0..200)
        .map(|i| json!({"Barangay": format!("B{i}"), "Households": i + 1}))
        .collect();
    let table: TableData = serde_json::from_value(json!({
        "headers": ["Barangay", "Households"],
        "rows": rows
    }))
    .unwrap();
    assert_eq!(configure_chart(&table).unwrap().data.len(), 50);
    assert!(configure_chart(&TableData::default()).is_none());
}
