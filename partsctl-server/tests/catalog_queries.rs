//! Query correctness against an in-memory SQLite store
//!
//! Most tests run on the reference fixture; the rest build a tiny catalog
//! that isolates one edge case.

use partsctl_server::db::{create_memory_pool, schema, SqlCatalog, Supplier, SupplyCatalog};
use partsctl_server::models::ColorSet;
use sqlx::AnyPool;

async fn empty_catalog() -> SqlCatalog {
    let pool = create_memory_pool().await.expect("memory pool");
    schema::create(&pool).await.expect("schema");
    SqlCatalog::new(pool)
}

async fn fixture_catalog() -> SqlCatalog {
    let catalog = empty_catalog().await;
    schema::seed_fixture(catalog.pool()).await.expect("fixture");
    catalog
}

async fn add_supplier(pool: &AnyPool, fid: &str, fnome: &str) {
    sqlx::query("INSERT INTO Fornitori (fid, fnome, indirizzo) VALUES ($1, $2, NULL)")
        .bind(fid.to_owned())
        .bind(fnome.to_owned())
        .execute(pool)
        .await
        .expect("insert supplier");
}

async fn add_part(pool: &AnyPool, pid: &str, pnome: &str, colore: &str) {
    sqlx::query("INSERT INTO Pezzi (pid, pnome, colore) VALUES ($1, $2, $3)")
        .bind(pid.to_owned())
        .bind(pnome.to_owned())
        .bind(colore.to_owned())
        .execute(pool)
        .await
        .expect("insert part");
}

async fn add_offer(pool: &AnyPool, fid: &str, pid: &str, costo: f64) {
    sqlx::query("INSERT INTO Catalogo (fid, pid, costo) VALUES ($1, $2, $3)")
        .bind(fid.to_owned())
        .bind(pid.to_owned())
        .bind(costo)
        .execute(pool)
        .await
        .expect("insert offer");
}

fn supplier_ids(rows: &[Supplier]) -> Vec<&str> {
    rows.iter().map(|s| s.id.as_str()).collect()
}

// === 1: distinct cataloged parts ===

#[tokio::test]
async fn cataloged_parts_are_distinct_and_sorted_by_name() {
    let catalog = fixture_catalog().await;
    let parts = catalog.cataloged_parts().await.unwrap();

    assert_eq!(parts.len(), 12);
    let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn uncataloged_part_is_not_listed() {
    let catalog = fixture_catalog().await;
    add_part(catalog.pool(), "P13", "Ingranaggio", "blu").await;

    let parts = catalog.cataloged_parts().await.unwrap();
    assert!(parts.iter().all(|p| p.id != "P13"));
}

// === 2: universal suppliers ===

#[tokio::test]
async fn only_acme_carries_every_part() {
    let catalog = fixture_catalog().await;
    let suppliers = catalog.universal_suppliers().await.unwrap();

    assert_eq!(supplier_ids(&suppliers), ["F01"]);
    assert_eq!(suppliers[0].name, "Acme");
    assert_eq!(suppliers[0].address.as_deref(), Some("Via Roma 1, Milano"));
}

#[tokio::test]
async fn new_part_breaks_universality_until_offered() {
    let catalog = fixture_catalog().await;
    add_part(catalog.pool(), "P13", "Ingranaggio", "blu").await;
    assert!(catalog.universal_suppliers().await.unwrap().is_empty());

    add_offer(catalog.pool(), "F01", "P13", 2.0).await;
    let suppliers = catalog.universal_suppliers().await.unwrap();
    assert_eq!(supplier_ids(&suppliers), ["F01"]);
}

// === 3: color-universal suppliers ===

#[tokio::test]
async fn color_universal_suppliers_per_color() {
    let catalog = fixture_catalog().await;

    let red = catalog.color_universal_suppliers("rosso").await.unwrap();
    assert_eq!(supplier_ids(&red), ["F01", "F07"]);

    let green = catalog.color_universal_suppliers("verde").await.unwrap();
    assert_eq!(supplier_ids(&green), ["F01", "F04"]);

    let blue = catalog.color_universal_suppliers("blu").await.unwrap();
    assert_eq!(supplier_ids(&blue), ["F01", "F05"]);
}

#[tokio::test]
async fn color_without_parts_yields_nothing() {
    let catalog = fixture_catalog().await;
    let yellow = catalog.color_universal_suppliers("giallo").await.unwrap();
    assert!(yellow.is_empty());
}

// === 4: parts exclusive to one supplier ===

#[tokio::test]
async fn no_fixture_part_is_exclusive() {
    let catalog = fixture_catalog().await;
    assert!(catalog.parts_exclusive_to("Acme").await.unwrap().is_empty());
}

#[tokio::test]
async fn exclusive_part_is_found() {
    let catalog = fixture_catalog().await;
    add_part(catalog.pool(), "P13", "Ingranaggio", "blu").await;
    add_offer(catalog.pool(), "F01", "P13", 2.0).await;

    let parts = catalog.parts_exclusive_to("Acme").await.unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].id, "P13");

    assert!(catalog.parts_exclusive_to("WidgetCorp").await.unwrap().is_empty());
}

#[tokio::test]
async fn suppliers_sharing_a_name_count_as_one() {
    let catalog = fixture_catalog().await;
    add_supplier(catalog.pool(), "F08", "Acme").await;
    add_part(catalog.pool(), "P13", "Ingranaggio", "blu").await;
    add_offer(catalog.pool(), "F01", "P13", 2.0).await;
    add_offer(catalog.pool(), "F08", "P13", 2.5).await;

    let parts = catalog.parts_exclusive_to("Acme").await.unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].id, "P13");
}

// === 5: suppliers above the per-part average ===

#[tokio::test]
async fn every_fixture_supplier_beats_some_average() {
    let catalog = fixture_catalog().await;
    let suppliers = catalog.suppliers_above_part_average().await.unwrap();
    assert_eq!(
        supplier_ids(&suppliers),
        ["F01", "F02", "F03", "F04", "F05", "F06", "F07"]
    );
}

#[tokio::test]
async fn price_equal_to_average_is_not_above() {
    let catalog = empty_catalog().await;
    let pool = catalog.pool();
    add_supplier(pool, "S1", "Uno").await;
    add_supplier(pool, "S2", "Due").await;
    add_supplier(pool, "S3", "Tre").await;
    add_part(pool, "X1", "Perno", "rosso").await;
    add_offer(pool, "S1", "X1", 10.0).await;
    add_offer(pool, "S2", "X1", 10.0).await;

    assert!(catalog.suppliers_above_part_average().await.unwrap().is_empty());

    add_offer(pool, "S3", "X1", 13.0).await;
    let suppliers = catalog.suppliers_above_part_average().await.unwrap();
    assert_eq!(supplier_ids(&suppliers), ["S3"]);
}

// === 6: cheapest supplier per part ===

#[tokio::test]
async fn cheapest_offer_per_fixture_part() {
    let catalog = fixture_catalog().await;
    let offers = catalog.cheapest_offers().await.unwrap();

    let pairs: Vec<(&str, &str)> = offers
        .iter()
        .map(|o| (o.part_id.as_str(), o.supplier_id.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("P01", "F01"),
            ("P02", "F02"),
            ("P03", "F02"),
            ("P04", "F01"),
            ("P05", "F02"),
            ("P06", "F01"),
            ("P07", "F02"),
            ("P08", "F03"),
            ("P09", "F03"),
            ("P10", "F01"),
            ("P11", "F03"),
            ("P12", "F03"),
        ]
    );
    assert_eq!(offers[7].price, 3.9);
    assert_eq!(offers[7].part_name, "Cavo");
    assert_eq!(offers[7].supplier_name, "Supplies Inc");
}

#[tokio::test]
async fn ties_at_the_minimum_are_all_returned() {
    let catalog = fixture_catalog().await;
    add_offer(catalog.pool(), "F04", "P01", 10.5).await;

    let offers = catalog.cheapest_offers().await.unwrap();
    let p01: Vec<&str> = offers
        .iter()
        .filter(|o| o.part_id == "P01")
        .map(|o| o.supplier_id.as_str())
        .collect();
    assert_eq!(p01, ["F01", "F04"]);
    assert_eq!(offers.len(), 13);
}

// === 7: mono-color suppliers ===

#[tokio::test]
async fn only_red_components_is_red_only() {
    let catalog = fixture_catalog().await;
    let suppliers = catalog.mono_color_suppliers("rosso").await.unwrap();
    assert_eq!(supplier_ids(&suppliers), ["F07"]);
}

#[tokio::test]
async fn supplier_without_catalog_is_not_mono_color() {
    let catalog = fixture_catalog().await;
    add_supplier(catalog.pool(), "F08", "Vuoto").await;

    let suppliers = catalog.mono_color_suppliers("rosso").await.unwrap();
    assert_eq!(supplier_ids(&suppliers), ["F07"]);
}

// === 8: red and green suppliers ===

#[tokio::test]
async fn red_and_green_suppliers_with_counts() {
    let catalog = fixture_catalog().await;
    let suppliers = catalog.red_and_green_suppliers().await.unwrap();

    let summary: Vec<(&str, i64, i64)> = suppliers
        .iter()
        .map(|s| (s.id.as_str(), s.red_parts, s.green_parts))
        .collect();
    assert_eq!(summary, [("F01", 5, 4), ("F02", 2, 2), ("F03", 2, 2)]);
}

// === 9: suppliers by color set ===

#[tokio::test]
async fn suppliers_by_color_set() {
    let catalog = fixture_catalog().await;

    let blue = ColorSet::parse("blu").unwrap();
    let suppliers = catalog.suppliers_with_any_color(&blue).await.unwrap();
    assert_eq!(supplier_ids(&suppliers), ["F01", "F02", "F03", "F05"]);

    let green_blue = ColorSet::parse("verde, blu").unwrap();
    let suppliers = catalog.suppliers_with_any_color(&green_blue).await.unwrap();
    assert_eq!(
        supplier_ids(&suppliers),
        ["F01", "F02", "F03", "F04", "F05", "F06"]
    );
}

// === 10: parts with at least N suppliers ===

#[tokio::test]
async fn parts_ranked_by_supplier_count() {
    let catalog = fixture_catalog().await;

    let parts = catalog.parts_with_min_suppliers(2).await.unwrap();
    assert_eq!(parts.len(), 12);
    assert_eq!(parts[0].id, "P04");
    assert_eq!(parts[0].supplier_count, 4);
    assert_eq!(parts[3].id, "P01");
    assert_eq!(parts[3].supplier_count, 3);

    let top = catalog.parts_with_min_suppliers(4).await.unwrap();
    let ids: Vec<&str> = top.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["P04", "P07", "P10"]);
    assert!(top.iter().all(|p| p.supplier_count == 4));

    assert!(catalog.parts_with_min_suppliers(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn two_suppliers_meet_threshold_of_two() {
    let catalog = empty_catalog().await;
    let pool = catalog.pool();
    add_supplier(pool, "A", "Alfa").await;
    add_supplier(pool, "B", "Beta").await;
    add_part(pool, "PA", "Condiviso", "verde").await;
    add_part(pool, "PB", "Singolo", "verde").await;
    add_offer(pool, "A", "PA", 1.0).await;
    add_offer(pool, "B", "PA", 1.5).await;
    add_offer(pool, "A", "PB", 4.0).await;

    let parts = catalog.parts_with_min_suppliers(2).await.unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].id, "PA");
    assert_eq!(parts[0].supplier_count, 2);
}

#[tokio::test]
async fn ping_succeeds_on_live_store() {
    let catalog = empty_catalog().await;
    catalog.ping().await.unwrap();
}
