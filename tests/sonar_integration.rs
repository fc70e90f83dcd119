//! End-to-end tests: fixture CSV → persisted catalog → range queries and
//! staging registry, all against a temp store.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use staging_sonar::query::{report_by_range_class, stagings_within, systems_within, RangeClass};
use staging_sonar::{CatalogStore, SonarDb, StagingRegistry};

/// Four systems spanning both magnitude regimes, plus one wormhole row that
/// must never reach the catalog. Coordinates are meters; Turnur sits one
/// blops range minus a little from Amamake.
fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("starmap.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "id,name,x,y,z,security").unwrap();
    writeln!(file, "30000142,Jita,-1.29e17,6.08e16,1.17e17,0.945").unwrap();
    writeln!(file, "30002537,Amamake,-1.10e17,4.10e16,6.50e16,0.443").unwrap();
    writeln!(file, "30002961,Turnur,-1.15e17,4.20e16,6.60e16,0.366").unwrap();
    writeln!(file, "30004970,1DQ1-A,1.50e17,-2.00e16,-8.00e16,-0.385").unwrap();
    writeln!(file, "31000005,J115405,4.00e17,1.00e16,2.00e16,-1.0").unwrap();
    file.flush().unwrap();
    path
}

fn open_all(dir: &TempDir) -> (SonarDb, PathBuf) {
    let dataset = write_fixture(dir);
    let db = SonarDb::open(&dir.path().join("sonar.redb")).unwrap();
    (db, dataset)
}

#[test]
fn test_catalog_builds_once_then_reads_from_store() {
    let dir = TempDir::new().unwrap();
    let (db, dataset) = open_all(&dir);

    let catalog = CatalogStore::open(&db, &dataset).unwrap();
    assert_eq!(catalog.len(), 4, "wormhole row must be excluded");
    drop(catalog);

    // Second open must come from the store, not the CSV.
    std::fs::remove_file(&dataset).unwrap();
    let catalog = CatalogStore::open(&db, &dataset).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get_by_name("turnur").unwrap().id, 30002961);
}

#[test]
fn test_range_query_against_fixture() {
    let dir = TempDir::new().unwrap();
    let (db, dataset) = open_all(&dir);
    let catalog = CatalogStore::open(&db, &dataset).unwrap();

    let amamake = catalog.get_by_name("Amamake").unwrap();
    let in_range = systems_within(&catalog, amamake.coordinates, RangeClass::Blops.radius());

    // Turnur is ~5e15 m away, well within blops range; 1DQ1-A is on the
    // other side of the map; Amamake itself is excluded by position.
    assert!(in_range.contains("turnur"));
    assert!(!in_range.contains("amamake"));
    assert!(!in_range.contains("1dq1-a"));
}

#[test]
fn test_staging_pipeline_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (db, dataset) = open_all(&dir);
    let catalog = CatalogStore::open(&db, &dataset).unwrap();
    let registry = StagingRegistry::new(&db);

    let accepted = registry
        .import_from_text(
            "Turnur:Tribal Band\n1DQ1-A:Goons\nNowhere:Nobody\n",
            &catalog,
        )
        .unwrap();
    assert_eq!(accepted.len(), 2, "unknown system line must be dropped");

    let amamake = catalog.get_by_name("Amamake").unwrap();
    let in_range = systems_within(&catalog, amamake.coordinates, RangeClass::Blops.radius());
    let stagings = stagings_within(&registry.get_all().unwrap(), &in_range);

    // Only names both registered and in range survive the intersection.
    assert_eq!(stagings.len(), 1);
    assert_eq!(stagings["Turnur"], "Tribal Band");
}

#[test]
fn test_report_sections_and_no_match_line() {
    let dir = TempDir::new().unwrap();
    let (db, dataset) = open_all(&dir);
    let catalog = CatalogStore::open(&db, &dataset).unwrap();
    let registry = StagingRegistry::new(&db);

    registry
        .import_from_text("Turnur:Tribal Band\n", &catalog)
        .unwrap();

    let amamake = catalog.get_by_name("Amamake").unwrap().clone();
    let report = report_by_range_class(
        &[RangeClass::Blops, RangeClass::Supers],
        &amamake,
        &catalog,
        &registry,
    )
    .unwrap();

    assert!(report.contains("Staging systems in blops range:"));
    assert!(report.contains("  Turnur: Tribal Band"));
    // Supers reach too (Turnur is close); both sections list it.
    assert!(report.contains("Staging systems in super range:"));

    let empty_report = report_by_range_class(&[], &amamake, &catalog, &registry).unwrap();
    assert!(empty_report.is_empty());
}

#[test]
fn test_registry_survives_reopen_and_full_replace() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(&dir);
    let db_path = dir.path().join("sonar.redb");

    {
        let db = SonarDb::open(&db_path).unwrap();
        let catalog = CatalogStore::open(&db, &dataset).unwrap();
        let registry = StagingRegistry::new(&db);
        registry
            .import_from_text("Jita:Pubbies\nTurnur:Tribal Band\n", &catalog)
            .unwrap();
    }

    let db = SonarDb::open(&db_path).unwrap();
    let registry = StagingRegistry::new(&db);
    let entries = registry.get_all().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries["Jita"], "Pubbies");

    let mut replacement = BTreeMap::new();
    replacement.insert("Amamake".to_string(), "Pandemic Legion".to_string());
    registry.replace_all(&replacement).unwrap();

    let entries = registry.get_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries.contains_key("Jita"));
}

#[test]
fn test_export_import_round_trip_through_store() {
    let dir = TempDir::new().unwrap();
    let (db, dataset) = open_all(&dir);
    let catalog = CatalogStore::open(&db, &dataset).unwrap();
    let registry = StagingRegistry::new(&db);

    registry
        .import_from_text("Jita:Pubbies\nAmamake:Pandemic Legion\n", &catalog)
        .unwrap();
    let before = registry.get_all().unwrap();

    let text = registry.export_to_text().unwrap();
    let after = registry.import_from_text(&text, &catalog).unwrap();

    assert_eq!(before, after);
}
