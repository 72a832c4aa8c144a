//! Record store scenarios through the public `roster-core` API.

use roster_core::{RecordStore, RosterError, SearchMode, SortKey, StudentRecord};

fn ids(store: &RecordStore) -> Vec<String> {
    store.list_all().iter().map(|r| r.id().to_string()).collect()
}

fn seeded() -> RecordStore {
    let mut store = RecordStore::new();
    let rows = [
        ("S3", "Minh", 75.0, 80.0),
        ("S1", "Anna", 80.0, 90.0),
        ("S4", "Lan", 90.0, 60.0),
        ("S2", "Ivan", 60.0, 70.0),
        ("S5", "Minh", 50.0, 100.0),
    ];
    for (id, name, p, f) in rows {
        store.insert(id, name, p, f).unwrap();
    }
    store
}

#[test]
fn every_total_is_the_weighted_sum() {
    let store = seeded();
    for r in store.list_all() {
        let expected = 0.4 * r.process_score() + 0.6 * r.final_score();
        assert!((r.total_score() - expected).abs() < 1e-9, "{}", r.id());
    }
}

#[test]
fn insertion_order_is_kept_until_sort() {
    let store = seeded();
    assert_eq!(ids(&store), vec!["S3", "S1", "S4", "S2", "S5"]);
}

#[test]
fn sorting_reorders_without_losing_records() {
    let mut store = seeded();
    let mut before: Vec<StudentRecord> = store.list_all().to_vec();

    store.sort_by(SortKey::Name);
    let names: Vec<&str> = store.list_all().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Anna", "Ivan", "Lan", "Minh", "Minh"]);
    // Equal names keep their insertion order.
    assert_eq!(store.list_all()[3].id(), "S3");
    assert_eq!(store.list_all()[4].id(), "S5");

    let mut after: Vec<StudentRecord> = store.list_all().to_vec();
    before.sort_by(|a, b| a.id().cmp(b.id()));
    after.sort_by(|a, b| a.id().cmp(b.id()));
    assert_eq!(before, after);
}

#[test]
fn total_descending_then_id() {
    let mut store = seeded();

    store.sort_by(SortKey::TotalScoreDescending);
    assert!(store
        .list_all()
        .windows(2)
        .all(|w| w[0].total_score() >= w[1].total_score()));
    let once = ids(&store);
    store.sort_by(SortKey::TotalScoreDescending);
    assert_eq!(ids(&store), once);

    store.sort_by(SortKey::Id);
    assert_eq!(ids(&store), vec!["S1", "S2", "S3", "S4", "S5"]);
}

#[test]
fn search_returns_matches_in_store_order() {
    let mut store = seeded();
    let minh: Vec<&str> = store
        .search(SearchMode::ByName, "Minh")
        .into_iter()
        .map(|r| r.id())
        .collect();
    assert_eq!(minh, vec!["S3", "S5"]);

    store.sort_by(SortKey::TotalScoreDescending);
    let minh: Vec<&str> = store
        .search(SearchMode::ByName, "Minh")
        .into_iter()
        .map(|r| r.id())
        .collect();
    assert_eq!(minh, vec!["S5", "S3"]);

    assert!(store.search(SearchMode::ById, "S6").is_empty());
}

#[test]
fn stats_example() {
    let mut store = RecordStore::new();
    for (id, total) in [("a", 70.0), ("b", 85.0), ("c", 90.0)] {
        store.insert(id, id, total, total).unwrap();
    }
    let stats = store.stats().unwrap();
    assert_eq!(stats.count, 3);
    assert!((stats.max_total_score - 90.0).abs() < 1e-9);
    assert!((stats.mean_total_score - 81.666_666_666_666_67).abs() < 1e-9);
}

#[test]
fn stats_on_empty_store_is_no_records() {
    let store = RecordStore::new();
    assert_eq!(store.stats(), Err(RosterError::EmptyStore));
}
