//! End-to-end storage tests: classify with the real engine, persist, read
//! back, and aggregate.

use partlex_engine::Classifier;
use partlex_storage::queries::{parts, stats};
use partlex_storage::{import_records, import::import_lines, DatabaseManager};

fn classified(texts: &[&str]) -> Vec<partlex_core::types::PartRecord> {
    let classifier = Classifier::with_defaults().unwrap();
    texts.iter().map(|t| classifier.classify(t)).collect()
}

#[test]
fn insert_and_read_back_round_trips() {
    let db = DatabaseManager::open_in_memory().unwrap();
    let records = classified(&["פ.אויר מזדה 3 מ13"]);

    let id = db
        .with_writer(|conn| parts::insert_part(conn, &records[0], 1_700_000_000))
        .unwrap();

    let row = db
        .with_reader(|conn| parts::get_part(conn, id))
        .unwrap()
        .unwrap();

    assert_eq!(row.record, records[0]);
    assert_eq!(row.created_at, 1_700_000_000);
}

#[test]
fn bulk_import_lands_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let db = DatabaseManager::open(&dir.path().join("parts.db")).unwrap();

    let records = classified(&[
        "פ.אויר מזדה 3 מ13",
        "דסקיות קדמי ימין אוקטביה מ05",
        "בולם אחורי קורולה מ08",
        "רצועה 6PK 1230",
    ]);
    let report = import_records(&db, &records, 2).unwrap();
    assert_eq!(report.inserted, 4);

    let count = db.with_reader(parts::count_parts).unwrap();
    assert_eq!(count, 4);
}

#[test]
fn import_lines_skips_blanks() {
    let db = DatabaseManager::open_in_memory().unwrap();
    let classifier = Classifier::with_defaults().unwrap();

    let lines: Vec<String> = vec![
        "פ.שמן ספורטאג מ16".into(),
        "".into(),
        "   ".into(),
        "ת.מנוע שמאל גולף".into(),
    ];
    let report = import_lines(&db, lines, 0, |line| classifier.classify(line)).unwrap();

    assert_eq!(report.inserted, 2);
    assert_eq!(report.skipped_blank, 2);
}

#[test]
fn category_query_filters_and_orders() {
    let db = DatabaseManager::open_in_memory().unwrap();
    let records = classified(&[
        "דסקיות קדמי אוקטביה",
        "דסקיות אחורי קורולה",
        "פ.אויר מזדה 3",
    ]);
    import_records(&db, &records, 0).unwrap();

    let discs = db
        .with_reader(|conn| parts::query_by_category(conn, "Brake Discs", 10))
        .unwrap();
    assert_eq!(discs.len(), 2);
    // Newest first.
    assert_eq!(discs[0].record.raw_text, "דסקיות אחורי קורולה");
}

#[test]
fn accuracy_stats_cover_all_rows() {
    let db = DatabaseManager::open_in_memory().unwrap();
    let records = classified(&[
        "פ.אויר מזדה 3 מ13",
        "דסקיות קדמי ימין אוקטביה מ05",
        "טקסט שאינו מוכר",
    ]);
    import_records(&db, &records, 0).unwrap();

    let stats = db.with_reader(stats::accuracy_stats).unwrap();
    assert_eq!(stats.total, 3);
    assert!(stats.mean_accuracy > 0.0);
    assert_eq!(stats.buckets.iter().sum::<i64>(), 3);
    assert!(stats.mean_category >= 0.0 && stats.mean_category <= 1.0);

    let by_category = db
        .with_reader(|conn| stats::category_accuracy(conn, 10))
        .unwrap();
    assert!(!by_category.is_empty());
    assert!(by_category.iter().all(|c| c.count > 0));
}

#[test]
fn low_accuracy_queue_returns_worst_first() {
    let db = DatabaseManager::open_in_memory().unwrap();
    let records = classified(&["פ.אויר מזדה 3 מ13", "בלתי ניתן לזיהוי"]);
    import_records(&db, &records, 0).unwrap();

    let queue = db
        .with_reader(|conn| parts::query_low_accuracy(conn, 1.0, 10))
        .unwrap();
    assert_eq!(queue.len(), 2);
    assert!(queue[0].record.accuracy <= queue[1].record.accuracy);
}
