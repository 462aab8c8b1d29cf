#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use studyplan::commands::export::{export_to, EXPORT_FILE_NAME};
    use studyplan::commands::import::import_from;
    use studyplan::libs::store::TaskStore;
    use studyplan::libs::task::{Priority, Task};
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir, name: &str) -> TaskStore {
        TaskStore::with_path(dir.path().join(name))
    }

    fn seeded_store(dir: &TempDir, name: &str) -> TaskStore {
        let store = temp_store(dir, name);
        store
            .append(Task::new(
                "Lab report",
                Some("Chemistry".to_string()),
                Some(NaiveDate::from_ymd_opt(2026, 9, 4).unwrap()),
                None,
                Priority::High,
                true,
            ))
            .unwrap();
        store.append(Task::new("Flashcards", None, None, None, Priority::Low, false)).unwrap();
        store
    }

    #[test]
    fn test_export_then_import_round_trips_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let source = seeded_store(&dir, "source.json");
        let target = temp_store(&dir, "target.json");

        let export_path = dir.path().join("smart_study_planner_export.json");
        export_to(&source, &export_path).unwrap();

        let count = import_from(&target, &export_path).unwrap();
        assert_eq!(count, 2);
        assert_eq!(target.load(), source.load());
    }

    #[test]
    fn test_default_export_name_matches_the_storage_convention() {
        assert_eq!(EXPORT_FILE_NAME, "smart_study_planner_export.json");
    }

    #[test]
    fn test_export_of_empty_store_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir, "empty.json");

        let export_path = dir.path().join("export.json");
        export_to(&store, &export_path).unwrap();

        assert_eq!(std::fs::read_to_string(&export_path).unwrap(), "[]");
    }

    #[test]
    fn test_import_replaces_the_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let source = seeded_store(&dir, "source.json");
        let target = seeded_store(&dir, "target.json");
        target.append(Task::new("Will be replaced", None, None, None, Priority::Medium, false)).unwrap();

        let export_path = dir.path().join("export.json");
        export_to(&source, &export_path).unwrap();
        import_from(&target, &export_path).unwrap();

        assert_eq!(target.load(), source.load());
    }

    #[test]
    fn test_import_rejects_non_array_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir, "tasks.json");
        let before = store.load();

        let payload = dir.path().join("object.json");
        std::fs::write(&payload, "{\"tasks\": []}").unwrap();

        assert!(import_from(&store, &payload).is_err());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_import_rejects_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir, "tasks.json");
        let before = store.load();

        let payload = dir.path().join("garbage.json");
        std::fs::write(&payload, "not json at all").unwrap();

        assert!(import_from(&store, &payload).is_err());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_import_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir, "tasks.json");
        let before = store.load();

        assert!(import_from(&store, &dir.path().join("nope.json")).is_err());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_import_rejects_array_of_non_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir, "tasks.json");
        let before = store.load();

        let payload = dir.path().join("numbers.json");
        std::fs::write(&payload, "[1, 2, 3]").unwrap();

        assert!(import_from(&store, &payload).is_err());
        assert_eq!(store.load(), before);
    }
}
