#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use studyplan::commands::delete::delete_task;
    use studyplan::libs::confirm::CannedConfirmer;
    use studyplan::libs::store::TaskStore;
    use studyplan::libs::task::{Priority, Task};
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> TaskStore {
        TaskStore::with_path(dir.path().join("tasks.json"))
    }

    fn sample_task(title: &str) -> Task {
        Task::new(title, None, None, None, Priority::Medium, false)
    }

    #[test]
    fn test_add_round_trips_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let task = Task::new(
            "Revise algebra",
            Some("Math".to_string()),
            Some(NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()),
            Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap()),
            Priority::High,
            true,
        );
        let expected = task.clone();
        store.append(task).unwrap();

        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], expected);
    }

    #[test]
    fn test_add_grows_collection_by_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        for i in 1..=3 {
            store.append(sample_task(&format!("Task {}", i))).unwrap();
            assert_eq!(store.load().len(), i);
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        std::fs::write(store.path(), "{not valid json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        std::fs::write(store.path(), "{\"tasks\": []}").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_toggle_done_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Read chapter 4")).unwrap();
        let id = store.load()[0].id.clone();

        let (title, done) = store.toggle_done(&id).unwrap().unwrap();
        assert_eq!(title, "Read chapter 4");
        assert!(done);
        assert!(store.load()[0].done);

        let (_, done) = store.toggle_done(&id).unwrap().unwrap();
        assert!(!done);
        assert!(!store.load()[0].done);
    }

    #[test]
    fn test_toggle_done_unknown_id_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Essay outline")).unwrap();
        assert!(store.toggle_done("missing").unwrap().is_none());
        assert!(!store.load()[0].done);
    }

    #[test]
    fn test_delete_removes_exactly_the_targeted_task() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        for i in 1..=3 {
            store.append(sample_task(&format!("Task {}", i))).unwrap();
        }
        let target = store.load()[1].id.clone();

        let title = store.delete(&target).unwrap().unwrap();
        assert_eq!(title, "Task 2");

        let remaining = store.load();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|t| t.id != target));
    }

    #[test]
    fn test_delete_unknown_id_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Keep me")).unwrap();
        assert!(store.delete("missing").unwrap().is_none());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_delete_declined_confirmation_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Task 1")).unwrap();
        store.append(sample_task("Task 2")).unwrap();
        let before = store.load();
        let target = before[0].id.clone();

        delete_task(&store, &target, &CannedConfirmer(false)).unwrap();
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_delete_confirmed_removes_the_targeted_task() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Task 1")).unwrap();
        store.append(sample_task("Task 2")).unwrap();
        let target = store.load()[0].id.clone();

        delete_task(&store, &target, &CannedConfirmer(true)).unwrap();

        let remaining = store.load();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|t| t.id != target));
    }

    #[test]
    fn test_delete_unknown_id_errors_before_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Keep me")).unwrap();
        assert!(delete_task(&store, "missing", &CannedConfirmer(true)).is_err());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_find_accepts_unique_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Flashcards")).unwrap();
        let id = store.load()[0].id.clone();

        let found = store.find(&id[..8]).unwrap();
        assert_eq!(found.id, id);
    }

    #[test]
    fn test_find_ambiguous_prefix_matches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        // Two tasks sharing a forged id prefix.
        let mut a = sample_task("A");
        let mut b = sample_task("B");
        a.id = "aaaa1111".to_string();
        b.id = "aaaa2222".to_string();
        store.save(&[a, b]).unwrap();

        assert!(store.find("aaaa").is_none());
        assert!(store.find("aaaa1111").is_some());
    }

    #[test]
    fn test_find_does_not_mutate_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(sample_task("Untouched")).unwrap();
        let before = store.load();
        let _ = store.find(&before[0].id);
        assert_eq!(store.load(), before);
    }
}
