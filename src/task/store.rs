//! In-memory task collection and the operations over it

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, error, warn};

use super::error::{Result, TaskError};
use super::model::{Task, TaskId};
use super::storage::Storage;

/// Owns the task collection and writes it back after every change.
///
/// Ids come from a counter that only grows, so a deleted task's id is never
/// handed out again. After a reload the counter resumes above the highest
/// persisted id.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Storage,
    last_id: u32,
    dirty: bool,
    load_error: Option<TaskError>,
}

impl TaskStore {
    /// Create an empty store backed by `storage`, without reading it.
    pub fn new(storage: Storage) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
            last_id: 0,
            dirty: false,
            load_error: None,
        }
    }

    /// Create a store and load it from disk. An unreadable or malformed file
    /// is logged, kept in [`TaskStore::load_error`], and the store starts empty.
    pub fn open(storage: Storage) -> Self {
        let mut store = Self::new(storage);
        if let Err(e) = store.load() {
            warn!(
                "Could not load tasks from {}, starting empty: {}",
                store.storage.path().display(),
                e
            );
            store.load_error = Some(e);
        }
        store
    }

    /// Why [`TaskStore::open`] started with an empty list, if it had to.
    pub fn load_error(&self) -> Option<&TaskError> {
        self.load_error.as_ref()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Replace the collection with the file contents. On failure the
    /// collection is left empty.
    ///
    /// Tasks whose id is zero or repeats an earlier task's id get fresh ids
    /// from the counter, and the store is marked dirty so the repaired list
    /// is written back on the next save.
    pub fn load(&mut self) -> Result<usize> {
        self.tasks.clear();
        self.dirty = false;
        let mut tasks = self.storage.load()?;

        let highest = tasks.iter().map(|t| t.id.number()).max().unwrap_or(0);
        self.last_id = self.last_id.max(highest);

        let mut seen = HashSet::with_capacity(tasks.len());
        let mut repaired = false;
        for task in &mut tasks {
            if task.id.number() == 0 || !seen.insert(task.id) {
                let old = task.id;
                task.id = self.next_id()?;
                warn!("Reassigned duplicate task id {} to {}", old, task.id);
                repaired = true;
                seen.insert(task.id);
            }
        }

        self.tasks = tasks;
        self.dirty = repaired;
        Ok(self.tasks.len())
    }

    /// Write the whole collection to disk.
    pub fn save(&mut self) -> Result<()> {
        self.storage.save(&self.tasks)?;
        self.dirty = false;
        Ok(())
    }

    /// True when the last write after a change failed and memory is ahead of disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!(
                "Failed to save tasks to {}: {}",
                self.storage.path().display(),
                e
            );
            self.dirty = true;
        }
    }

    fn next_id(&mut self) -> Result<TaskId> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or(TaskError::IdsExhausted)?;
        Ok(TaskId(self.last_id))
    }

    fn position(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in canonical (insertion) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub fn add(
        &mut self,
        text: impl Into<String>,
        priority: i64,
        due_date: NaiveDate,
    ) -> Result<Task> {
        let task = Task::new(self.next_id()?, text, priority, due_date);
        debug!("Adding task {}", task.id);
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Overwrite text, priority and due date. Id and completion are kept.
    pub fn edit(
        &mut self,
        id: TaskId,
        text: impl Into<String>,
        priority: i64,
        due_date: NaiveDate,
    ) -> Result<Task> {
        let idx = self.position(id)?;
        let task = &mut self.tasks[idx];
        task.text = text.into();
        task.priority = priority;
        task.due_date = due_date;
        let updated = task.clone();
        debug!("Edited task {}", id);
        self.persist();
        Ok(updated)
    }

    pub fn delete(&mut self, id: TaskId) -> Result<Task> {
        let idx = self.position(id)?;
        let removed = self.tasks.remove(idx);
        debug!("Deleted task {}", id);
        self.persist();
        Ok(removed)
    }

    pub fn complete(&mut self, id: TaskId) -> Result<Task> {
        let idx = self.position(id)?;
        self.tasks[idx].complete();
        let done = self.tasks[idx].clone();
        debug!("Completed task {}", id);
        self.persist();
        Ok(done)
    }

    /// Tasks sorted by due date, ties kept in collection order. The stored
    /// order is not changed.
    pub fn list(&self, show_completed: bool) -> Vec<Task> {
        let mut listed: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| show_completed || !t.completed)
            .cloned()
            .collect();
        listed.sort_by_key(|t| t.due_date);
        listed
    }

    /// Tasks whose text contains any of `keywords`, ignoring case, in
    /// collection order. Empty keywords are skipped, so a query made only of
    /// them matches nothing.
    pub fn search<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<Task> {
        let needles: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if needles.is_empty() {
            return Vec::new();
        }

        self.tasks
            .iter()
            .filter(|t| needles.iter().any(|n| t.text_contains(n)))
            .cloned()
            .collect()
    }
}

/// Split a free-text query into whitespace-separated keywords.
pub fn split_keywords(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_store() -> (TempDir, TaskStore) {
        let temp = tempdir().unwrap();
        let store = TaskStore::new(Storage::new(temp.path().join("tasks.json")));
        (temp, store)
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_temp, mut store) = temp_store();
        for expected in 1..=3 {
            let before = store.len() as u32;
            let task = store.add("task", 0, date(2024, 1, 1)).unwrap();
            assert_eq!(task.id, TaskId(expected));
            assert_eq!(task.id.number(), before + 1);
            assert!(!task.completed);
        }
    }

    #[test]
    fn test_add_after_delete_does_not_reuse_id() {
        let (_temp, mut store) = temp_store();
        store.add("a", 0, date(2024, 1, 1)).unwrap();
        store.add("b", 0, date(2024, 1, 2)).unwrap();
        store.add("c", 0, date(2024, 1, 3)).unwrap();

        store.delete(TaskId(1)).unwrap();
        let next = store.add("d", 0, date(2024, 1, 4)).unwrap();

        // A length-based scheme would hand out 3 here and collide with "c".
        assert_eq!(next.id, TaskId(4));
        let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(2), TaskId(3), TaskId(4)]);
    }

    #[test]
    fn test_deleting_last_task_does_not_recycle_its_id() {
        let (_temp, mut store) = temp_store();
        store.add("a", 0, date(2024, 1, 1)).unwrap();
        store.delete(TaskId(1)).unwrap();
        assert_eq!(store.add("b", 0, date(2024, 1, 1)).unwrap().id, TaskId(2));
    }

    #[test]
    fn test_edit_overwrites_fields_and_keeps_completion() {
        let (_temp, mut store) = temp_store();
        let task = store.add("old", 1, date(2024, 1, 1)).unwrap();
        store.complete(task.id).unwrap();

        let edited = store.edit(task.id, "new", 9, date(2025, 2, 2)).unwrap();
        assert_eq!(edited.id, task.id);
        assert_eq!(edited.text, "new");
        assert_eq!(edited.priority, 9);
        assert_eq!(edited.due_date, date(2025, 2, 2));
        assert!(edited.completed);
        assert_eq!(store.get(task.id), Some(edited));
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let (_temp, mut store) = temp_store();
        store.add("a", 0, date(2024, 3, 1)).unwrap();
        store.add("b", 0, date(2024, 1, 1)).unwrap();
        store.add("c", 0, date(2024, 2, 1)).unwrap();

        let removed = store.delete(TaskId(2)).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(store.tasks()), vec!["a", "c"]);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let (_temp, mut store) = temp_store();
        let task = store.add("a", 0, date(2024, 1, 1)).unwrap();

        assert!(store.complete(task.id).unwrap().completed);
        assert!(store.complete(task.id).unwrap().completed);
    }

    #[test]
    fn test_missing_id_leaves_collection_unchanged() {
        let (_temp, mut store) = temp_store();
        store.add("a", 1, date(2024, 1, 1)).unwrap();
        store.add("b", 2, date(2024, 1, 2)).unwrap();
        let before = store.tasks().to_vec();

        let missing = TaskId(99);
        assert!(matches!(
            store.edit(missing, "x", 0, date(2024, 1, 1)),
            Err(TaskError::NotFound(id)) if id == missing
        ));
        assert!(matches!(store.delete(missing), Err(TaskError::NotFound(_))));
        assert!(matches!(store.complete(missing), Err(TaskError::NotFound(_))));

        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_list_sorts_by_due_date() {
        let (_temp, mut store) = temp_store();
        store.add("Buy milk", 2, date(2024, 6, 1)).unwrap();
        store.add("Call dentist", 1, date(2024, 5, 15)).unwrap();

        assert_eq!(texts(&store.list(false)), vec!["Call dentist", "Buy milk"]);
    }

    #[test]
    fn test_list_is_stable_on_ties() {
        let (_temp, mut store) = temp_store();
        store.add("first", 0, date(2024, 6, 1)).unwrap();
        store.add("early", 0, date(2024, 5, 1)).unwrap();
        store.add("second", 0, date(2024, 6, 1)).unwrap();
        store.add("third", 0, date(2024, 6, 1)).unwrap();

        assert_eq!(
            texts(&store.list(true)),
            vec!["early", "first", "second", "third"]
        );
    }

    #[test]
    fn test_list_does_not_reorder_storage() {
        let (_temp, mut store) = temp_store();
        store.add("late", 0, date(2024, 12, 1)).unwrap();
        store.add("soon", 0, date(2024, 1, 1)).unwrap();

        store.list(true);
        assert_eq!(texts(store.tasks()), vec!["late", "soon"]);
    }

    #[test]
    fn test_list_filters_completed() {
        let (_temp, mut store) = temp_store();
        store.add("open", 0, date(2024, 1, 2)).unwrap();
        let done = store.add("done", 0, date(2024, 1, 1)).unwrap();
        store.complete(done.id).unwrap();

        let open = store.list(false);
        assert!(open.iter().all(|t| !t.completed));
        assert_eq!(texts(&open), vec!["open"]);

        assert_eq!(texts(&store.list(true)), vec!["done", "open"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_search_matches_any_keyword_case_insensitively() {
        let (_temp, mut store) = temp_store();
        store.add("Buy Food", 0, date(2024, 3, 1)).unwrap();
        store.add("Walk dog", 0, date(2024, 1, 1)).unwrap();
        store.add("Pay rent", 0, date(2024, 2, 1)).unwrap();

        assert_eq!(texts(&store.search(&["food"])), vec!["Buy Food"]);
        assert_eq!(
            texts(&store.search(&["RENT", "buy"])),
            vec!["Buy Food", "Pay rent"]
        );
        assert!(store.search(&["cat"]).is_empty());
    }

    #[test]
    fn test_search_without_keywords_matches_nothing() {
        let (_temp, mut store) = temp_store();
        store.add("anything", 0, date(2024, 1, 1)).unwrap();

        let none: [&str; 0] = [];
        assert!(store.search(&none).is_empty());
        assert!(store.search(&[""]).is_empty());
    }

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords("  buy   milk\tnow "), vec!["buy", "milk", "now"]);
        assert!(split_keywords("   ").is_empty());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let (temp, mut store) = temp_store();
        let a = store.add("a", 1, date(2024, 1, 1)).unwrap();
        store.add("b", 2, date(2024, 1, 2)).unwrap();
        store.complete(a.id).unwrap();
        store.delete(TaskId(2)).unwrap();

        let reopened = TaskStore::open(Storage::new(temp.path().join("tasks.json")));
        assert_eq!(reopened.tasks(), store.tasks());
    }

    #[test]
    fn test_reload_resumes_ids_above_highest() {
        let (temp, mut store) = temp_store();
        store.add("a", 0, date(2024, 1, 1)).unwrap();
        store.add("b", 0, date(2024, 1, 1)).unwrap();
        store.add("c", 0, date(2024, 1, 1)).unwrap();
        store.delete(TaskId(1)).unwrap();

        let mut reopened = TaskStore::open(Storage::new(temp.path().join("tasks.json")));
        assert_eq!(reopened.add("d", 0, date(2024, 1, 1)).unwrap().id, TaskId(4));
    }

    #[test]
    fn test_open_with_corrupt_file_starts_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tasks.json");
        std::fs::write(&path, "not json").unwrap();

        let store = TaskStore::open(Storage::new(&path));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_save_keeps_memory_and_marks_dirty() {
        let temp = tempdir().unwrap();
        // A directory where the file should be makes every write fail.
        let path = temp.path().join("tasks.json");
        std::fs::create_dir(&path).unwrap();

        let mut store = TaskStore::new(Storage::new(&path));
        let task = store.add("kept", 0, date(2024, 1, 1)).unwrap();

        assert!(store.is_dirty());
        assert_eq!(store.get(task.id), Some(task));
        assert!(store.save().unwrap_err().is_persistence());
    }

    fn write_file(temp: &TempDir, json: &str) -> Storage {
        let path = temp.path().join("tasks.json");
        std::fs::write(&path, json).unwrap();
        Storage::new(path)
    }

    #[test]
    fn test_add_fails_when_ids_are_exhausted() {
        let temp = tempdir().unwrap();
        let storage = write_file(
            &temp,
            r#"[{"id": 4294967295, "text": "last", "completed": false,
                 "priority": 0, "due_date": "2024-01-01"}]"#,
        );
        let mut store = TaskStore::open(storage);
        assert_eq!(store.len(), 1);

        let err = store.add("one too many", 0, date(2024, 1, 2)).unwrap_err();
        assert!(matches!(err, TaskError::IdsExhausted));
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].id, TaskId(u32::MAX));
    }

    #[test]
    fn test_load_reassigns_duplicate_ids() {
        let temp = tempdir().unwrap();
        let storage = write_file(
            &temp,
            r#"[{"id": 2, "text": "b", "completed": false, "priority": 0, "due_date": "2024-01-01"},
                {"id": 3, "text": "c", "completed": false, "priority": 0, "due_date": "2024-01-01"},
                {"id": 3, "text": "d", "completed": false, "priority": 0, "due_date": "2024-01-01"}]"#,
        );
        let mut store = TaskStore::open(storage);

        let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(2), TaskId(3), TaskId(4)]);
        assert!(store.is_dirty());

        store.complete(TaskId(4)).unwrap();
        assert_eq!(store.get(TaskId(4)).map(|t| t.text), Some("d".to_string()));
        assert_eq!(store.get(TaskId(3)).map(|t| t.completed), Some(false));
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_load_reassigns_zero_id() {
        let temp = tempdir().unwrap();
        let storage = write_file(
            &temp,
            r#"[{"id": 0, "text": "zero", "completed": false, "priority": 0, "due_date": "2024-01-01"},
                {"id": 5, "text": "five", "completed": false, "priority": 0, "due_date": "2024-01-01"}]"#,
        );
        let store = TaskStore::open(storage);

        let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(6), TaskId(5)]);
    }

    #[test]
    fn test_clean_load_is_not_dirty() {
        let (temp, mut store) = temp_store();
        store.add("a", 0, date(2024, 1, 1)).unwrap();

        let reopened = TaskStore::open(Storage::new(temp.path().join("tasks.json")));
        assert!(!reopened.is_dirty());
        assert!(reopened.load_error().is_none());
    }

    #[test]
    fn test_open_records_load_error() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(write_file(&temp, "[{"));

        assert!(store.is_empty());
        assert!(store.load_error().is_some_and(|e| e.is_persistence()));
    }
}
