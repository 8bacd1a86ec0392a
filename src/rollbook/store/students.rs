use super::{StorageBackend, STUDENTS_KEY};
use crate::error::Result;
use crate::model::Student;

/// Owner of the canonical student list.
///
/// The in-memory `Vec` is the source of truth between mutations; every
/// mutation re-serializes the whole list to [`STUDENTS_KEY`]. There is no
/// partial persistence and no rollback: if a save fails, memory is ahead
/// of storage until the next successful mutation. Consumers (filter,
/// paginator) only ever read a snapshot via [`StudentStore::students`].
pub struct StudentStore<B: StorageBackend> {
    backend: B,
    students: Vec<Student>,
}

impl<B: StorageBackend> StudentStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            students: Vec::new(),
        }
    }

    /// Load the list from storage. A missing key is an empty list; a
    /// corrupt payload is a parse error.
    pub fn load(&mut self) -> Result<()> {
        self.students = match self.backend.read(STUDENTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Startup-path variant of [`load`](Self::load): a corrupt payload
    /// degrades to an empty list instead of failing the whole application.
    pub fn load_or_default(&mut self) {
        if let Err(err) = self.load() {
            log::warn!("discarding unreadable student list: {}", err);
            self.students = Vec::new();
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Next id to assign: one past the current maximum, or 1 for an empty
    /// list.
    pub fn next_id(&self) -> u32 {
        self.students.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Assign an id, append, persist, and return the stored record.
    pub fn create(&mut self, draft: Student) -> Result<Student> {
        let mut student = draft;
        student.id = self.next_id();
        self.students.push(student);
        self.persist()?;
        Ok(self.students.last().expect("just pushed").clone())
    }

    /// Replace the record with the same id, preserving list order.
    /// Returns `false` (and does not persist) when the id is absent.
    pub fn update(&mut self, student: Student) -> Result<bool> {
        match self.students.iter_mut().find(|s| s.id == student.id) {
            Some(slot) => {
                *slot = student;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every record with the given id (at most one, per the
    /// uniqueness invariant). Returns `false` when the id is absent.
    pub fn delete(&mut self, id: u32) -> Result<bool> {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        if self.students.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Wholesale replacement, used by the seeder.
    pub fn replace_all(&mut self, students: Vec<Student>) -> Result<()> {
        self.students = students;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.students)?;
        self.backend.write(STUDENTS_KEY, &payload).inspect_err(|err| {
            log::error!("failed to persist student list: {}", err);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;
    use crate::store::MemBackend;

    fn draft(first: &str, last: &str) -> Student {
        Student::draft(
            first,
            None,
            last,
            "2000-01-01",
            "25",
            "123 Main St",
            Course::Bsit,
            None,
        )
    }

    fn store_with(students: &[(&str, &str)]) -> StudentStore<MemBackend> {
        let mut store = StudentStore::with_backend(MemBackend::new());
        for (first, last) in students {
            store.create(draft(first, last)).unwrap();
        }
        store
    }

    #[test]
    fn first_record_gets_id_one() {
        let mut store = StudentStore::with_backend(MemBackend::new());
        let stored = store.create(draft("John", "Smith")).unwrap();
        assert_eq!(stored.id, 1);
    }

    #[test]
    fn create_assigns_strictly_increasing_ids() {
        let mut store = store_with(&[("A", "One"), ("B", "Two")]);
        let max_before = store.students().iter().map(|s| s.id).max().unwrap();

        let stored = store.create(draft("C", "Three")).unwrap();
        assert!(stored.id > max_before);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn ids_continue_past_gaps() {
        let mut store = store_with(&[("A", "One"), ("B", "Two"), ("C", "Three")]);
        store.delete(2).unwrap();

        let stored = store.create(draft("D", "Four")).unwrap();
        assert_eq!(stored.id, 4);
    }

    #[test]
    fn update_replaces_in_place_preserving_order() {
        let mut store = store_with(&[("A", "One"), ("B", "Two"), ("C", "Three")]);

        let mut changed = store.get(2).unwrap().clone();
        changed.last_name = "Renamed".into();
        assert!(store.update(changed).unwrap());

        let order: Vec<u32> = store.students().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(store.get(2).unwrap().last_name, "Renamed");
    }

    #[test]
    fn update_with_unknown_id_is_a_silent_no_op() {
        let mut store = store_with(&[("A", "One")]);
        let snapshot = store.students().to_vec();

        let mut ghost = draft("Ghost", "Record");
        ghost.id = 99;
        assert!(!store.update(ghost).unwrap());
        assert_eq!(store.students(), &snapshot[..]);
    }

    #[test]
    fn delete_with_unknown_id_is_a_silent_no_op() {
        let mut store = store_with(&[("A", "One")]);
        assert!(!store.delete(99).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_the_record_and_persists() {
        let mut store = store_with(&[("A", "One"), ("B", "Two")]);
        assert!(store.delete(1).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());

        // The persisted copy reflects the deletion
        let mut reloaded = StudentStore::with_backend(store.backend);
        reloaded.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.get(2).is_some());
    }

    #[test]
    fn persisted_list_round_trips() {
        let store = store_with(&[("John", "Smith"), ("Jane", "Doe")]);

        let original = store.students().to_vec();
        let mut reloaded = StudentStore::with_backend(store.backend);
        reloaded.load().unwrap();
        assert_eq!(reloaded.students(), &original[..]);
    }

    #[test]
    fn load_of_missing_key_is_empty_not_an_error() {
        let mut store = StudentStore::with_backend(MemBackend::new());
        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_of_corrupt_payload_is_a_parse_error() {
        let backend = MemBackend::new();
        backend.write(STUDENTS_KEY, "not json").unwrap();

        let mut store = StudentStore::with_backend(backend);
        assert!(store.load().is_err());
    }

    #[test]
    fn load_or_default_recovers_from_corrupt_payload() {
        let backend = MemBackend::new();
        backend.write(STUDENTS_KEY, "[{\"broken\":").unwrap();

        let mut store = StudentStore::with_backend(backend);
        store.load_or_default();
        assert!(store.is_empty());
    }

    #[test]
    fn failed_save_surfaces_as_an_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);

        let mut store = StudentStore::with_backend(backend);
        assert!(store.create(draft("A", "One")).is_err());
    }
}
