use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Project, TimeLog, Worker};
use crate::error::StoreError;
use crate::seed;
use crate::store::{Collection, CollectionStore};

/// Typed access to the kiosk collections.
///
/// Stored JSON is decoded leniently: a missing or malformed payload reads as
/// an empty collection. The first read of workers or projects seeds the
/// built-in rosters, once per store lifetime — the seed marker takes
/// precedence, so a collection the administrator deliberately emptied stays
/// empty. No validation happens here; callers own id uniqueness.
pub struct Repository<S: CollectionStore> {
    store: S,
}

impl<S: CollectionStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn workers(&mut self) -> Result<Vec<Worker>, StoreError> {
        self.ensure_seeded()?;
        self.read(Collection::Workers)
    }

    pub fn save_workers(&mut self, workers: &[Worker]) -> Result<(), StoreError> {
        self.write(Collection::Workers, workers)
    }

    pub fn projects(&mut self) -> Result<Vec<Project>, StoreError> {
        self.ensure_seeded()?;
        self.read(Collection::Projects)
    }

    pub fn save_projects(&mut self, projects: &[Project]) -> Result<(), StoreError> {
        self.write(Collection::Projects, projects)
    }

    pub fn logs(&mut self) -> Result<Vec<TimeLog>, StoreError> {
        self.read(Collection::Logs)
    }

    /// Append-only: reads the full sequence, pushes one record and writes
    /// the whole sequence back. Not an atomic append.
    pub fn save_log(&mut self, log: TimeLog) -> Result<(), StoreError> {
        let mut logs: Vec<TimeLog> = self.read(Collection::Logs)?;
        logs.push(log);
        self.write(Collection::Logs, &logs)
    }

    /// Clears the whole log collection.
    pub fn reset_logs(&mut self) -> Result<(), StoreError> {
        self.store.reset(Collection::Logs)
    }

    fn ensure_seeded(&mut self) -> Result<(), StoreError> {
        if self.store.is_seeded() {
            return Ok(());
        }
        // Seed only collections that are absent, not ones merely empty.
        if self.store.get(Collection::Workers)?.is_none() {
            self.write(Collection::Workers, &seed::default_workers())?;
        }
        if self.store.get(Collection::Projects)?.is_none() {
            self.write(Collection::Projects, &seed::default_projects())?;
        }
        self.store.mark_seeded()
    }

    fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.store.get(collection)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                debug!("discarding malformed {} payload: {e}", collection.key());
                Ok(Vec::new())
            }
        }
    }

    fn write<T: Serialize>(
        &mut self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError> {
        let payload = serde_json::to_string(records)?;
        self.store.set(collection, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use time::OffsetDateTime;

    fn repo() -> Repository<MemoryStore> {
        Repository::new(MemoryStore::new())
    }

    fn sample_log(worker: &Worker, project: &Project) -> TimeLog {
        TimeLog::register(worker, project, 2.0, OffsetDateTime::UNIX_EPOCH)
    }

    #[test]
    fn first_read_seeds_default_rosters() {
        let mut repo = repo();
        let workers = repo.workers().unwrap();
        let projects = repo.projects().unwrap();

        assert_eq!(workers.len(), 8);
        assert_eq!(workers[0].name, "Juan García");
        assert_eq!(projects.len(), 7);
        assert!(projects.iter().all(|p| p.active));
    }

    #[test]
    fn emptied_collection_is_not_reseeded() {
        let mut repo = repo();
        repo.workers().unwrap();

        repo.save_workers(&[]).unwrap();
        assert!(repo.workers().unwrap().is_empty());
    }

    #[test]
    fn absent_collection_is_not_reseeded_once_marker_is_set() {
        let mut store = MemoryStore::new();
        store.mark_seeded().unwrap();
        let mut repo = Repository::new(store);

        assert!(repo.workers().unwrap().is_empty());
        assert!(repo.projects().unwrap().is_empty());
    }

    #[test]
    fn save_log_appends_in_order() {
        let mut repo = repo();
        let worker = Worker::new("A");
        let project = Project::new("P");

        repo.save_log(sample_log(&worker, &project)).unwrap();
        repo.save_log(sample_log(&worker, &project)).unwrap();

        assert_eq!(repo.logs().unwrap().len(), 2);
    }

    #[test]
    fn malformed_payload_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(Collection::Logs, "{not json").unwrap();
        let mut repo = Repository::new(store);

        assert!(repo.logs().unwrap().is_empty());
    }

    #[test]
    fn renaming_a_worker_leaves_log_names_untouched() {
        let mut repo = repo();
        let mut workers = repo.workers().unwrap();
        let project = Project::new("P");
        repo.save_log(sample_log(&workers[0], &project)).unwrap();

        workers[0].name = "Renamed".to_string();
        repo.save_workers(&workers).unwrap();

        let logs = repo.logs().unwrap();
        assert_eq!(logs[0].worker_name, "Juan García");
    }

    #[test]
    fn deleting_a_project_leaves_referencing_logs_intact() {
        let mut repo = repo();
        let worker = Worker::new("A");
        let mut projects = repo.projects().unwrap();
        let doomed = projects[0].clone();
        repo.save_log(sample_log(&worker, &doomed)).unwrap();

        projects.retain(|p| p.id != doomed.id);
        repo.save_projects(&projects).unwrap();

        let logs = repo.logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].project_id, doomed.id);
        assert_eq!(logs[0].project_name, doomed.name);
    }

    #[test]
    fn reset_logs_clears_the_collection() {
        let mut repo = repo();
        repo.save_log(sample_log(&Worker::new("A"), &Project::new("P")))
            .unwrap();
        repo.reset_logs().unwrap();
        assert!(repo.logs().unwrap().is_empty());
    }
}
