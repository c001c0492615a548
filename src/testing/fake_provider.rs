use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, BranchId, Version};
use crate::ports::ReleaseProvider;

/// In-memory release provider. Transitions mutate the queue and latest version
/// the way the hosted provider would, and every mutating call is recorded.
pub struct FakeProvider {
    pub queue: Mutex<Vec<String>>,
    pub latest: Mutex<Version>,
    pub calls: Mutex<Vec<String>>,
    pub history: String,
}

impl FakeProvider {
    pub fn new(queue: &[&str], latest: &str) -> Self {
        Self {
            queue: Mutex::new(queue.iter().map(|b| b.to_string()).collect()),
            latest: Mutex::new(latest.parse().unwrap()),
            calls: Mutex::new(Vec::new()),
            history: "v3.2 (2026-01-15)\nFixes\n\n".to_string(),
        }
    }

    pub fn set_queue(&self, queue: &[&str]) {
        *self.queue.lock().unwrap() = queue.iter().map(|b| b.to_string()).collect();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn front(&self) -> Result<String, AppError> {
        self.queue.lock().unwrap().first().cloned().ok_or(AppError::EmptyQueue)
    }
}

impl ReleaseProvider for FakeProvider {
    fn queue(&self) -> Result<Vec<String>, AppError> {
        Ok(self.queue.lock().unwrap().clone())
    }

    fn latest_version(&self) -> Result<Version, AppError> {
        Ok(*self.latest.lock().unwrap())
    }

    fn create_release_candidate(&self, major_increment: bool) -> Result<String, AppError> {
        let latest = *self.latest.lock().unwrap();
        let next = if major_increment { latest.next_major() } else { latest.next_minor() };
        let branch = format!("release-{next}");
        self.queue.lock().unwrap().push(branch.clone());
        self.record(format!("create_release_candidate({major_increment})"));
        Ok(branch)
    }

    fn create_hotfix(&self) -> Result<String, AppError> {
        let branch = format!("hotfix-{}", self.latest.lock().unwrap().next_patch());
        self.queue.lock().unwrap().insert(0, branch.clone());
        self.record("create_hotfix".to_string());
        Ok(branch)
    }

    fn download_next_in_queue(&self, path: &Path, force: bool) -> Result<PathBuf, AppError> {
        let dir = path.join(self.front()?);
        fs::create_dir_all(&dir)?;
        self.record(format!("download_next_in_queue({force})"));
        Ok(dir)
    }

    fn accept_release_candidate(&self, force: bool) -> Result<Version, AppError> {
        let branch = self.front()?;
        let id: BranchId = branch.parse()?;
        self.queue.lock().unwrap().remove(0);
        *self.latest.lock().unwrap() = *id.version();
        self.record(format!("accept_release_candidate({force})"));
        Ok(*id.version())
    }

    fn download_release_history(&self, path: &Path) -> Result<(), AppError> {
        fs::write(path, &self.history)?;
        self.record("download_release_history".to_string());
        Ok(())
    }
}
