use crate::domain::model::Student;
use crate::domain::ports::StudentStore;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

const STORE_VERSION: u32 = 1;

/// On-disk shape: a versioned envelope around the full student collection,
/// so readers can validate the format instead of trusting an opaque blob.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    students: Vec<Student>,
}

/// File-backed student store. One mutex per instance serializes every
/// operation's whole read-modify-write window; the collection-wide critical
/// section is deliberate, record counts are small.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // A panic in one caller must not wedge every later one.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Result<Vec<Student>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice::<StoreFile>(&bytes) {
            Ok(file) if file.version == STORE_VERSION => Ok(file.students),
            Ok(file) => {
                tracing::warn!(
                    version = file.version,
                    path = %self.path.display(),
                    "unsupported store version, treating store as empty"
                );
                Ok(Vec::new())
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "store file unreadable, treating store as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    // Write to a sibling temp file and rename into place, so a concurrent
    // reader never observes a half-written collection.
    fn persist(&self, students: &[Student]) -> Result<()> {
        let file = StoreFile {
            version: STORE_VERSION,
            students: students.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&file)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(count = students.len(), "store overwritten");
        Ok(())
    }
}

impl StudentStore for FileStore {
    fn ensure_initialized(&self) -> Result<()> {
        let _guard = self.guard();
        if !self.path.exists() {
            self.persist(&[])?;
        }
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Student>> {
        let _guard = self.guard();
        self.load()
    }

    fn upsert(&self, student: &Student) -> Result<()> {
        let _guard = self.guard();
        let mut students = self.load()?;
        students.retain(|s| s.id != student.id);
        students.push(student.clone());
        self.persist(&students)
    }

    fn delete(&self, student_id: &str) -> Result<bool> {
        let _guard = self.guard();
        let mut students = self.load()?;
        let before = students.len();
        students.retain(|s| s.id != student_id);
        if students.len() == before {
            return Ok(false);
        }
        self.persist(&students)?;
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.guard();
        self.persist(&[])
    }

    fn email_exists(&self, email: &str) -> Result<bool> {
        let _guard = self.guard();
        Ok(self.load()?.iter().any(|s| s.email == email))
    }
}
