use crate::domain::model::Student;
use crate::utils::error::Result;
use std::sync::Arc;

/// Persistence port for the student collection. The whole collection is the
/// unit of durability: every mutation is a full read-modify-write, serialized
/// against all other operations on the same store instance.
pub trait StudentStore: Send + Sync {
    /// Creates the backing file with an empty collection if it does not exist.
    fn ensure_initialized(&self) -> Result<()>;

    /// Loads the full collection. Unreadable content degrades to an empty
    /// collection with a warning instead of an error.
    fn read_all(&self) -> Result<Vec<Student>>;

    /// Inserts or replaces the record with the student's id. Never leaves two
    /// entries with the same id behind.
    fn upsert(&self, student: &Student) -> Result<()>;

    /// Removes the record with the given id; returns whether one was found.
    fn delete(&self, student_id: &str) -> Result<bool>;

    /// Overwrites the store with an empty collection. Any confirmation gate
    /// is the caller's responsibility.
    fn clear(&self) -> Result<()>;

    /// Whether any stored student uses the given email as login key.
    fn email_exists(&self, email: &str) -> Result<bool>;
}

impl<S: StudentStore> StudentStore for Arc<S> {
    fn ensure_initialized(&self) -> Result<()> {
        (**self).ensure_initialized()
    }

    fn read_all(&self) -> Result<Vec<Student>> {
        (**self).read_all()
    }

    fn upsert(&self, student: &Student) -> Result<()> {
        (**self).upsert(student)
    }

    fn delete(&self, student_id: &str) -> Result<bool> {
        (**self).delete(student_id)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }

    fn email_exists(&self, email: &str) -> Result<bool> {
        (**self).email_exists(email)
    }
}
