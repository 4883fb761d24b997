use crate::domain::model::{Student, Subject};
use crate::domain::ports::StudentStore;
use crate::utils::error::{RecordsError, Result};

/// Domain operations that mutate a student record. Every successful mutation
/// is followed by a full upsert into the store.
pub struct EnrollmentService<S: StudentStore> {
    store: S,
}

impl<S: StudentStore> EnrollmentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new student with an empty subject list. Email format is
    /// the caller's concern; uniqueness is checked here.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Student> {
        if self.store.email_exists(email)? {
            return Err(RecordsError::DuplicateEmail(email.to_string()));
        }
        let student = Student::new(name, email, password);
        self.store.upsert(&student)?;
        tracing::info!(student_id = %student.id, "registered new student");
        Ok(student)
    }

    /// Looks up a student by email and checks the password. The returned
    /// record is the caller's identity for its current interaction only.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Student> {
        let students = self.store.read_all()?;
        let student = students
            .into_iter()
            .find(|s| s.email == email)
            .ok_or(RecordsError::NotFound)?;
        if student.password != password {
            return Err(RecordsError::InvalidCredential);
        }
        Ok(student)
    }

    /// Enrols the student in a new subject, up to the 4-subject limit. The
    /// student is left unchanged when the limit is hit or persistence fails.
    pub fn enroll_subject(&self, student: &mut Student) -> Result<Subject> {
        if student.subjects.len() >= Student::MAX_SUBJECTS {
            return Err(RecordsError::EnrollmentLimitReached);
        }
        let subject = Subject::new();
        student.subjects.push(subject.clone());
        if let Err(e) = self.store.upsert(student) {
            student.subjects.pop();
            return Err(e);
        }
        tracing::debug!(student_id = %student.id, subject_id = %subject.id, "enrolled subject");
        Ok(subject)
    }

    /// Drops the first subject with the given id. Persists only when a
    /// removal actually happened.
    pub fn drop_subject(&self, student: &mut Student, subject_id: &str) -> Result<bool> {
        let before = student.subjects.len();
        student.subjects.retain(|s| s.id != subject_id);
        if student.subjects.len() == before {
            return Ok(false);
        }
        self.store.upsert(student)?;
        Ok(true)
    }

    /// Overwrites the password and persists. Format validation happens before
    /// this call.
    pub fn change_password(&self, student: &mut Student, new_password: &str) -> Result<()> {
        student.password = new_password.to_string();
        self.store.upsert(student)
    }

    pub fn remove_student(&self, student_id: &str) -> Result<bool> {
        self.store.delete(student_id)
    }
}
