use crate::domain::model::Grade;
use crate::domain::ports::StudentStore;
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One student's appearance under a grade tag: identity plus the rendered
/// descriptions of their subjects holding that grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeGroupEntry {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub subjects: Vec<String>,
}

/// Pass/fail classification of one student. `average` is `None` for students
/// with no subjects, which always classify as failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassFailSummary {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub subjects: Vec<String>,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Read-only aggregation over the full stored collection.
pub struct ReportingService<S: StudentStore> {
    store: S,
}

impl<S: StudentStore> ReportingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Groups students by the grades of their subjects. A student holding
    /// subjects of different grades appears under each of them. Subject
    /// descriptions are deduplicated by text within a student+grade bucket,
    /// guarding against identifier/score collisions.
    pub fn group_by_grade(&self) -> Result<BTreeMap<Grade, Vec<GradeGroupEntry>>> {
        let students = self.store.read_all()?;
        let mut groups: BTreeMap<Grade, Vec<GradeGroupEntry>> =
            Grade::ALL.iter().map(|g| (*g, Vec::new())).collect();

        for student in &students {
            for grade in Grade::ALL {
                let mut descriptions: Vec<String> = Vec::new();
                for subject in student.subjects.iter().filter(|s| s.grade == grade) {
                    let text = subject.to_string();
                    if !descriptions.contains(&text) {
                        descriptions.push(text);
                    }
                }
                if descriptions.is_empty() {
                    continue;
                }

                let bucket = groups.entry(grade).or_default();
                match bucket.iter_mut().find(|e| e.student_id == student.id) {
                    Some(existing) => {
                        for text in descriptions {
                            if !existing.subjects.contains(&text) {
                                existing.subjects.push(text);
                            }
                        }
                    }
                    None => bucket.push(GradeGroupEntry {
                        student_id: student.id.clone(),
                        name: student.name.clone(),
                        email: student.email.clone(),
                        subjects: descriptions,
                    }),
                }
            }
        }

        Ok(groups)
    }

    /// Splits the collection by average subject score against the 50-point
    /// threshold. Students with no subjects land in the fail map with no
    /// numeric average.
    pub fn partition_pass_fail(
        &self,
    ) -> Result<(
        HashMap<String, PassFailSummary>,
        HashMap<String, PassFailSummary>,
    )> {
        let students = self.store.read_all()?;
        let mut passed = HashMap::new();
        let mut failed = HashMap::new();

        for student in &students {
            let average = student.average_score();
            let summary = PassFailSummary {
                student_id: student.id.clone(),
                name: student.name.clone(),
                email: student.email.clone(),
                subjects: student.subjects.iter().map(ToString::to_string).collect(),
                average,
            };
            if average.is_some_and(|avg| avg >= 50.0) {
                passed.insert(student.id.clone(), summary);
            } else {
                failed.insert(student.id.clone(), summary);
            }
        }

        Ok((passed, failed))
    }

    /// Lists every distinct student id in encounter order, dropping repeats
    /// defensively rather than trusting the store's uniqueness.
    pub fn list_all_unique(&self) -> Result<Vec<StudentIdentity>> {
        let students = self.store.read_all()?;
        let mut seen = HashSet::new();
        let mut identities = Vec::new();
        for student in students {
            if seen.insert(student.id.clone()) {
                identities.push(StudentIdentity {
                    id: student.id,
                    name: student.name,
                    email: student.email,
                });
            }
        }
        Ok(identities)
    }
}
