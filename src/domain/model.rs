use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade tag derived from a subject score. Ordering follows the grading
/// ladder, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Z,
    P,
    C,
    D,
    HD,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::Z, Grade::P, Grade::C, Grade::D, Grade::HD];

    /// Half-open grading intervals, first match wins.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=49 => Grade::Z,
            50..=64 => Grade::P,
            65..=74 => Grade::C,
            75..=84 => Grade::D,
            _ => Grade::HD,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Grade::Z => "Z",
            Grade::P => "P",
            Grade::C => "C",
            Grade::D => "D",
            Grade::HD => "HD",
        };
        f.write_str(tag)
    }
}

/// One enrollment outcome. Score and grade are fixed at creation and never
/// recomputed, so historical records survive later grading-table changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// 3-digit identifier, random, not guaranteed globally unique.
    pub id: String,
    /// Score in [25, 100].
    pub score: u32,
    pub grade: Grade,
}

impl Subject {
    /// Enrols with a uniformly random score in [25, 100], standing in for an
    /// external grading event.
    pub fn new() -> Self {
        let score = rand::thread_rng().gen_range(25..=100);
        Self::with_score(score)
    }

    /// Builds a subject from an externally supplied score.
    pub fn with_score(score: u32) -> Self {
        Self {
            id: format!("{:03}", rand::thread_rng().gen_range(1..=999)),
            score,
            grade: Grade::from_score(score),
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subject ID: {}, Score: {}, Grade: {}",
            self.id, self.score, self.grade
        )
    }
}

/// Student aggregate: identity, credential, and up to [`Student::MAX_SUBJECTS`]
/// enrolled subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// 6-digit identifier, random. Expected unique within a store, not
    /// guaranteed; the store treats a colliding id as the same record.
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub subjects: Vec<Subject>,
}

impl Student {
    pub const MAX_SUBJECTS: usize = 4;

    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            id: format!("{:06}", rand::thread_rng().gen_range(1..=999_999)),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            subjects: Vec::new(),
        }
    }

    /// Arithmetic mean of subject scores, `None` when no subjects are enrolled.
    pub fn average_score(&self) -> Option<f64> {
        if self.subjects.is_empty() {
            return None;
        }
        let total: u32 = self.subjects.iter().map(|s| s.score).sum();
        Some(f64::from(total) / self.subjects.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        let cases = [
            (49, Grade::Z),
            (50, Grade::P),
            (64, Grade::P),
            (65, Grade::C),
            (74, Grade::C),
            (75, Grade::D),
            (84, Grade::D),
            (85, Grade::HD),
        ];
        for (score, expected) in cases {
            assert_eq!(Grade::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_subject_score_in_range() {
        for _ in 0..100 {
            let subject = Subject::new();
            assert!((25..=100).contains(&subject.score));
            assert_eq!(subject.grade, Grade::from_score(subject.score));
        }
    }

    #[test]
    fn test_id_widths() {
        let subject = Subject::new();
        assert_eq!(subject.id.len(), 3);
        assert!(subject.id.chars().all(|c| c.is_ascii_digit()));

        let student = Student::new("Ann", "ann@university.com", "Abcde123");
        assert_eq!(student.id.len(), 6);
        assert!(student.id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_average_score() {
        let mut student = Student::new("Ann", "ann@university.com", "Abcde123");
        assert_eq!(student.average_score(), None);

        student.subjects.push(Subject::with_score(40));
        student.subjects.push(Subject::with_score(60));
        assert_eq!(student.average_score(), Some(50.0));
    }
}
