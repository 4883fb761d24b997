pub mod adapters;
pub mod domain;
pub mod utils;

pub use adapters::store::FileStore;
pub use domain::model::{Grade, Student, Subject};
pub use domain::ports::StudentStore;
pub use domain::services::{
    EnrollmentService, GradeGroupEntry, PassFailSummary, ReportingService, StudentIdentity,
};
pub use utils::error::{RecordsError, Result};
