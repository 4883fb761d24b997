pub mod enrollment;
pub mod reporting;

pub use enrollment::EnrollmentService;
pub use reporting::{GradeGroupEntry, PassFailSummary, ReportingService, StudentIdentity};
