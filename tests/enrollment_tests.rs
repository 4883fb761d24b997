use tempfile::TempDir;
use uni_records::{EnrollmentService, FileStore, RecordsError, Student};

fn service_in(dir: &TempDir) -> EnrollmentService<FileStore> {
    EnrollmentService::new(FileStore::new(dir.path().join("students.json")))
}

#[test]
fn test_register_and_authenticate_scenario() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let ann = service.register("Ann", "ann@x.com", "Abcde123").unwrap();
    assert!(ann.subjects.is_empty());

    let err = service.register("Ann", "ann@x.com", "Abcde123").unwrap_err();
    assert!(matches!(err, RecordsError::DuplicateEmail(_)));

    let err = service.authenticate("ann@x.com", "wrong").unwrap_err();
    assert!(matches!(err, RecordsError::InvalidCredential));

    let err = service.authenticate("nobody@x.com", "Abcde123").unwrap_err();
    assert!(matches!(err, RecordsError::NotFound));

    let authed = service.authenticate("ann@x.com", "Abcde123").unwrap();
    assert_eq!(authed, ann);
}

#[test]
fn test_enroll_limit() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let mut ann = service.register("Ann", "ann@x.com", "Abcde123").unwrap();
    for _ in 0..Student::MAX_SUBJECTS {
        service.enroll_subject(&mut ann).unwrap();
    }
    assert_eq!(ann.subjects.len(), 4);

    let before = ann.clone();
    let err = service.enroll_subject(&mut ann).unwrap_err();
    assert!(matches!(err, RecordsError::EnrollmentLimitReached));
    assert_eq!(ann, before);
}

#[test]
fn test_enroll_persists_the_student() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("students.json"));
    let service = EnrollmentService::new(store);

    let mut ann = service.register("Ann", "ann@x.com", "Abcde123").unwrap();
    let subject = service.enroll_subject(&mut ann).unwrap();
    assert_eq!(ann.subjects.last(), Some(&subject));

    let stored = service.authenticate("ann@x.com", "Abcde123").unwrap();
    assert_eq!(stored.subjects, ann.subjects);
}

#[test]
fn test_drop_subject() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let mut ann = service.register("Ann", "ann@x.com", "Abcde123").unwrap();
    let subject = service.enroll_subject(&mut ann).unwrap();

    assert!(!service.drop_subject(&mut ann, "nope").unwrap());
    assert_eq!(ann.subjects.len(), 1);

    assert!(service.drop_subject(&mut ann, &subject.id).unwrap());
    assert!(ann.subjects.is_empty());

    let stored = service.authenticate("ann@x.com", "Abcde123").unwrap();
    assert!(stored.subjects.is_empty());
}

#[test]
fn test_change_password() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let mut ann = service.register("Ann", "ann@x.com", "Abcde123").unwrap();
    service.change_password(&mut ann, "Newpass456").unwrap();

    let err = service.authenticate("ann@x.com", "Abcde123").unwrap_err();
    assert!(matches!(err, RecordsError::InvalidCredential));
    let authed = service.authenticate("ann@x.com", "Newpass456").unwrap();
    assert_eq!(authed.password, "Newpass456");
}

#[test]
fn test_remove_student() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("students.json"));
    let service = EnrollmentService::new(store);

    let ann = service.register("Ann", "ann@x.com", "Abcde123").unwrap();
    assert!(!service.remove_student("000000").unwrap());
    assert!(service.remove_student(&ann.id).unwrap());
    assert!(matches!(
        service.authenticate("ann@x.com", "Abcde123").unwrap_err(),
        RecordsError::NotFound
    ));
}
