use rollbook::model::{Course, Student};
use rollbook::store::auth::DEFAULT_PASSWORD;
use rollbook::store::{AuthStore, FsBackend, StudentStore};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn draft(first: &str, last: &str, course: Course) -> Student {
    Student::draft(
        first,
        None,
        last,
        "2000-01-01",
        "25",
        "123 Main Street",
        course,
        None,
    )
}

#[test]
fn student_list_round_trips_through_real_files() {
    let dir = TempDir::new().unwrap();

    let mut store = StudentStore::with_backend(FsBackend::new(dir.path()));
    store.load().unwrap();
    store.create(draft("John", "Smith", Course::Bsit)).unwrap();
    store.create(draft("Jane", "Doe", Course::Bsn)).unwrap();
    let original = store.students().to_vec();

    let mut reloaded = StudentStore::with_backend(FsBackend::new(dir.path()));
    reloaded.load().unwrap();
    assert_eq!(reloaded.students(), &original[..]);
}

#[test]
fn stored_payload_uses_legacy_field_names() {
    let dir = TempDir::new().unwrap();

    let mut store = StudentStore::with_backend(FsBackend::new(dir.path()));
    store.create(draft("John", "Smith", Course::Bsit)).unwrap();

    let raw = fs::read_to_string(dir.path().join("students.json")).unwrap();
    assert!(raw.contains("\"_id\":1"));
    assert!(raw.contains("\"firstName\":\"John\""));
    assert!(raw.contains("\"course\":\"BSIT\""));
}

#[test]
fn a_legacy_student_payload_loads() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("students.json"),
        r#"[{"_id":1,"avatar":"https://example.com/a.png","firstName":"Maria","middleName":"Cruz","lastName":"Santos","birthDate":"2004-03-14","age":"21","address":"42 Acacia Avenue, Cebu City","course":"BSCS"}]"#,
    )
    .unwrap();

    let mut store = StudentStore::with_backend(FsBackend::new(dir.path()));
    store.load().unwrap();

    let student = store.get(1).unwrap();
    assert_eq!(student.first_name, "Maria");
    assert_eq!(student.middle_name.as_deref(), Some("Cruz"));
    assert_eq!(student.course, Course::Bscs);
}

#[test]
fn corrupt_students_file_fails_strict_load_but_not_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("students.json"), "{{not json").unwrap();

    let mut store = StudentStore::with_backend(FsBackend::new(dir.path()));
    assert!(store.load().is_err());

    store.load_or_default();
    assert!(store.is_empty());
}

#[test]
fn session_survives_process_boundaries() {
    let dir = TempDir::new().unwrap();

    // "First run": seed the default credential and log in
    let mut auth =
        AuthStore::with_backend(FsBackend::new(dir.path())).with_login_delay(Duration::ZERO);
    auth.ensure_default().unwrap();
    let session = auth.login("admin", DEFAULT_PASSWORD).unwrap();
    assert!(dir.path().join("token.json").exists());

    // "Second run": a fresh store over the same directory restores it
    let mut second =
        AuthStore::with_backend(FsBackend::new(dir.path())).with_login_delay(Duration::ZERO);
    assert!(second.restore().unwrap());
    assert_eq!(second.session().unwrap().token, session.token);

    // Logout removes the token file; restore now fails
    second.logout().unwrap();
    assert!(!dir.path().join("token.json").exists());

    let mut third =
        AuthStore::with_backend(FsBackend::new(dir.path())).with_login_delay(Duration::ZERO);
    assert!(!third.restore().unwrap());
}

#[test]
fn ensure_default_on_disk_is_idempotent() {
    let dir = TempDir::new().unwrap();

    let mut auth =
        AuthStore::with_backend(FsBackend::new(dir.path())).with_login_delay(Duration::ZERO);
    auth.ensure_default().unwrap();
    auth.change_password("Fr3sh!pass", None).unwrap();

    // A second startup must not clobber the changed password
    let other =
        AuthStore::with_backend(FsBackend::new(dir.path())).with_login_delay(Duration::ZERO);
    other.ensure_default().unwrap();
    assert_eq!(
        other.credential().unwrap().unwrap().password,
        "Fr3sh!pass"
    );
}
