use eldview::core::certification::{
    CertificationFlow, CertificationState, CertifyBackend,
};
use eldview::errors::{AppError, AppResult};
use eldview::models::daily_log::DailyLog;

mod common;
use common::{eld, setup_log_file, write_fixture};

fn uncertified_log() -> DailyLog {
    DailyLog {
        date: "2025-03-10".to_string(),
        driver: "J. Doe".to_string(),
        vehicle: "TRK-42".to_string(),
        entries: vec![],
        grid_points: vec![],
        certified: false,
        certified_at: None,
        signature: None,
        notes: None,
    }
}

/// Backend double that records whether it was invoked and can be told
/// to reject the submission.
struct RecordingBackend {
    calls: usize,
    fail: bool,
}

impl RecordingBackend {
    fn new(fail: bool) -> Self {
        Self { calls: 0, fail }
    }
}

impl CertifyBackend for RecordingBackend {
    fn certify(
        &mut self,
        date: &str,
        _signature: Option<&str>,
        _notes: Option<&str>,
    ) -> AppResult<()> {
        self.calls += 1;
        if self.fail {
            Err(AppError::Certification(format!("backend rejected {date}")))
        } else {
            Ok(())
        }
    }
}

#[test]
fn test_unacknowledged_begin_is_a_noop() {
    let mut flow = CertificationFlow::for_log(&uncertified_log());

    assert!(!flow.begin(false));
    assert_eq!(flow.state(), CertificationState::Uncertified);

    // submit outside Certifying never touches the backend
    let mut backend = RecordingBackend::new(false);
    flow.submit(&mut backend, None, None);
    assert_eq!(backend.calls, 0);
}

#[test]
fn test_successful_certification_is_terminal() {
    let mut flow = CertificationFlow::for_log(&uncertified_log());

    assert!(flow.begin(true));
    assert_eq!(flow.state(), CertificationState::Certifying);

    let mut backend = RecordingBackend::new(false);
    let state = flow.submit(&mut backend, Some("J. Doe"), None);

    assert_eq!(state, CertificationState::Certified);
    assert_eq!(backend.calls, 1);

    // terminal: the form never comes back and begin() is a no-op
    assert!(!flow.form_available());
    assert!(!flow.begin(true));
    assert_eq!(flow.state(), CertificationState::Certified);
}

#[test]
fn test_rejected_certification_reverts() {
    let mut flow = CertificationFlow::for_log(&uncertified_log());

    assert!(flow.begin(true));

    let mut backend = RecordingBackend::new(true);
    let state = flow.submit(&mut backend, None, None);

    assert_eq!(state, CertificationState::Uncertified);
    assert_eq!(backend.calls, 1);

    // the driver may retry after a rejection
    assert!(flow.form_available());
    assert!(flow.begin(true));
}

#[test]
fn test_already_certified_log_skips_the_form() {
    let mut log = uncertified_log();
    log.certified = true;

    let mut flow = CertificationFlow::for_log(&log);
    assert_eq!(flow.state(), CertificationState::Certified);
    assert!(!flow.form_available());
    assert!(!flow.begin(true));
}

#[test]
fn test_cli_certify_requires_acknowledge() {
    let log_path = setup_log_file("certify_requires_ack");
    write_fixture(&log_path);

    eld()
        .args(["--file", &log_path, "certify", "2025-03-10"])
        .assert()
        .success();

    // document untouched
    let content = std::fs::read_to_string(&log_path).expect("read fixture");
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["logs"][0]["certified"], serde_json::json!(false));
}

#[test]
fn test_cli_certify_stamps_the_document() {
    let log_path = setup_log_file("certify_stamps");
    write_fixture(&log_path);

    eld()
        .args([
            "--file",
            &log_path,
            "certify",
            "2025-03-10",
            "--acknowledge",
            "--signature",
            "J. Doe",
            "--notes",
            "reviewed",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&log_path).expect("read fixture");
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["logs"][0]["certified"], serde_json::json!(true));
    assert_eq!(doc["logs"][0]["signature"], serde_json::json!("J. Doe"));
    assert_eq!(doc["logs"][0]["notes"], serde_json::json!("reviewed"));
}

#[test]
fn test_cli_certify_already_certified_is_a_noop() {
    let log_path = setup_log_file("certify_already");
    write_fixture(&log_path);

    // 2025-03-11 ships certified in the fixture
    eld()
        .args([
            "--file",
            &log_path,
            "certify",
            "2025-03-11",
            "--acknowledge",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&log_path).expect("read fixture");
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    // original certification timestamp preserved
    assert_eq!(
        doc["logs"][1]["certified_at"],
        serde_json::json!("2025-03-12T08:00:00-05:00")
    );
}
