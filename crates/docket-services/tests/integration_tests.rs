//! Integration tests wiring the services to a real in-memory SQLite store
//!
//! These walk the full office workflow: accounts, clients, cases, the
//! many-to-many association, hearings, and documents, all through the
//! service layer only.

use chrono::{Duration, Utc};
use docket_domain::{
    CaseStatus, CaseType, CreateCase, CreateClient, CreateDocument, CreateHearing, DocumentType,
    HearingStatus, Role, UpdateCase, UpdateClient,
};
use docket_services::{
    AuthService, CaseService, ClientService, DocumentService, HearingService, RegisterUser,
    ServiceError,
};
use docket_services::Argon2Hasher;
use docket_store::SqliteStore;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client_draft(first: &str, last: &str, email: Option<&str>) -> CreateClient {
    CreateClient {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.map(str::to_string),
        phone: None,
        address: None,
    }
}

fn case_draft(number: &str, title: &str) -> CreateCase {
    CreateCase {
        case_number: Some(number.to_string()),
        title: title.to_string(),
        case_type: CaseType::Civil,
        description: None,
    }
}

/// The end-to-end scenario: duplicate email rejected, new case starts New,
/// link shows up in both directions, unlink empties the view.
#[test]
fn test_office_workflow_end_to_end() {
    init_tracing();
    let store = SqliteStore::open_in_memory().unwrap();
    let clients = ClientService::new(&store);
    let cases = CaseService::new(&store);

    let ada = clients
        .create_client(client_draft("Ada", "Marsh", Some("a@x.com")))
        .unwrap();
    assert!(ada.id.value() > 0);

    let err = clients
        .create_client(client_draft("Impostor", "Marsh", Some("a@x.com")))
        .unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateKey { .. }));

    let case = cases.create_case(case_draft("C-1", "Marsh v. Quinn")).unwrap();
    assert_eq!(case.status, CaseStatus::New);

    cases.add_client_to_case(case.id, ada.id).unwrap();
    let linked = cases.get_clients_for_case(case.id).unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, ada.id);

    cases.remove_client_from_case(case.id, ada.id).unwrap();
    assert!(cases.get_clients_for_case(case.id).unwrap().is_empty());
}

#[test]
fn test_case_deletion_cascades_but_spares_clients() {
    let store = SqliteStore::open_in_memory().unwrap();
    let clients = ClientService::new(&store);
    let cases = CaseService::new(&store);
    let hearings = HearingService::new(&store);
    let documents = DocumentService::new(&store);

    let ada = clients
        .create_client(client_draft("Ada", "Marsh", None))
        .unwrap();
    let case = cases.create_case(case_draft("C-2", "Estate of Marsh")).unwrap();
    cases.add_client_to_case(case.id, ada.id).unwrap();

    let hearing = hearings
        .create_hearing(CreateHearing {
            case_id: case.id,
            scheduled_at: Utc::now() + Duration::days(7),
            location: None,
            judge: None,
            notes: String::new(),
        })
        .unwrap();
    let document = documents
        .create_document(CreateDocument {
            case_id: case.id,
            title: "Will".to_string(),
            doc_type: DocumentType::Evidence,
            content: "last will and testament".to_string(),
        })
        .unwrap();

    cases.delete_case(case.id).unwrap();

    assert!(matches!(
        hearings.get_hearing(hearing.id),
        Err(ServiceError::NotFound { .. })
    ));
    assert!(matches!(
        documents.get_document(document.id),
        Err(ServiceError::NotFound { .. })
    ));
    // The client survives, just with no cases left.
    assert!(cases.get_cases_for_client(ada.id).unwrap().is_empty());
    assert_eq!(clients.get_client(ada.id).unwrap().id, ada.id);
}

#[test]
fn test_reschedule_through_the_service_surface() {
    let store = SqliteStore::open_in_memory().unwrap();
    let cases = CaseService::new(&store);
    let hearings = HearingService::new(&store);

    let case = cases.create_case(case_draft("C-3", "State v. Quinn")).unwrap();
    let original = Utc::now() + Duration::days(10);
    let hearing = hearings
        .create_hearing(CreateHearing {
            case_id: case.id,
            scheduled_at: original,
            location: Some("Courtroom 4".to_string()),
            judge: Some("Hon. L. Vega".to_string()),
            notes: "initial scheduling".to_string(),
        })
        .unwrap();

    let new_date = original + Duration::days(21);
    let rescheduled = hearings.reschedule_hearing(hearing.id, new_date).unwrap();

    assert_eq!(rescheduled.scheduled_at, new_date);
    assert_eq!(rescheduled.status, HearingStatus::Scheduled);
    assert!(rescheduled.notes.starts_with("initial scheduling\n"));
    assert!(rescheduled.notes.contains("Hearing rescheduled from:"));

    // The audited change is visible through the date-range query too.
    let hits = hearings
        .hearings_by_date_range(new_date - Duration::days(1), new_date + Duration::days(1))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, hearing.id);
}

#[test]
fn test_client_update_keeps_audit_invariant() {
    let store = SqliteStore::open_in_memory().unwrap();
    let clients = ClientService::new(&store);

    let ada = clients
        .create_client(client_draft("Ada", "Marsh", Some("a@x.com")))
        .unwrap();
    let updated = clients
        .update_client(
            ada.id,
            UpdateClient {
                phone: Some(Some("555-0100".to_string())),
                ..UpdateClient::default()
            },
        )
        .unwrap();

    assert_eq!(updated.created_at, ada.created_at);
    assert!(updated.updated_at >= updated.created_at);
    assert!(updated.updated_at >= ada.updated_at);
}

#[test]
fn test_case_number_can_move_after_the_old_holder_releases_it() {
    let store = SqliteStore::open_in_memory().unwrap();
    let cases = CaseService::new(&store);

    let first = cases.create_case(case_draft("C-9", "First")).unwrap();
    let second = cases.create_case(case_draft("C-10", "Second")).unwrap();

    // Taking the other case's number fails while it is held...
    let err = cases
        .update_case(
            second.id,
            UpdateCase {
                case_number: Some(Some("C-9".to_string())),
                ..UpdateCase::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateKey { .. }));

    // ...and succeeds once the holder clears it.
    cases
        .update_case(
            first.id,
            UpdateCase {
                case_number: Some(None),
                ..UpdateCase::default()
            },
        )
        .unwrap();
    let moved = cases
        .update_case(
            second.id,
            UpdateCase {
                case_number: Some(Some("C-9".to_string())),
                ..UpdateCase::default()
            },
        )
        .unwrap();
    assert_eq!(moved.case_number.as_deref(), Some("C-9"));
}

#[test]
fn test_auth_flow_with_sessions() {
    let store = SqliteStore::open_in_memory().unwrap();
    let auth = AuthService::new(&store, Argon2Hasher);

    auth.register(RegisterUser {
        username: "admin".to_string(),
        password: "correct horse battery staple".to_string(),
        email: "admin@example.com".to_string(),
        first_name: "Sam".to_string(),
        last_name: "Okafor".to_string(),
        role: Role::Admin,
    })
    .unwrap();

    assert!(auth.login("admin", "wrong").unwrap().is_none());

    let session = auth
        .login("admin", "correct horse battery staple")
        .unwrap()
        .unwrap();
    assert!(session.has_role(Role::Admin));
    assert!(!session.has_role(Role::Viewer));

    // Sessions are independent values; two logins coexist.
    let second = auth
        .login("admin", "correct horse battery staple")
        .unwrap()
        .unwrap();
    auth.logout(session);
    assert_eq!(second.username(), "admin");
}
