use std::sync::Arc;

use pulse_application::SessionUseCase;
use pulse_core::session::SessionRepository;
use pulse_infrastructure::{FileSessionRepository, StubAuthenticator};
use tempfile::TempDir;

fn usecase_at(temp_dir: &TempDir) -> SessionUseCase {
    let repository = FileSessionRepository::with_path(temp_dir.path().join("session.json"));
    SessionUseCase::new(Arc::new(StubAuthenticator::instant()), Arc::new(repository))
}

#[tokio::test]
async fn test_sign_up_derives_normalized_username() {
    let temp_dir = TempDir::new().unwrap();
    let usecase = usecase_at(&temp_dir);

    let session = usecase
        .sign_up("Ada Lovelace", "ada@example.com", "secret")
        .await
        .expect("sign up should succeed");

    assert_eq!(session.username, "ada_lovelace");
    assert_eq!(session.name, "Ada Lovelace");
}

#[tokio::test]
async fn test_session_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let first = usecase_at(&temp_dir);
    let signed_in = first
        .sign_in("grace@example.com", "secret")
        .await
        .expect("sign in should succeed");

    // A fresh use case over the same directory models a process restart.
    let second = usecase_at(&temp_dir);
    let restored = second.rehydrate().await.expect("rehydrate should not fail");
    assert_eq!(restored, Some(signed_in));
    assert!(second.is_authenticated().await);
}

#[tokio::test]
async fn test_sign_out_then_restart_yields_no_session() {
    let temp_dir = TempDir::new().unwrap();

    let first = usecase_at(&temp_dir);
    first
        .sign_up("Ada Lovelace", "ada@example.com", "secret")
        .await
        .unwrap();
    first.sign_out().await.expect("sign out should succeed");

    let second = usecase_at(&temp_dir);
    assert_eq!(second.rehydrate().await.unwrap(), None);
    assert!(!second.is_authenticated().await);
}

#[tokio::test]
async fn test_sign_out_removes_the_blob_sign_up_wrote() {
    // Regression: write and delete must target the same storage location.
    let temp_dir = TempDir::new().unwrap();
    let usecase = usecase_at(&temp_dir);

    usecase
        .sign_up("Ada Lovelace", "ada@example.com", "secret")
        .await
        .unwrap();
    let blob = temp_dir.path().join("session.json");
    assert!(blob.exists(), "sign-up should persist the session blob");

    usecase.sign_out().await.unwrap();
    assert!(!blob.exists(), "sign-out should remove the same blob");
}

#[tokio::test]
async fn test_rehydrating_corrupted_blob_yields_no_session() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("session.json"), "{\"id\": 42,").unwrap();

    let usecase = usecase_at(&temp_dir);
    let restored = usecase
        .rehydrate()
        .await
        .expect("corrupt blob must not surface as an error");
    assert_eq!(restored, None);
    assert!(!usecase.is_authenticated().await);
}

#[tokio::test]
async fn test_failed_sign_in_keeps_active_session() {
    let temp_dir = TempDir::new().unwrap();
    let usecase = usecase_at(&temp_dir);

    let original = usecase
        .sign_up("Ada Lovelace", "ada@example.com", "secret")
        .await
        .unwrap();

    // The stub rejects implausible emails before anything is persisted.
    let err = usecase.sign_in("not-an-email", "secret").await.unwrap_err();
    assert!(err.is_auth());
    assert_eq!(usecase.current_session().await, Some(original.clone()));

    // The persisted copy is untouched too.
    let repository = FileSessionRepository::with_path(temp_dir.path().join("session.json"));
    assert_eq!(repository.load().await.unwrap(), Some(original));
}
