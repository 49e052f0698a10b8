use crate::core::errors::RemoError;
use crate::core::models::account::{Account, SessionUser};
use crate::core::models::notification::NotificationVariant;
use crate::core::services::{RemoService, ServiceSettings};
use crate::infrastructure::credentials::{AdminCredentials, CredentialPolicy};
use crate::infrastructure::notifications::Notifier;
use crate::infrastructure::storage::storage_keys::{SESSION_KEY, USERS_KEY};
use crate::infrastructure::storage::{KeyValueStore, load_json, load_list};
use crate::tests::{TEST_EMAIL, TEST_NAME, TEST_PASSWORD, create_test_service, signed_in_service};

#[tokio::test]
async fn test_signup_then_login_exposes_account_without_password() {
    let (service, storage, _) = create_test_service();

    let created = service
        .session()
        .signup(TEST_NAME, TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap();
    assert!(service.session().current_user().await.is_none());

    let user = service.session().login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, TEST_NAME);
    assert_eq!(user.email, TEST_EMAIL);
    assert!(!user.has_admin_access());

    let raw = storage.get(SESSION_KEY).await.unwrap().unwrap();
    assert!(!raw.contains("password"));
    assert!(!raw.contains(TEST_PASSWORD));
    let persisted: Option<SessionUser> = load_json(&storage, SESSION_KEY).await.unwrap();
    assert_eq!(persisted, Some(user));
}

#[tokio::test]
async fn test_signup_stores_plaintext_account_by_default() {
    let (service, storage, _) = create_test_service();
    service
        .session()
        .signup(TEST_NAME, TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap();

    let accounts: Vec<Account> = load_list(&storage, USERS_KEY).await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].password, TEST_PASSWORD);
    assert_eq!(accounts[0].is_admin, None);
}

#[tokio::test]
async fn test_duplicate_signup_leaves_registry_untouched() {
    let (service, storage, notifier) = create_test_service();
    service
        .session()
        .signup(TEST_NAME, TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap();
    let before = storage.get(USERS_KEY).await.unwrap();
    notifier.drain().await.unwrap();

    let result = service
        .session()
        .signup("Someone Else", TEST_EMAIL, "another1")
        .await;
    assert!(matches!(result, Err(RemoError::EmailAlreadyRegistered(ref e)) if e == TEST_EMAIL));
    assert_eq!(storage.get(USERS_KEY).await.unwrap(), before);

    let notes = notifier.drain().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Signup Failed");
    assert_eq!(notes[0].variant, NotificationVariant::Destructive);
}

#[tokio::test]
async fn test_wrong_password_keeps_existing_session() {
    let (service, _, _) = signed_in_service().await;
    let before = service.session().current_user().await;

    let result = service.session().login(TEST_EMAIL, "wrongpass").await;
    assert!(matches!(result, Err(RemoError::InvalidCredentials)));
    assert_eq!(service.session().current_user().await, before);
}

#[tokio::test]
async fn test_login_rejects_malformed_form_before_lookup() {
    let (service, _, notifier) = create_test_service();

    let result = service.session().login("not-an-email", "123").await;
    let err = result.unwrap_err();
    assert!(matches!(err, RemoError::InvalidForm(_)));
    assert_eq!(err.field_errors().len(), 2);
    assert!(notifier.drain().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_login_only_accepts_configured_pair() {
    let (service, storage, _) = create_test_service();

    for (username, password) in [
        ("admin", "admin1234"),
        ("Admin", "admin123"),
        ("root", "admin123"),
        ("", "admin123"),
        ("admin", ""),
    ] {
        assert!(service.session().admin_login(username, password).await.is_err());
        assert!(service.session().current_user().await.is_none());
    }
    assert_eq!(storage.get(SESSION_KEY).await.unwrap(), None);

    let admin = service.session().admin_login("admin", "admin123").await.unwrap();
    assert_eq!(admin.id, "admin");
    assert_eq!(admin.name, "Administrator");
    assert_eq!(admin.email, "admin@remo.com");
    assert!(service.session().is_admin().await);
    assert!(service.session().require_admin().await.is_ok());
}

#[tokio::test]
async fn test_admin_pair_comes_from_settings() {
    let storage = crate::InMemoryStore::new();
    let notifier = crate::InMemoryNotifier::new();
    let settings = ServiceSettings {
        admin: AdminCredentials::new("ops", "hunter22"),
        ..ServiceSettings::default()
    };
    let service = RemoService::new(storage, notifier, settings);

    assert!(matches!(
        service.session().admin_login("admin", "admin123").await,
        Err(RemoError::InvalidAdminCredentials)
    ));
    assert!(service.session().admin_login("ops", "hunter22").await.is_ok());
}

#[tokio::test]
async fn test_customer_is_not_admin() {
    let (service, _, _) = signed_in_service().await;
    assert!(!service.session().is_admin().await);
    assert!(matches!(
        service.session().require_admin().await,
        Err(RemoError::AdminAccessRequired)
    ));
}

#[tokio::test]
async fn test_logout_clears_session_and_denies_cart() {
    let (service, storage, _) = signed_in_service().await;
    assert!(service.cart().await.is_ok());

    service.logout().await.unwrap();
    assert!(service.session().current_user().await.is_none());
    assert_eq!(storage.get(SESSION_KEY).await.unwrap(), None);
    assert!(matches!(service.cart().await, Err(RemoError::NotAuthenticated)));
    assert!(matches!(service.customizer().await, Err(RemoError::NotAuthenticated)));
    assert!(matches!(service.checkout().await, Err(RemoError::NotAuthenticated)));

    // Logging out twice is fine.
    service.logout().await.unwrap();
    assert!(service.session().current_user().await.is_none());
}

#[tokio::test]
async fn test_session_survives_restart_on_same_store() {
    let (service, storage, notifier) = signed_in_service().await;
    let user = service.current_user().await;
    drop(service);

    let restarted = RemoService::start(storage, notifier, ServiceSettings::default())
        .await
        .unwrap();
    assert_eq!(restarted.current_user().await, user);
    assert!(restarted.cart().await.is_ok());
}

#[tokio::test]
async fn test_corrupted_session_is_reported() {
    let (_, storage, notifier) = create_test_service();
    storage.set(SESSION_KEY, "{not json".to_string()).await.unwrap();

    let result = RemoService::start(storage, notifier, ServiceSettings::default()).await;
    assert!(matches!(result, Err(RemoError::CorruptedState(ref key, _)) if key == SESSION_KEY));
}

#[tokio::test]
async fn test_bcrypt_policy_hashes_and_still_logs_in() {
    let storage = crate::InMemoryStore::new();
    let notifier = crate::InMemoryNotifier::new();
    let settings = ServiceSettings {
        credential_policy: CredentialPolicy::Bcrypt { cost: 4 },
        ..ServiceSettings::default()
    };
    let service = RemoService::new(storage.clone(), notifier, settings);

    service
        .session()
        .signup(TEST_NAME, TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap();
    let accounts: Vec<Account> = load_list(&storage, USERS_KEY).await.unwrap();
    assert_ne!(accounts[0].password, TEST_PASSWORD);

    assert!(service.session().login(TEST_EMAIL, TEST_PASSWORD).await.is_ok());
    assert!(service.session().login(TEST_EMAIL, "secret2").await.is_err());
}

#[tokio::test]
async fn test_session_notifications_follow_each_outcome() {
    let (service, _, notifier) = create_test_service();
    service
        .session()
        .signup(TEST_NAME, TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap();
    let _ = service.session().login(TEST_EMAIL, "badpass1").await;
    service.session().login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    service.logout().await.unwrap();

    let titles: Vec<String> = notifier
        .drain()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Account Created!", "Login Failed", "Welcome back!", "Logged Out"]
    );
    assert!(notifier.drain().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_email_check_is_unanchored() {
    let (service, _, _) = create_test_service();

    let created = service
        .session()
        .signup(TEST_NAME, "jane doe@remo.com", TEST_PASSWORD)
        .await
        .unwrap();
    assert_eq!(created.email, "jane doe@remo.com");

    let err = service
        .session()
        .signup(TEST_NAME, "jane @remo.com", TEST_PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(err.field_errors()[0].field, "email");
}
