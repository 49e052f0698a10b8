mod customizer_tests;
mod session_tests;

use crate::core::services::{RemoService, ServiceSettings};
use crate::infrastructure::notifications::in_memory::InMemoryNotifier;
use crate::infrastructure::storage::in_memory::InMemoryStore;

pub type TestService = RemoService<InMemoryStore, InMemoryNotifier>;

pub const TEST_NAME: &str = "Jane Doe";
pub const TEST_EMAIL: &str = "jane@example.com";
pub const TEST_PASSWORD: &str = "secret1";

pub fn create_test_service() -> (TestService, InMemoryStore, InMemoryNotifier) {
    let storage = InMemoryStore::new();
    let notifier = InMemoryNotifier::new();
    let service = RemoService::new(storage.clone(), notifier.clone(), ServiceSettings::default());
    (service, storage, notifier)
}

/// A service with Jane registered and logged in.
pub async fn signed_in_service() -> (TestService, InMemoryStore, InMemoryNotifier) {
    let (service, storage, notifier) = create_test_service();
    service
        .session()
        .signup(TEST_NAME, TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap();
    service.session().login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    (service, storage, notifier)
}
