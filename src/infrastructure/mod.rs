pub mod credentials;
pub mod notifications;
pub mod storage;
