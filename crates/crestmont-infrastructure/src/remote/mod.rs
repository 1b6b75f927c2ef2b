//! Thin clients for the hosted backend service (auth, documents, storage).

pub mod auth;
pub mod client;
pub mod documents;
pub mod storage;
