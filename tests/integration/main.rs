//! Router-level integration tests against a local-directory share.

mod helpers;

mod archive_test;
mod directory_test;
mod health_test;
mod upload_test;
