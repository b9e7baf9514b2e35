//! Remote forge client for release lookup and update.
//!
//! Provides token-based authentication and the two release operations this
//! step needs through a common trait.

/// Configuration and authentication for the forge connection.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Request and response records for release operations.
pub mod request;

/// Common trait for forge abstraction.
pub mod traits;
