//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the admin client:
//! - API configuration loaded from the environment
//! - HTTP client adapter that classifies transport vs application failures
//! - Key-value session storage (in-memory and file backed)
//! - UI collaborator seams (notifications, navigation)

pub mod config;
pub mod http;
pub mod storage;
pub mod ui;
