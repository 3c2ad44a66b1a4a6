//! Presentation Layer
//!
//! View bindings: what the admin screens call and what they show.

pub mod forms;
pub mod header;
pub mod server_logout;
pub mod toast;

pub use forms::AuthForms;
pub use header::AdminHeader;
pub use server_logout::ServerLogout;
pub use toast::settled_toast;
