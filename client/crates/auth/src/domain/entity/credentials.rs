//! Credential Forms
//!
//! What the login and register screens submit.

use kernel::error::app_error::AppResult;
use serde::Serialize;

use crate::domain::value_object::{email::Email, password::Password};

/// Login form
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: Email,
    pub password: Password,
}

impl LoginForm {
    pub fn new(email: &str, password: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            email: Email::new(email)?,
            password: Password::new(password)?,
        })
    }
}

/// Register form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub user_name: String,
    pub email: Email,
    pub password: Password,
}

impl RegisterForm {
    pub fn new(user_name: &str, email: &str, password: impl Into<String>) -> AppResult<Self> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(kernel::AppError::bad_request("User name cannot be empty")
                .with_action("Please choose a user name"));
        }

        Ok(Self {
            user_name: user_name.to_string(),
            email: Email::new(email)?,
            password: Password::new(password)?,
        })
    }
}
