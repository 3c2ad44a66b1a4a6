//! Application Configuration
//!
//! Endpoint paths of the admin order API.

use crate::domain::value_object::order_id::OrderId;

#[derive(Debug, Clone)]
pub struct OrdersConfig {
    pub list_path: String,
    /// `{details_path}/{id}`
    pub details_path: String,
    /// `{update_path}/{id}`
    pub update_path: String,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            list_path: "/api/admin/orders/get".to_string(),
            details_path: "/api/admin/orders/details".to_string(),
            update_path: "/api/admin/orders/update".to_string(),
        }
    }
}

impl OrdersConfig {
    pub fn details_path_for(&self, id: &OrderId) -> String {
        format!("{}/{}", self.details_path.trim_end_matches('/'), id)
    }

    pub fn update_path_for(&self, id: &OrderId) -> String {
        format!("{}/{}", self.update_path.trim_end_matches('/'), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let config = OrdersConfig::default();
        let id = OrderId::new("65f0c1").unwrap();
        assert_eq!(config.details_path_for(&id), "/api/admin/orders/details/65f0c1");
        assert_eq!(config.update_path_for(&id), "/api/admin/orders/update/65f0c1");
    }
}
