//! HTTP Gateway Implementation
//!
//! [`OrderGateway`] over the platform HTTP client. Every request carries
//! the session cookie and, when an [`AuthStore`] is attached and holds a
//! token, the bearer token as well.

use std::sync::Arc;

use auth::application::store::AuthStore;
use auth::domain::phase::Rejection;
use platform::http::{ApiRequest, HttpClient};
use serde::Serialize;

use crate::application::config::OrdersConfig;
use crate::domain::gateway::OrderGateway;
use crate::domain::payload::{OrderDetailsPayload, OrderListPayload, UpdateStatusPayload};
use crate::domain::value_object::{order_id::OrderId, order_status::OrderStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStatusBody<'a> {
    order_status: &'a OrderStatus,
}

/// HTTP-backed order gateway
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: HttpClient,
    config: Arc<OrdersConfig>,
    auth: Option<AuthStore>,
}

impl HttpOrderGateway {
    pub fn new(client: HttpClient, config: Arc<OrdersConfig>) -> Self {
        Self {
            client,
            config,
            auth: None,
        }
    }

    /// Send the signed-in admin's bearer token with each request
    pub fn with_auth(mut self, store: AuthStore) -> Self {
        self.auth = Some(store);
        self
    }

    fn authorize(&self, request: ApiRequest) -> ApiRequest {
        let request = request.with_credentials();
        match self.auth.as_ref().and_then(|store| store.snapshot().token) {
            Some(token) => request.bearer(token.as_str()),
            None => request,
        }
    }
}

impl OrderGateway for HttpOrderGateway {
    async fn list_orders(&self) -> Result<OrderListPayload, Rejection> {
        let request = self.authorize(ApiRequest::get(&self.config.list_path));
        Ok(self.client.send(request).await?)
    }

    async fn order_details(&self, id: &OrderId) -> Result<OrderDetailsPayload, Rejection> {
        let request = self.authorize(ApiRequest::get(self.config.details_path_for(id)));
        Ok(self.client.send(request).await?)
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: &OrderStatus,
    ) -> Result<UpdateStatusPayload, Rejection> {
        let request = self.authorize(ApiRequest::put(self.config.update_path_for(id)).json(
            &UpdateStatusBody {
                order_status: status,
            },
        )?);
        Ok(self.client.send(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::config::ApiConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> HttpOrderGateway {
        let config = ApiConfig::default().with_base_url(&server.uri()).unwrap();
        HttpOrderGateway::new(
            HttpClient::new(config).unwrap(),
            Arc::new(OrdersConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_list_orders() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/orders/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [
                    {"_id": "o1", "orderStatus": "pending", "totalAmount": 10, "orderDate": "2024-03-01T10:00:00Z"},
                    {"_id": "o2", "orderStatus": "delivered", "totalAmount": 20, "orderDate": "2024-03-02T10:00:00Z"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payload = gateway_for(&server).list_orders().await.unwrap();
        assert_eq!(payload.data.data.len(), 2);
        assert_eq!(payload.data.data[1].order_status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn test_order_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/orders/details/o1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"_id": "o1", "orderStatus": "inProcess", "orderDate": "2024-03-01T10:00:00Z"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let id = OrderId::new("o1").unwrap();
        let payload = gateway_for(&server).order_details(&id).await.unwrap();
        assert_eq!(
            payload.data.data.map(|o| o.order_status),
            Some(OrderStatus::InProcess)
        );
    }

    #[tokio::test]
    async fn test_update_status_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/orders/update/o1"))
            .and(body_json(json!({"orderStatus": "inShipping"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Order status is updated successfully!"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let id = OrderId::new("o1").unwrap();
        let payload = gateway_for(&server)
            .update_status(&id, &OrderStatus::InShipping)
            .await
            .unwrap();
        assert_eq!(
            payload.message.as_deref(),
            Some("Order status is updated successfully!")
        );
    }

    #[tokio::test]
    async fn test_bearer_from_auth_store() {
        use auth::domain::entity::auth_state::AuthEvent;
        use auth::domain::value_object::session_token::SessionToken;
        use wiremock::matchers::header;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/orders/get"))
            .and(header("authorization", "Bearer t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let store = AuthStore::new();
        store.dispatch(&AuthEvent::RestoreToken(SessionToken::new("t1").unwrap()));
        let gateway = gateway_for(&server).with_auth(store);

        assert!(gateway.list_orders().await.unwrap().data.data.is_empty());
    }

    #[tokio::test]
    async fn test_missing_order_is_application_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/orders/details/nope"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"success": false, "message": "Order not found!"})),
            )
            .mount(&server)
            .await;

        let id = OrderId::new("nope").unwrap();
        let rejection = gateway_for(&server).order_details(&id).await.unwrap_err();
        assert!(matches!(rejection, Rejection::Application { status: 404, .. }));
        assert_eq!(rejection.user_message(), "Order not found!");
    }
}
