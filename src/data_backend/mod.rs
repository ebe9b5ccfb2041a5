use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::data_types::dish_types::{Dish, DishDraft, DishId, Purchase, User, UserId};
use crate::errors::GatewayError;

pub mod dishes_api;
pub mod login_api;
pub mod purchases_api;

#[cfg(test)]
pub(crate) mod test_server;

#[async_trait]
pub trait DishesGateway: Send + Sync {
    async fn fetch_by_id(&self, id: DishId) -> Result<Dish, GatewayError>;
    async fn fetch_by_category(&self, label: &str) -> Result<Vec<Dish>, GatewayError>;
    async fn fetch_all(&self) -> Result<Vec<Dish>, GatewayError>;
    async fn remove(&self, dish: &Dish) -> Result<(), GatewayError>;
    async fn create(&self, draft: &DishDraft) -> Result<Dish, GatewayError>;
    async fn update(&self, id: DishId, draft: &DishDraft) -> Result<Dish, GatewayError>;
    /// Replaces the dish image; the backend sets `image` on the dish.
    async fn upload_image(
        &self,
        id: DishId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GatewayError>;
    async fn delete_image(&self, id: DishId) -> Result<(), GatewayError>;
}

#[async_trait]
pub trait PurchasesGateway: Send + Sync {
    async fn create(&self, dish_id: DishId, user_id: UserId) -> Result<Purchase, GatewayError>;
}

/// Read side of the externally owned session.
pub trait SessionGateway: Send + Sync {
    fn is_logged_in(&self) -> bool;
    fn is_admin(&self) -> bool;
    fn current_user(&self) -> Option<User>;
}

/// Shared HTTP client; gateways clone it so they see the same session cookie.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }
}

pub(crate) fn check_status(resp: Response) -> Result<Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(status_error(status))
    }
}

fn status_error(status: StatusCode) -> GatewayError {
    GatewayError::Status(status.as_u16())
}
