use std::time::Instant;

use async_trait::async_trait;

use super::{check_status, ApiClient, PurchasesGateway};
use crate::constants::PURCHASES_API;
use crate::data_types::dish_types::{DishId, Purchase, PurchaseRequest, UserId};
use crate::errors::GatewayError;

pub struct HttpPurchasesGateway {
    api: ApiClient,
}

impl HttpPurchasesGateway {
    pub fn new(api: ApiClient) -> Self {
        HttpPurchasesGateway { api }
    }
}

#[async_trait]
impl PurchasesGateway for HttpPurchasesGateway {
    async fn create(&self, dish_id: DishId, user_id: UserId) -> Result<Purchase, GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .post(self.api.url(&format!("{}/", PURCHASES_API)))
            .json(&PurchaseRequest { dish_id, user_id })
            .send()
            .await?;
        let purchase = check_status(resp)?.json::<Purchase>().await?;

        log::debug!("POST purchase: {:.2?}", now.elapsed());
        log::info!("User {} purchased dish {}", user_id, dish_id);
        Ok(purchase)
    }
}
