use std::time::Instant;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::{check_status, ApiClient, DishesGateway};
use crate::constants::DISHES_API;
use crate::data_types::dish_types::{Dish, DishDraft, DishId};
use crate::errors::GatewayError;

pub struct HttpDishesGateway {
    api: ApiClient,
}

impl HttpDishesGateway {
    pub fn new(api: ApiClient) -> Self {
        HttpDishesGateway { api }
    }
}

fn dish_path(id: DishId) -> String {
    format!("{}/{}", DISHES_API, id)
}

fn image_path(id: DishId) -> String {
    format!("{}/{}/image", DISHES_API, id)
}

fn collection_path() -> String {
    format!("{}/", DISHES_API)
}

fn category_path() -> String {
    format!("{}/category", DISHES_API)
}

fn image_mime(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "gif" => "image/gif",
        _ => "image/jpeg",
    }
}

#[async_trait]
impl DishesGateway for HttpDishesGateway {
    async fn fetch_by_id(&self, id: DishId) -> Result<Dish, GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .get(self.api.url(&dish_path(id)))
            .send()
            .await?;
        let dish = check_status(resp)?.json::<Dish>().await?;

        log::debug!("GET dish {}: {:.2?}", id, now.elapsed());
        Ok(dish)
    }

    async fn fetch_by_category(&self, label: &str) -> Result<Vec<Dish>, GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .get(self.api.url(&category_path()))
            .query(&[("category", label)])
            .send()
            .await?;
        let dishes = check_status(resp)?.json::<Vec<Dish>>().await?;

        log::debug!("GET category {}: {:.2?}", label, now.elapsed());
        Ok(dishes)
    }

    async fn fetch_all(&self) -> Result<Vec<Dish>, GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .get(self.api.url(&collection_path()))
            .send()
            .await?;
        let dishes = check_status(resp)?.json::<Vec<Dish>>().await?;

        log::debug!("GET all dishes: {:.2?}", now.elapsed());
        Ok(dishes)
    }

    async fn remove(&self, dish: &Dish) -> Result<(), GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .delete(self.api.url(&dish_path(dish.id)))
            .send()
            .await?;
        check_status(resp)?;

        log::debug!("DELETE dish {}: {:.2?}", dish.id, now.elapsed());
        log::info!("Removed dish {} ({})", dish.id, dish.name);
        Ok(())
    }

    async fn create(&self, draft: &DishDraft) -> Result<Dish, GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .post(self.api.url(&collection_path()))
            .json(draft)
            .send()
            .await?;
        let dish = check_status(resp)?.json::<Dish>().await?;

        log::debug!("POST dish: {:.2?}", now.elapsed());
        Ok(dish)
    }

    async fn update(&self, id: DishId, draft: &DishDraft) -> Result<Dish, GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .put(self.api.url(&dish_path(id)))
            .json(draft)
            .send()
            .await?;
        let dish = check_status(resp)?.json::<Dish>().await?;

        log::debug!("PUT dish {}: {:.2?}", id, now.elapsed());
        Ok(dish)
    }

    async fn upload_image(
        &self,
        id: DishId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GatewayError> {
        let now = Instant::now();
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(image_mime(file_name))?;
        let resp = self
            .api
            .http()
            .post(self.api.url(&image_path(id)))
            .multipart(Form::new().part("imageFile", part))
            .send()
            .await?;
        check_status(resp)?;

        log::debug!("POST image of dish {}: {:.2?}", id, now.elapsed());
        Ok(())
    }

    async fn delete_image(&self, id: DishId) -> Result<(), GatewayError> {
        let now = Instant::now();
        let resp = self
            .api
            .http()
            .delete(self.api.url(&image_path(id)))
            .send()
            .await?;
        check_status(resp)?;

        log::debug!("DELETE image of dish {}: {:.2?}", id, now.elapsed());
        Ok(())
    }
}
