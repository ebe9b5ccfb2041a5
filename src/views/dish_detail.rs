use std::sync::Arc;

use super::{dish_image, AdminCapability};
use crate::constants::REMOVE_CONFIRM_MSG;
use crate::data_backend::DishesGateway;
use crate::data_types::dish_types::Dish;
use crate::data_types::{LoadState, Route, RouteParams};
use crate::navigation::{Confirmer, Navigator};

pub struct DishDetailView {
    dishes: Arc<dyn DishesGateway>,
    navigator: Arc<dyn Navigator>,
    dish: LoadState<Dish>,
}

impl DishDetailView {
    pub fn new(dishes: Arc<dyn DishesGateway>, navigator: Arc<dyn Navigator>) -> Self {
        DishDetailView {
            dishes,
            navigator,
            dish: LoadState::Uninitialized,
        }
    }

    /// Builds the view for `/dishes/{id}` and loads the dish once.
    pub async fn open(
        route: &RouteParams,
        dishes: Arc<dyn DishesGateway>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut view = Self::new(dishes, navigator);
        view.load(route).await;
        view
    }

    pub async fn load(&mut self, route: &RouteParams) {
        let id = match route.id("id") {
            Ok(id) => id,
            Err(e) => {
                log::error!("Cannot open dish detail: {}", e);
                self.dish = LoadState::Failed;
                return;
            }
        };

        self.dish = LoadState::Loading;
        self.dish = match self.dishes.fetch_by_id(id).await {
            Ok(dish) => LoadState::Loaded(dish),
            Err(e) => {
                log::error!("Loading dish {} failed: {}", id, e);
                LoadState::Failed
            }
        };
    }

    pub fn state(&self) -> &LoadState<Dish> {
        &self.dish
    }

    pub fn dish(&self) -> Option<&Dish> {
        self.dish.value()
    }

    pub async fn remove_dish(&self, _admin: &AdminCapability, confirmer: &dyn Confirmer) {
        let Some(dish) = self.dish() else {
            log::warn!("No dish loaded, nothing to remove");
            return;
        };

        if !confirmer.confirm(REMOVE_CONFIRM_MSG) {
            return;
        }

        match self.dishes.remove(dish).await {
            Ok(()) => self.navigator.navigate(Route::DishList),
            Err(e) => log::error!("Removing dish {} failed: {}", dish.id, e),
        }
    }

    pub fn edit_dish(&self, _admin: &AdminCapability) {
        if let Some(dish) = self.dish() {
            self.navigator.navigate(Route::EditDish(dish.id));
        }
    }

    pub fn goto_dishes(&self) {
        self.navigator.navigate(Route::DishList);
    }

    /// `None` until the dish is loaded.
    pub fn dish_image(&self) -> Option<String> {
        self.dish().map(dish_image)
    }
}
