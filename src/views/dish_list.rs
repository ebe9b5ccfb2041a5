use std::sync::Arc;

use super::dish_image;
use crate::data_backend::{DishesGateway, PurchasesGateway, SessionGateway};
use crate::data_types::dish_types::{Dish, DishId};
use crate::data_types::{LoadState, MealCategory, PurchaseState, Route};
use crate::navigation::Navigator;

pub struct DishListView {
    dishes: Arc<dyn DishesGateway>,
    purchases: Arc<dyn PurchasesGateway>,
    session: Arc<dyn SessionGateway>,
    navigator: Arc<dyn Navigator>,
    // indexed by MealCategory::index
    buckets: [LoadState<Vec<Dish>>; 3],
    purchase: PurchaseState,
}

impl DishListView {
    pub fn new(
        dishes: Arc<dyn DishesGateway>,
        purchases: Arc<dyn PurchasesGateway>,
        session: Arc<dyn SessionGateway>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        DishListView {
            dishes,
            purchases,
            session,
            navigator,
            buckets: Default::default(),
            purchase: PurchaseState::Idle,
        }
    }

    /// Fetches the three meal buckets concurrently. Each bucket only reflects
    /// its own request; a failed one stays without dishes.
    pub async fn activate(&mut self) {
        let gateway = self.dishes.as_ref();
        let [breakfast, lunch, dinner] = &mut self.buckets;

        tokio::join!(
            load_bucket(gateway, MealCategory::Breakfast, breakfast),
            load_bucket(gateway, MealCategory::Lunch, lunch),
            load_bucket(gateway, MealCategory::Dinner, dinner),
        );
    }

    pub fn bucket(&self, category: MealCategory) -> &LoadState<Vec<Dish>> {
        &self.buckets[category.index()]
    }

    pub fn purchase(&self) -> &PurchaseState {
        &self.purchase
    }

    pub fn session(&self) -> &dyn SessionGateway {
        self.session.as_ref()
    }

    pub fn new_dish(&self) {
        self.navigator.navigate(Route::NewDish);
    }

    /// Every call creates a new purchase, repeated calls are not merged.
    pub async fn add_dish_purchase(&mut self, dish_id: DishId) {
        let Some(user) = self.session.current_user() else {
            log::error!("Cannot purchase dish {}: no user logged in", dish_id);
            self.purchase = PurchaseState::Failed;
            return;
        };

        self.purchase = PurchaseState::Pending;
        self.purchase = match self.purchases.create(dish_id, user.id).await {
            Ok(purchase) => PurchaseState::Completed(purchase),
            Err(e) => {
                log::error!("Purchase of dish {} failed: {}", dish_id, e);
                PurchaseState::Failed
            }
        };
    }

    pub fn dish_image(&self, dish: &Dish) -> String {
        dish_image(dish)
    }
}

async fn load_bucket(
    gateway: &dyn DishesGateway,
    category: MealCategory,
    slot: &mut LoadState<Vec<Dish>>,
) {
    *slot = LoadState::Loading;
    *slot = match gateway.fetch_by_category(category.label()).await {
        Ok(dishes) => {
            log::debug!("{}: {} dishes", category.label(), dishes.len());
            LoadState::Loaded(dishes)
        }
        Err(e) => {
            log::error!("Loading {} dishes failed: {}", category.label(), e);
            LoadState::Failed
        }
    };
}
