use std::sync::Arc;

use super::AdminCapability;
use crate::data_backend::DishesGateway;
use crate::data_types::dish_types::{Dish, DishDraft, DishId};
use crate::data_types::{LoadState, Route, RouteParams};
use crate::navigation::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(DishId),
}

/// What happens to the dish image once the dish itself is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ImageChange {
    #[default]
    Keep,
    Upload { file_name: String, bytes: Vec<u8> },
    Remove,
}

/// Backs `/dishes/new` and `/dishes/edit/{id}`.
pub struct DishFormView {
    dishes: Arc<dyn DishesGateway>,
    navigator: Arc<dyn Navigator>,
    mode: FormMode,
    existing: LoadState<Dish>,
    draft: DishDraft,
    image: ImageChange,
}

impl DishFormView {
    pub fn open_new(dishes: Arc<dyn DishesGateway>, navigator: Arc<dyn Navigator>) -> Self {
        DishFormView {
            dishes,
            navigator,
            mode: FormMode::New,
            existing: LoadState::Uninitialized,
            draft: DishDraft::default(),
            image: ImageChange::Keep,
        }
    }

    pub async fn open_edit(
        route: &RouteParams,
        dishes: Arc<dyn DishesGateway>,
        navigator: Arc<dyn Navigator>,
    ) -> Option<Self> {
        let id = match route.id("id") {
            Ok(id) => id,
            Err(e) => {
                log::error!("Cannot open dish editor: {}", e);
                return None;
            }
        };

        let mut view = DishFormView {
            dishes,
            navigator,
            mode: FormMode::Edit(id),
            existing: LoadState::Loading,
            draft: DishDraft::default(),
            image: ImageChange::Keep,
        };

        view.existing = match view.dishes.fetch_by_id(id).await {
            Ok(dish) => {
                view.draft = DishDraft::from(&dish);
                LoadState::Loaded(dish)
            }
            Err(e) => {
                log::error!("Loading dish {} for editing failed: {}", id, e);
                LoadState::Failed
            }
        };

        Some(view)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn existing(&self) -> &LoadState<Dish> {
        &self.existing
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DishDraft {
        &mut self.draft
    }

    pub fn set_image(&mut self, file_name: &str, bytes: Vec<u8>) {
        self.image = ImageChange::Upload {
            file_name: file_name.to_string(),
            bytes,
        };
    }

    pub fn remove_image(&mut self) {
        self.image = ImageChange::Remove;
    }

    /// Creates or updates the dish, applies the pending image change, then
    /// shows the dish. A failed image change is logged and does not keep the
    /// user on the form, the dish itself is already stored.
    pub async fn save(&self, _admin: &AdminCapability) {
        let saved = match self.mode {
            FormMode::New => self.dishes.create(&self.draft).await,
            FormMode::Edit(id) => {
                if !self.existing.is_loaded() {
                    log::warn!("Dish {} was never loaded, not saving", id);
                    return;
                }
                self.dishes.update(id, &self.draft).await
            }
        };

        match saved {
            Ok(dish) => {
                self.apply_image(&dish).await;
                self.navigator.navigate(Route::DishDetail(dish.id));
            }
            Err(e) => log::error!("Saving dish '{}' failed: {}", self.draft.name, e),
        }
    }

    async fn apply_image(&self, dish: &Dish) {
        let applied = match &self.image {
            ImageChange::Keep => return,
            ImageChange::Upload { file_name, bytes } => {
                self.dishes
                    .upload_image(dish.id, file_name, bytes.clone())
                    .await
            }
            ImageChange::Remove if !dish.image => {
                log::debug!("Dish {} has no image to remove", dish.id);
                return;
            }
            ImageChange::Remove => self.dishes.delete_image(dish.id).await,
        };

        if let Err(e) = applied {
            log::error!("Changing image of dish {} failed: {}", dish.id, e);
        }
    }
}
