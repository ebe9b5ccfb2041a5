use std::cell::Cell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::data_backend::{DishesGateway, PurchasesGateway, SessionGateway};
use crate::data_types::dish_types::{Dish, DishDraft, DishId, Ingredient, Purchase, User, UserId};
use crate::errors::GatewayError;
use crate::navigation::Confirmer;

pub fn dish(id: DishId, name: &str) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        category: "Desayuno".to_string(),
        price: 4.5,
        image: false,
        ingredients: vec![Ingredient {
            name: "Harina".to_string(),
        }],
    }
}

#[derive(Default)]
pub struct FakeDishes {
    pub by_id: HashMap<DishId, Dish>,
    pub categories: HashMap<String, Result<Vec<Dish>, u16>>,
    /// Extra scheduler yields before a category answers, to shuffle completion order.
    pub category_delay: HashMap<String, usize>,
    pub fail_remove: bool,
    pub fail_save: bool,
    pub fail_image: bool,
    pub fetched: Mutex<Vec<DishId>>,
    pub removed: Mutex<Vec<DishId>>,
    pub saved: Mutex<Vec<(Option<DishId>, DishDraft)>>,
    pub completion_order: Mutex<Vec<String>>,
    /// `(dish, Some(file name))` for uploads, `(dish, None)` for deletions.
    pub images: Mutex<Vec<(DishId, Option<String>)>>,
}

impl FakeDishes {
    pub fn with_dish(dish: Dish) -> Self {
        FakeDishes {
            by_id: HashMap::from([(dish.id, dish)]),
            ..Default::default()
        }
    }

    pub fn category(mut self, label: &str, outcome: Result<Vec<Dish>, u16>) -> Self {
        self.categories.insert(label.to_string(), outcome);
        self
    }

    pub fn removed(&self) -> Vec<DishId> {
        self.removed.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<(Option<DishId>, DishDraft)> {
        self.saved.lock().unwrap().clone()
    }

    pub fn images(&self) -> Vec<(DishId, Option<String>)> {
        self.images.lock().unwrap().clone()
    }

    fn image_outcome(&self) -> Result<(), GatewayError> {
        if self.fail_image {
            Err(GatewayError::Status(413))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DishesGateway for FakeDishes {
    async fn fetch_by_id(&self, id: DishId) -> Result<Dish, GatewayError> {
        self.fetched.lock().unwrap().push(id);
        self.by_id.get(&id).cloned().ok_or(GatewayError::Status(404))
    }

    async fn fetch_by_category(&self, label: &str) -> Result<Vec<Dish>, GatewayError> {
        for _ in 0..self.category_delay.get(label).copied().unwrap_or(0) {
            tokio::task::yield_now().await;
        }
        self.completion_order
            .lock()
            .unwrap()
            .push(label.to_string());

        match self.categories.get(label) {
            Some(Ok(dishes)) => Ok(dishes.clone()),
            Some(Err(status)) => Err(GatewayError::Status(*status)),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Dish>, GatewayError> {
        Ok(self.by_id.values().cloned().collect())
    }

    async fn remove(&self, dish: &Dish) -> Result<(), GatewayError> {
        self.removed.lock().unwrap().push(dish.id);
        if self.fail_remove {
            Err(GatewayError::Status(500))
        } else {
            Ok(())
        }
    }

    async fn create(&self, draft: &DishDraft) -> Result<Dish, GatewayError> {
        self.saved.lock().unwrap().push((None, draft.clone()));
        if self.fail_save {
            return Err(GatewayError::Status(400));
        }
        Ok(Dish {
            id: 100,
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price,
            image: false,
            ingredients: draft.ingredients.clone(),
        })
    }

    async fn update(&self, id: DishId, draft: &DishDraft) -> Result<Dish, GatewayError> {
        self.saved.lock().unwrap().push((Some(id), draft.clone()));
        if self.fail_save {
            return Err(GatewayError::Status(400));
        }
        let image = self.by_id.get(&id).is_some_and(|d| d.image);
        Ok(Dish {
            id,
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price,
            image,
            ingredients: draft.ingredients.clone(),
        })
    }

    async fn upload_image(
        &self,
        id: DishId,
        file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<(), GatewayError> {
        self.images
            .lock()
            .unwrap()
            .push((id, Some(file_name.to_string())));
        self.image_outcome()
    }

    async fn delete_image(&self, id: DishId) -> Result<(), GatewayError> {
        self.images.lock().unwrap().push((id, None));
        self.image_outcome()
    }
}

#[derive(Default)]
pub struct FakePurchases {
    pub fail: bool,
    pub calls: Mutex<Vec<(DishId, UserId)>>,
}

impl FakePurchases {
    pub fn calls(&self) -> Vec<(DishId, UserId)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PurchasesGateway for FakePurchases {
    async fn create(&self, dish_id: DishId, user_id: UserId) -> Result<Purchase, GatewayError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((dish_id, user_id));
        if self.fail {
            return Err(GatewayError::Status(500));
        }
        Ok(Purchase {
            id: Some(calls.len() as i64),
            details: serde_json::Map::new(),
        })
    }
}

pub struct FakeSession {
    pub logged_in: bool,
    pub admin: bool,
    pub user: Option<User>,
}

impl FakeSession {
    pub fn anonymous() -> Self {
        FakeSession {
            logged_in: false,
            admin: false,
            user: None,
        }
    }

    pub fn user(id: UserId) -> Self {
        FakeSession {
            logged_in: true,
            admin: false,
            user: Some(User {
                id,
                name: format!("user{}", id),
                roles: vec!["USER".to_string()],
            }),
        }
    }

    pub fn admin(id: UserId) -> Self {
        FakeSession {
            admin: true,
            ..Self::user(id)
        }
    }
}

impl SessionGateway for FakeSession {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn is_admin(&self) -> bool {
        self.admin
    }

    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

pub struct FixedConfirm {
    answer: bool,
    asked: AtomicUsize,
}

impl FixedConfirm {
    pub fn new(answer: bool) -> Self {
        FixedConfirm {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Confirmer for FixedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

thread_local! {
    static ERRORS_LOGGED: Cell<usize> = const { Cell::new(0) };
}

/// Counts `error!` records emitted on the current thread.
struct ErrorCounter;

impl log::Log for ErrorCounter {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() == log::Level::Error
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            ERRORS_LOGGED.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static ERROR_COUNTER: ErrorCounter = ErrorCounter;

/// Starts counting errors for the calling test. `#[tokio::test]` runs on the
/// test thread, so other tests never touch this count.
pub fn count_errors() {
    // another test may have installed it already
    let _ = log::set_logger(&ERROR_COUNTER);
    log::set_max_level(log::LevelFilter::Error);
    ERRORS_LOGGED.with(|count| count.set(0));
}

pub fn errors_logged() -> usize {
    ERRORS_LOGGED.with(Cell::get)
}
