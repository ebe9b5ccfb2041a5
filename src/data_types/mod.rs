pub mod dish_types;

use std::{collections::BTreeMap, fmt};

use crate::constants::{
    BREAKFAST_LABEL, DINNER_LABEL, DISHES_ROUTE, EDIT_DISH_ROUTE, LUNCH_LABEL, NEW_DISH_ROUTE,
};
use crate::errors::RouteParamError;
use dish_types::{DishId, Purchase};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealCategory {
    pub const ALL: [MealCategory; 3] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
    ];

    /// Label the backend stores in `Dish::category`.
    pub fn label(self) -> &'static str {
        match self {
            MealCategory::Breakfast => BREAKFAST_LABEL,
            MealCategory::Lunch => LUNCH_LABEL,
            MealCategory::Dinner => DINNER_LABEL,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MealCategory::Breakfast => 0,
            MealCategory::Lunch => 1,
            MealCategory::Dinner => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    DishList,
    NewDish,
    EditDish(DishId),
    DishDetail(DishId),
}

impl Route {
    /// Route segments as handed to the router, e.g. `["/dishes/edit", "42"]`.
    pub fn segments(&self) -> Vec<String> {
        match self {
            Route::DishList => vec![DISHES_ROUTE.to_string()],
            Route::NewDish => vec![NEW_DISH_ROUTE.to_string()],
            Route::EditDish(id) => vec![EDIT_DISH_ROUTE.to_string(), id.to_string()],
            Route::DishDetail(id) => vec![DISHES_ROUTE.to_string(), id.to_string()],
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("/"))
    }
}

/// Path parameters of the route a view was opened on.
#[derive(Debug, Clone, Default)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Result<DishId, RouteParamError> {
        let raw = self
            .get(name)
            .ok_or_else(|| RouteParamError::Missing(name.to_string()))?;

        raw.trim()
            .parse::<DishId>()
            .map_err(|_| RouteParamError::Invalid {
                name: name.to_string(),
                value: raw.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Uninitialized,
    Loading,
    Loaded(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PurchaseState {
    #[default]
    Idle,
    Pending,
    Completed(Purchase),
    Failed,
}
