use serde::{Deserialize, Serialize};

pub type DishId = i64;
pub type UserId = i64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub category: String,
    #[serde(rename = "dishPrice")]
    pub price: f64,
    #[serde(default)]
    pub image: bool,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Dish fields as sent on create/update; the backend assigns the id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DishDraft {
    pub name: String,
    pub category: String,
    #[serde(rename = "dishPrice")]
    pub price: f64,
    pub ingredients: Vec<Ingredient>,
}

impl From<&Dish> for DishDraft {
    fn from(dish: &Dish) -> Self {
        DishDraft {
            name: dish.name.clone(),
            category: dish.category.clone(),
            price: dish.price,
            ingredients: dish.ingredients.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    #[serde(rename = "dishId")]
    pub dish_id: DishId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

// the list view keeps the body around but never reads it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Purchase {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
