use std::io::{self, BufRead, Write};

use crate::data_backend::SessionGateway;
use crate::data_types::dish_types::Dish;
use crate::data_types::{LoadState, MealCategory, PurchaseState};
use crate::navigation::Confirmer;
use crate::views::dish_detail::DishDetailView;
use crate::views::dish_list::DishListView;
use crate::views::dish_image;

/// Asks on stdin, anything but y/yes counts as no.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                log::error!("Reading confirmation failed: {}", e);
                false
            }
        }
    }
}

/// `--yes` on the command line.
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&self, message: &str) -> bool {
        log::info!("{} -> yes", message);
        true
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si")
}

fn admin_actions_visible(session: &dyn SessionGateway) -> bool {
    session.is_logged_in() && session.is_admin()
}

fn render_price(price: f64) -> String {
    format!("{:.2} €", price)
}

fn render_dish_line(dish: &Dish) -> String {
    format!(
        " • [{}] {} ({})  {}\n",
        dish.id,
        dish.name,
        render_price(dish.price),
        dish_image(dish)
    )
}

pub fn render_dishes(title: &str, dishes: &[Dish]) -> String {
    let mut msg = format!("{}\n", title);
    if dishes.is_empty() {
        msg += "   no dishes.\n";
    }
    for dish in dishes {
        msg += &render_dish_line(dish);
    }
    msg
}

pub fn render_list(view: &DishListView) -> String {
    let mut msg = String::new();

    for category in MealCategory::ALL {
        match view.bucket(category) {
            LoadState::Loaded(dishes) => msg += &render_dishes(category.label(), dishes),
            // failed buckets look the same as buckets that are still loading
            _ => msg += &format!("{}\n", category.label()),
        }
        msg += "\n";
    }

    if let PurchaseState::Completed(purchase) = view.purchase() {
        match purchase.id {
            Some(id) => msg += &format!("Purchase #{} registered.\n", id),
            None => msg += "Purchase registered.\n",
        }
    }

    if admin_actions_visible(view.session()) {
        msg += "[new] create a new dish\n";
    }

    msg
}

pub fn render_detail(view: &DishDetailView, session: &dyn SessionGateway) -> String {
    let Some(dish) = view.dish() else {
        return String::new();
    };

    let mut msg = format!("dish \"{}\"\n", dish.name);
    msg += &format!("image: {}\n", dish_image(dish));
    msg += &format!("category: \"{}\"\n", dish.category);
    msg += &format!("price: \"{}\"\n", render_price(dish.price));
    msg += "ingredients:\n";
    for ingredient in &dish.ingredients {
        msg += &format!("   + {}\n", ingredient.name);
    }

    if admin_actions_visible(session) {
        msg += "\n[remove] [edit]";
    }
    msg += "\n[dishes] all dishes\n";

    msg
}
