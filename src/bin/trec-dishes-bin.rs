use trec_dishes::console::{
    render_detail, render_dishes, render_list, AutoConfirm, StdinConfirmer,
};
use trec_dishes::constants::DEFAULT_API_URL;
use trec_dishes::data_backend::DishesGateway;
use trec_dishes::data_types::dish_types::{DishId, Ingredient};
use trec_dishes::data_types::{PurchaseState, Route, RouteParams};
use trec_dishes::navigation::Confirmer;
use trec_dishes::shared_main::{logger_init, Services};
use trec_dishes::views::dish_detail::DishDetailView;
use trec_dishes::views::dish_form::DishFormView;
use trec_dishes::views::dish_list::DishListView;
use trec_dishes::views::AdminCapability;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Browse the trec restaurant menu, buy dishes and manage them as admin.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the trec backend
    #[arg(short, long, env = "TREC_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    #[arg(short, long, env = "TREC_USER")]
    user: Option<String>,
    #[arg(short, long, env = "TREC_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    /// Answer every confirmation prompt with yes
    #[arg(short, long)]
    yes: bool,
    /// Enable verbose logging (request timings){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(ClapArgs, Debug)]
struct ImageArgs {
    /// Upload this file as the dish image after saving
    #[arg(long, conflicts_with = "remove_image")]
    image: Option<PathBuf>,
    /// Delete the dish image after saving
    #[arg(long)]
    remove_image: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Breakfast, lunch and dinner menus
    List,
    /// Every dish regardless of category
    All,
    /// Details of one dish
    Show { id: DishId },
    /// Remove a dish (admin)
    Remove { id: DishId },
    /// Buy a dish as the logged in user
    Buy { dish_id: DishId },
    /// Create a dish (admin)
    New {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: f64,
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        #[command(flatten)]
        image: ImageArgs,
    },
    /// Change a dish (admin); omitted fields keep their value
    Edit {
        id: DishId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        /// Replaces all ingredients when given
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        #[command(flatten)]
        image: ImageArgs,
    },
}

fn ingredients(names: Vec<String>) -> Vec<Ingredient> {
    names.into_iter().map(|name| Ingredient { name }).collect()
}

async fn stage_image(form: &mut DishFormView, args: ImageArgs) -> Result<()> {
    if let Some(path) = args.image {
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading image {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        form.set_image(&file_name, bytes);
    } else if args.remove_image {
        form.remove_image();
    }
    Ok(())
}

fn require_admin(services: &Services) -> Result<AdminCapability> {
    match AdminCapability::check(&*services.session) {
        Some(admin) => Ok(admin),
        None => bail!("this action needs a logged in admin (--user/--password)"),
    }
}

fn list_view(services: &Services) -> DishListView {
    DishListView::new(
        services.dishes.clone(),
        services.purchases.clone(),
        services.session.clone(),
        services.navigator.clone(),
    )
}

async fn detail_view(services: &Services, id: DishId) -> DishDetailView {
    DishDetailView::open(
        &RouteParams::new().with("id", id),
        services.dishes.clone(),
        services.navigator.clone(),
    )
    .await
}

/// Shows whatever page the last action navigated to.
async fn follow_navigation(services: &Services) {
    match services.navigator.take() {
        Some(Route::DishList) => {
            let mut view = list_view(services);
            view.activate().await;
            println!("{}", render_list(&view));
        }
        Some(Route::DishDetail(id)) => {
            let view = detail_view(services, id).await;
            println!("{}", render_detail(&view, &*services.session));
        }
        Some(route) => println!("-> {}", route),
        None => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());

    let services = Services::connect(&args.api_url)?;

    match (&args.user, &args.password) {
        (Some(user), Some(password)) => {
            services.session.login(user, password).await?;
        }
        (Some(_), None) | (None, Some(_)) => bail!("--user and --password go together"),
        (None, None) => log::debug!("Browsing anonymously"),
    }

    let confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(StdinConfirmer)
    };

    match args.command {
        Cmd::List => {
            let mut view = list_view(&services);
            view.activate().await;
            println!("{}", render_list(&view));
        }
        Cmd::All => match services.dishes.fetch_all().await {
            Ok(dishes) => println!("{}", render_dishes("All dishes", &dishes)),
            Err(e) => log::error!("Loading all dishes failed: {}", e),
        },
        Cmd::Show { id } => {
            let view = detail_view(&services, id).await;
            println!("{}", render_detail(&view, &*services.session));
        }
        Cmd::Remove { id } => {
            let admin = require_admin(&services)?;
            let view = detail_view(&services, id).await;
            view.remove_dish(&admin, confirmer.as_ref()).await;
        }
        Cmd::Buy { dish_id } => {
            let mut view = list_view(&services);
            view.add_dish_purchase(dish_id).await;
            if let PurchaseState::Completed(purchase) = view.purchase() {
                match purchase.id {
                    Some(id) => println!("Purchase #{} registered.", id),
                    None => println!("Purchase registered."),
                }
            }
        }
        Cmd::New {
            name,
            category,
            price,
            ingredients: names,
            image,
        } => {
            let admin = require_admin(&services)?;
            let mut form =
                DishFormView::open_new(services.dishes.clone(), services.navigator.clone());
            stage_image(&mut form, image).await?;
            let draft = form.draft_mut();
            draft.name = name;
            draft.category = category;
            draft.price = price;
            draft.ingredients = ingredients(names);
            form.save(&admin).await;
        }
        Cmd::Edit {
            id,
            name,
            category,
            price,
            ingredients: names,
            image,
        } => {
            let admin = require_admin(&services)?;
            let Some(mut form) = DishFormView::open_edit(
                &RouteParams::new().with("id", id),
                services.dishes.clone(),
                services.navigator.clone(),
            )
            .await
            else {
                return Ok(());
            };
            stage_image(&mut form, image).await?;

            let draft = form.draft_mut();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            if !names.is_empty() {
                draft.ingredients = ingredients(names);
            }
            form.save(&admin).await;
        }
    }

    follow_navigation(&services).await;

    Ok(())
}
