pub const DEFAULT_API_URL: &str = "https://localhost:8443";

pub const DISHES_ROUTE: &str = "/dishes";
pub const NEW_DISH_ROUTE: &str = "/dishes/new";
pub const EDIT_DISH_ROUTE: &str = "/dishes/edit";

pub const DISHES_API: &str = "/api/dishes";
pub const PURCHASES_API: &str = "/api/purchases";
pub const LOGIN_API: &str = "/api/auth/login";
pub const LOGOUT_API: &str = "/api/auth/logout";
pub const CURRENT_USER_API: &str = "/api/users/me";

pub const NO_IMAGE_PATH: &str = "/assets/images/no_image.png";

pub const BREAKFAST_LABEL: &str = "Desayuno";
pub const LUNCH_LABEL: &str = "Comida";
pub const DINNER_LABEL: &str = "Cena";

pub const ADMIN_ROLE: &str = "ADMIN";

pub const REMOVE_CONFIRM_MSG: &str = "Do you want to remove this dish?";
