pub mod dish_detail;
pub mod dish_form;
pub mod dish_list;

#[cfg(test)]
pub(crate) mod test_support;

use crate::constants::{DISHES_API, NO_IMAGE_PATH};
use crate::data_backend::SessionGateway;
use crate::data_types::dish_types::Dish;

/// Image URL for a dish; the browser (or whoever renders) fetches it lazily.
pub fn dish_image(dish: &Dish) -> String {
    if dish.image {
        format!("{}/{}/image", DISHES_API, dish.id)
    } else {
        NO_IMAGE_PATH.to_string()
    }
}

/// Proof that the caller checked the session for a logged-in admin.
///
/// Views only decide what to offer; the backend still enforces the role on
/// every privileged request.
#[derive(Debug)]
pub struct AdminCapability {
    _private: (),
}

impl AdminCapability {
    pub fn check(session: &dyn SessionGateway) -> Option<AdminCapability> {
        (session.is_logged_in() && session.is_admin()).then_some(AdminCapability { _private: () })
    }
}
