use std::sync::RwLock;

use super::{check_status, ApiClient, SessionGateway};
use crate::constants::{ADMIN_ROLE, CURRENT_USER_API, LOGIN_API, LOGOUT_API};
use crate::data_types::dish_types::{LoginRequest, User};
use crate::errors::GatewayError;

/// Cookie-backed session against the trec backend.
///
/// The session cookie lives in the shared [`ApiClient`] cookie store, this
/// type only caches the user the backend reported for it.
pub struct HttpSession {
    api: ApiClient,
    user: RwLock<Option<User>>,
}

impl HttpSession {
    pub fn new(api: ApiClient) -> Self {
        HttpSession {
            api,
            user: RwLock::new(None),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, GatewayError> {
        let resp = self
            .api
            .http()
            .post(self.api.url(LOGIN_API))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        check_status(resp)?;

        let user = self.refresh().await?.ok_or(GatewayError::NotLoggedIn)?;
        log::info!("Logged in as {} (admin: {})", user.name, is_admin(&user));
        Ok(user)
    }

    /// Asks the backend who the session cookie belongs to.
    pub async fn refresh(&self) -> Result<Option<User>, GatewayError> {
        let resp = self
            .api
            .http()
            .get(self.api.url(CURRENT_USER_API))
            .send()
            .await?;

        let user = match resp.status().as_u16() {
            401 | 403 | 404 => None,
            _ => Some(check_status(resp)?.json::<User>().await?),
        };

        self.set_user(user.clone());
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), GatewayError> {
        let resp = self
            .api
            .http()
            .post(self.api.url(LOGOUT_API))
            .send()
            .await?;
        check_status(resp)?;

        self.set_user(None);
        Ok(())
    }

    fn set_user(&self, user: Option<User>) {
        match self.user.write() {
            Ok(mut guard) => *guard = user,
            Err(poisoned) => *poisoned.into_inner() = user,
        }
    }
}

fn is_admin(user: &User) -> bool {
    user.roles.iter().any(|role| role == ADMIN_ROLE)
}

impl SessionGateway for HttpSession {
    fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    fn is_admin(&self) -> bool {
        self.current_user().as_ref().is_some_and(is_admin)
    }

    fn current_user(&self) -> Option<User> {
        match self.user.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
