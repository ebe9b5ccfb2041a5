use std::{env, sync::Arc};

use crate::data_backend::{
    dishes_api::HttpDishesGateway, login_api::HttpSession, purchases_api::HttpPurchasesGateway,
    ApiClient,
};
use crate::errors::GatewayError;
use crate::navigation::CurrentRouteNavigator;

pub fn logger_init(module_path: &str) {
    let level =
        if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default() == "debug" {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

    // the binary and the library log under different module paths
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(module_path, level)
        .filter_module("trec_dishes", level)
        .init();
}

/// Everything a view needs, wired against one backend.
pub struct Services {
    pub dishes: Arc<HttpDishesGateway>,
    pub purchases: Arc<HttpPurchasesGateway>,
    pub session: Arc<HttpSession>,
    pub navigator: Arc<CurrentRouteNavigator>,
}

impl Services {
    pub fn connect(api_url: &str) -> Result<Self, GatewayError> {
        let api = ApiClient::new(api_url)?;
        log::info!("Using backend at {}", api.url(""));

        Ok(Services {
            dishes: Arc::new(HttpDishesGateway::new(api.clone())),
            purchases: Arc::new(HttpPurchasesGateway::new(api.clone())),
            session: Arc::new(HttpSession::new(api)),
            navigator: Arc::new(CurrentRouteNavigator::new()),
        })
    }
}
