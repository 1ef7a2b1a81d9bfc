use std::sync::Arc;

use crate::{
    config::Config, db::connection::DbPool, services::account::AccountService,
    utils::email::Mailer,
};

/// Shared application state, constructed once at startup and cloned into
/// each handler. The mailer is injected here so no module-level transport
/// singleton exists anywhere in the crate.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config, mailer: Arc<dyn Mailer>) -> Self {
        let accounts = AccountService::new(pool.clone(), &config, mailer);
        Self {
            pool,
            config,
            accounts,
        }
    }
}
