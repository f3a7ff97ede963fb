use sqlx::SqlitePool;

use crate::config::{ApiConfig, Environment};

/// Shared application state injected into every handler. The pool is the
/// only cross-request resource; handlers hold no other state.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: SqlitePool,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: SqlitePool) -> Self {
        Self {
            pool,
            environment: config.env,
        }
    }
}
