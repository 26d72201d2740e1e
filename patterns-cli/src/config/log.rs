use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::AppError;

/// `RUST_LOG` wins over `default_level`.
pub fn init(default_level: LevelFilter) -> Result<(), AppError> {
    Builder::from_env(Env::default().default_filter_or(default_level.to_string()))
        .try_init()
        .map_err(AppError::from)
}
