use std::{env, rc::Rc, str::FromStr};

use common::{
    output::{Output, StdOutput},
    subject_observer::SubjectError,
};
use log::{error, SetLoggerError};
use thiserror::Error;

use crate::{config::app::AppConfig, demo::DemoKind};

mod config;
mod demo;
mod metrics_observer;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] validator::ValidationErrors),
    #[error("Logger already initialized: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("Unknown demo: {0}")]
    UnknownDemo(String),
    #[error(transparent)]
    Subject(#[from] SubjectError),
}

fn select_demos(name: Option<String>, config: &AppConfig) -> Result<Vec<DemoKind>, AppError> {
    match name {
        Some(name) => DemoKind::from_str(&name)
            .map(|kind| vec![kind])
            .map_err(|_| AppError::UnknownDemo(name)),
        None => Ok(config.demos.clone()),
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::new()?;
    config::log::init(config.log_level)?;

    let demos = select_demos(env::args().nth(1), &config)?;
    let output: Rc<dyn Output> = Rc::new(StdOutput);
    for kind in demos {
        if let Err(err) = demo::run(kind, &config, output.clone()) {
            error!("{kind} demo failed: {err}");
            return Err(err.into());
        }
    }
    Ok(())
}
