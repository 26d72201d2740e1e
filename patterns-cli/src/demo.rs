use std::rc::Rc;

use behavioral::{
    command,
    observer::{self, MessageSubject},
};
use common::{
    output::Output,
    subject_observer::{SharedObserver, Subject},
};
use creational::abstract_factory::create_gui;
use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use structural::decorator::{blinking_hello_world, prepare, Coffee, SimpleCoffee};

use crate::{config::app::AppConfig, metrics_observer::MetricsObserver, AppError};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DemoKind {
    Observer,
    Command,
    AbstractFactory,
    Builder,
    Decorator,
}

pub fn run(kind: DemoKind, config: &AppConfig, output: Rc<dyn Output>) -> Result<(), AppError> {
    info!("Running {kind} demo");
    match kind {
        DemoKind::Observer => run_observer(config, output)?,
        DemoKind::Command => command::usage_example(output),
        DemoKind::AbstractFactory => {
            for family in &config.gui_families {
                create_gui(family.factory().as_ref(), output.as_ref());
            }
        }
        DemoKind::Builder => {
            for model in &config.car_models {
                output.write_line(&model.build().to_string());
            }
        }
        DemoKind::Decorator => {
            output.write_line(&blinking_hello_world().call());
            let coffee = prepare(Box::new(SimpleCoffee), &config.condiments);
            output.write_line(&coffee.get_description());
            output.write_line(&format!("{:?}", coffee.get_cost()));
        }
    }
    Ok(())
}

fn run_observer(config: &AppConfig, output: Rc<dyn Output>) -> Result<(), AppError> {
    let mut subject = MessageSubject::new();
    let metrics: Option<SharedObserver<MessageSubject, String>> = if config.metrics {
        Some(Rc::new(MetricsObserver::new()))
    } else {
        None
    };
    if let Some(metrics) = &metrics {
        subject.attach(metrics.clone());
    }

    observer::usage_example(&mut subject, output)?;

    if let Some(metrics) = &metrics {
        subject.detach(metrics)?;
    }
    Ok(())
}
