use std::{fmt, rc::Rc};

use common::output::Output;
use log::trace;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    pub model: Option<String>,
    pub tires: Option<String>,
    pub engine: Option<String>,
}

impl Car {
    pub fn is_complete(&self) -> bool {
        self.model.is_some() && self.tires.is_some() && self.engine.is_some()
    }
}

fn part_or_none(part: &Option<String>) -> &str {
    part.as_deref().unwrap_or("None")
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            part_or_none(&self.model),
            part_or_none(&self.tires),
            part_or_none(&self.engine)
        )
    }
}

/// Steps may be called in any order; a skipped step leaves its part unset.
pub trait CarBuilder {
    fn car(&self) -> &Car;

    fn car_mut(&mut self) -> &mut Car;

    fn create_new_car(&mut self) {
        *self.car_mut() = Car::default();
    }

    fn add_model(&mut self);

    fn add_tires(&mut self);

    fn add_engine(&mut self);
}

#[derive(Debug, Default)]
pub struct SkyLarkBuilder {
    car: Car,
}

impl CarBuilder for SkyLarkBuilder {
    fn car(&self) -> &Car {
        &self.car
    }

    fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    fn add_model(&mut self) {
        self.car.model = Some("Skylark".to_string());
    }

    fn add_tires(&mut self) {
        self.car.tires = Some("Regular tires".to_string());
    }

    fn add_engine(&mut self) {
        self.car.engine = Some("Turbo engine".to_string());
    }
}

#[derive(Debug, Default)]
pub struct MustangBuilder {
    car: Car,
}

impl CarBuilder for MustangBuilder {
    fn car(&self) -> &Car {
        &self.car
    }

    fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    fn add_model(&mut self) {
        self.car.model = Some("Mustang".to_string());
    }

    fn add_tires(&mut self) {
        self.car.tires = Some("Race tires".to_string());
    }

    fn add_engine(&mut self) {
        self.car.engine = Some("5.0 engine".to_string());
    }
}

pub struct Director<B> {
    builder: B,
}

impl<B> Director<B>
where
    B: CarBuilder,
{
    pub fn new(builder: B) -> Self {
        Director { builder }
    }

    pub fn construct_car(&mut self) {
        trace!("Constructing a new car");
        self.builder.create_new_car();
        self.builder.add_model();
        self.builder.add_tires();
        self.builder.add_engine();
    }

    /// The builder's current car, all parts unset before `construct_car`.
    pub fn get_car(&self) -> &Car {
        self.builder.car()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CarModel {
    Skylark,
    Mustang,
}

impl CarModel {
    pub fn build(&self) -> Car {
        match self {
            CarModel::Skylark => construct(SkyLarkBuilder::default()),
            CarModel::Mustang => construct(MustangBuilder::default()),
        }
    }
}

fn construct<B: CarBuilder>(builder: B) -> Car {
    let mut director = Director::new(builder);
    director.construct_car();
    director.get_car().clone()
}

pub fn usage_example(output: Rc<dyn Output>) {
    let mut director = Director::new(SkyLarkBuilder::default());
    director.construct_car();
    output.write_line(&director.get_car().to_string());

    let mut director = Director::new(MustangBuilder::default());
    director.construct_car();
    output.write_line(&director.get_car().to_string());
}
