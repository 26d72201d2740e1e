use std::{marker::PhantomData, rc::Rc};

use common::output::Output;
use log::trace;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

pub trait Coffee {
    fn get_cost(&self) -> f64;

    fn get_description(&self) -> String;
}

impl<C> Coffee for Box<C>
where
    C: Coffee + ?Sized,
{
    fn get_cost(&self) -> f64 {
        (**self).get_cost()
    }

    fn get_description(&self) -> String {
        (**self).get_description()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn get_cost(&self) -> f64 {
        1.0
    }

    fn get_description(&self) -> String {
        "Simple Coffee".to_string()
    }
}

/// What a decorator layer adds on top of the coffee it wraps.
pub trait Addition {
    const NAME: &'static str;
    const COST: f64;
}

#[derive(Debug)]
pub struct Milk;

impl Addition for Milk {
    const NAME: &'static str = "Milk";
    const COST: f64 = 0.5;
}

#[derive(Debug)]
pub struct Sugar;

impl Addition for Sugar {
    const NAME: &'static str = "Sugar";
    const COST: f64 = 0.2;
}

pub struct CoffeeDecorator<C, A> {
    coffee: C,
    addition: PhantomData<A>,
}

impl<C, A> CoffeeDecorator<C, A>
where
    C: Coffee,
    A: Addition,
{
    pub fn new(coffee: C) -> Self {
        CoffeeDecorator {
            coffee,
            addition: PhantomData,
        }
    }

    pub fn inner(&self) -> &C {
        &self.coffee
    }

    pub fn into_inner(self) -> C {
        self.coffee
    }
}

impl<C, A> Coffee for CoffeeDecorator<C, A>
where
    C: Coffee,
    A: Addition,
{
    fn get_cost(&self) -> f64 {
        self.coffee.get_cost() + A::COST
    }

    fn get_description(&self) -> String {
        format!("{}, {}", self.coffee.get_description(), A::NAME)
    }
}

pub type MilkDecorator<C> = CoffeeDecorator<C, Milk>;

pub type SugarDecorator<C> = CoffeeDecorator<C, Sugar>;

/// Runtime pick of a decorator layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Condiment {
    Milk,
    Sugar,
}

impl Condiment {
    pub fn wrap(&self, coffee: Box<dyn Coffee>) -> Box<dyn Coffee> {
        trace!("Adding {self}");
        match self {
            Condiment::Milk => Box::new(MilkDecorator::new(coffee)),
            Condiment::Sugar => Box::new(SugarDecorator::new(coffee)),
        }
    }
}

/// Wraps `condiments` around `base`, first condiment innermost.
pub fn prepare(base: Box<dyn Coffee>, condiments: &[Condiment]) -> Box<dyn Coffee> {
    condiments
        .iter()
        .fold(base, |coffee, condiment| condiment.wrap(coffee))
}

/// A function carrying the name and doc it was declared with.
pub struct Callable<F> {
    name: &'static str,
    doc: &'static str,
    function: F,
}

impl<F> Callable<F>
where
    F: Fn() -> String,
{
    pub fn new(name: &'static str, doc: &'static str, function: F) -> Self {
        Callable {
            name,
            doc,
            function,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn doc(&self) -> &'static str {
        self.doc
    }

    pub fn call(&self) -> String {
        (self.function)()
    }
}

/// Keeps name and doc of `callable`, calls it once per call and wraps its result in a blink tag.
pub fn make_blink<F>(callable: Callable<F>) -> Callable<impl Fn() -> String>
where
    F: Fn() -> String,
{
    let Callable {
        name,
        doc,
        function,
    } = callable;
    Callable {
        name,
        doc,
        function: move || format!("<blink>{}</blink>", function()),
    }
}

pub fn hello_world() -> String {
    "Hello, World!".to_string()
}

pub fn blinking_hello_world() -> Callable<impl Fn() -> String> {
    make_blink(Callable::new("hello_world", "Original function!", hello_world))
}

fn describe(coffee: &dyn Coffee, output: &dyn Output) {
    output.write_line(&coffee.get_description());
    output.write_line(&format!("{:?}", coffee.get_cost()));
}

pub fn usage_example(output: Rc<dyn Output>) {
    output.write_line(&blinking_hello_world().call());

    let simple_coffee = SimpleCoffee;
    describe(&simple_coffee, output.as_ref());

    let milk_coffee = MilkDecorator::new(simple_coffee);
    describe(&milk_coffee, output.as_ref());

    let sugar_milk_coffee = SugarDecorator::new(milk_coffee);
    describe(&sugar_milk_coffee, output.as_ref());
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use common_test::{get_seeded_rng, RecordingOutput};
    use rand::{seq::SliceRandom, Rng};
    use strum::IntoEnumIterator;

    use super::{
        blinking_hello_world, make_blink, prepare, usage_example, Addition, Callable, Coffee,
        Condiment, Milk, MilkDecorator, SimpleCoffee, Sugar, SugarDecorator,
    };

    #[test]
    fn test_milk_then_sugar() {
        // Given
        let coffee = SugarDecorator::new(MilkDecorator::new(SimpleCoffee));

        // When
        let cost = coffee.get_cost();
        let description = coffee.get_description();

        // Then
        assert_eq!(1.7, cost);
        assert_eq!("Simple Coffee, Milk, Sugar", description);
        assert_eq!(1.5, coffee.inner().get_cost(), "Should keep the inner layer");
    }

    #[test]
    fn test_decorator_order_changes_description_only() {
        // Given
        let milk_first = SugarDecorator::new(MilkDecorator::new(SimpleCoffee));
        let sugar_first = MilkDecorator::new(SugarDecorator::new(SimpleCoffee));

        // Then
        assert!((milk_first.get_cost() - sugar_first.get_cost()).abs() < 1e-9);
        assert_eq!("Simple Coffee, Sugar, Milk", sugar_first.get_description());
        assert_eq!(
            "Simple Coffee, Sugar",
            sugar_first.into_inner().get_description()
        );
    }

    #[test]
    fn test_prepare_should_accumulate_every_layer() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let condiments = Condiment::iter().collect::<Vec<_>>();
        let count = rng.gen_range(0..12);
        let chosen = (0..count)
            .map(|_| *condiments.choose(&mut rng).unwrap())
            .collect::<Vec<_>>();

        // When
        let coffee = prepare(Box::new(SimpleCoffee), &chosen);

        // Then
        let expected_cost = chosen.iter().fold(SimpleCoffee.get_cost(), |cost, c| {
            cost + match c {
                Condiment::Milk => Milk::COST,
                Condiment::Sugar => Sugar::COST,
            }
        });
        let expected_description = chosen.iter().fold(
            SimpleCoffee.get_description(),
            |description, c| match c {
                Condiment::Milk => format!("{description}, {}", Milk::NAME),
                Condiment::Sugar => format!("{description}, {}", Sugar::NAME),
            },
        );
        assert!(
            (expected_cost - coffee.get_cost()).abs() < 1e-9,
            "Should add each layer cost to the base"
        );
        assert_eq!(expected_description, coffee.get_description());
    }

    #[test]
    fn test_blinking_hello_world() {
        // Given
        let callable = blinking_hello_world();

        // When
        let result = callable.call();

        // Then
        assert_eq!("<blink>Hello, World!</blink>", result);
        assert_eq!("hello_world", callable.name(), "Should keep the name");
        assert_eq!("Original function!", callable.doc(), "Should keep the doc");
    }

    #[test]
    fn test_make_blink_should_call_wrapped_function_once_per_call() {
        // Given
        let calls = Cell::new(0);
        let callable = make_blink(Callable::new("count", "Counts calls", || {
            calls.set(calls.get() + 1);
            calls.get().to_string()
        }));

        // When
        let first = callable.call();
        let second = callable.call();

        // Then
        assert_eq!("<blink>1</blink>", first);
        assert_eq!("<blink>2</blink>", second);
        assert_eq!(2, calls.get());
    }

    #[test]
    fn test_usage_example() {
        // Given
        let recording = RecordingOutput::new();

        // When
        usage_example(Rc::new(recording.clone()));

        // Then
        assert_eq!(
            vec![
                "<blink>Hello, World!</blink>",
                "Simple Coffee",
                "1.0",
                "Simple Coffee, Milk",
                "1.5",
                "Simple Coffee, Milk, Sugar",
                "1.7",
            ],
            recording.lines()
        );
    }
}
