use std::rc::Rc;

use common::output::Output;
use log::debug;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Family {
    Windows,
    MacOs,
}

impl Family {
    pub fn style(&self) -> &'static str {
        match self {
            Family::Windows => "Windows",
            Family::MacOs => "MacOS",
        }
    }

    pub fn factory(&self) -> Box<dyn GuiFactory> {
        match self {
            Family::Windows => Box::new(WindowsFactory),
            Family::MacOs => Box::new(MacOsFactory),
        }
    }
}

pub trait Button {
    fn paint(&self) -> String;
}

pub trait Checkbox {
    fn paint(&self) -> String;
}

pub trait GuiFactory {
    fn family(&self) -> Family;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

fn render(widget: &str, family: Family) -> String {
    format!("Rendering a {} in a {} style.", widget, family.style())
}

pub struct WindowsButton;

impl Button for WindowsButton {
    fn paint(&self) -> String {
        render("button", Family::Windows)
    }
}

pub struct MacOsButton;

impl Button for MacOsButton {
    fn paint(&self) -> String {
        render("button", Family::MacOs)
    }
}

pub struct WindowsCheckbox;

impl Checkbox for WindowsCheckbox {
    fn paint(&self) -> String {
        render("checkbox", Family::Windows)
    }
}

pub struct MacOsCheckbox;

impl Checkbox for MacOsCheckbox {
    fn paint(&self) -> String {
        render("checkbox", Family::MacOs)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MacOsFactory;

impl GuiFactory for MacOsFactory {
    fn family(&self) -> Family {
        Family::MacOs
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacOsCheckbox)
    }
}

/// Client code: only sees the factory and product traits.
pub fn create_gui(factory: &dyn GuiFactory, output: &dyn Output) {
    debug!("Creating a {} GUI", factory.family());
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();

    output.write_line(&button.paint());
    output.write_line(&checkbox.paint());
}

pub fn usage_example(output: Rc<dyn Output>) {
    create_gui(&WindowsFactory, output.as_ref());
    create_gui(&MacOsFactory, output.as_ref());
}
