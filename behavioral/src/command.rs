use std::{collections::HashMap, rc::Rc};

use common::output::Output;
use log::debug;

pub type Slot = u8;

pub trait Command {
    fn execute(&self);
}

pub struct Light {
    location: String,
    output: Rc<dyn Output>,
}

impl Light {
    pub fn new(location: impl Into<String>, output: Rc<dyn Output>) -> Self {
        Light {
            location: location.into(),
            output,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn on(&self) {
        self.output
            .write_line(&format!("{} light is on", self.location));
    }

    pub fn off(&self) {
        self.output
            .write_line(&format!("{} light is off", self.location));
    }

    pub fn blow_up(&self) {
        self.output
            .write_line(&format!("{} light blew up!", self.location));
    }
}

pub struct LightOnCommand {
    light: Rc<Light>,
}

impl LightOnCommand {
    pub fn new(light: Rc<Light>) -> Self {
        LightOnCommand { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.on();
    }
}

pub struct LightOffCommand {
    light: Rc<Light>,
}

impl LightOffCommand {
    pub fn new(light: Rc<Light>) -> Self {
        LightOffCommand { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.off();
    }
}

pub struct LightBlowUpCommand {
    light: Rc<Light>,
}

impl LightBlowUpCommand {
    pub fn new(light: Rc<Light>) -> Self {
        LightBlowUpCommand { light }
    }
}

impl Command for LightBlowUpCommand {
    fn execute(&self) {
        self.light.blow_up();
    }
}

/// The invoker. Slots are not range checked.
#[derive(Default)]
pub struct RemoteControl {
    commands: HashMap<Slot, Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, slot: Slot, command: Box<dyn Command>) {
        if self.commands.insert(slot, command).is_some() {
            debug!("Slot {slot} rebound");
        } else {
            debug!("Slot {slot} bound");
        }
    }

    /// Returns whether a command was executed. Pressing an unbound slot does nothing.
    pub fn press_button(&self, slot: Slot) -> bool {
        match self.commands.get(&slot) {
            Some(command) => {
                debug!("Slot {slot} pressed");
                command.execute();
                true
            }
            None => {
                debug!("Slot {slot} pressed but nothing is bound");
                false
            }
        }
    }

    pub fn bound_slots(&self) -> Vec<Slot> {
        let mut slots = self.commands.keys().copied().collect::<Vec<_>>();
        slots.sort_unstable();
        slots
    }
}

pub fn usage_example(output: Rc<dyn Output>) {
    let living_room = Rc::new(Light::new("Living room", output.clone()));
    let kitchen = Rc::new(Light::new("Kitchen", output.clone()));

    let mut remote = RemoteControl::new();
    remote.set_command(0, Box::new(LightOnCommand::new(living_room.clone())));
    remote.set_command(1, Box::new(LightOffCommand::new(living_room.clone())));
    remote.set_command(2, Box::new(LightOnCommand::new(kitchen.clone())));
    remote.set_command(3, Box::new(LightOffCommand::new(kitchen.clone())));

    output.write_line("-- Evening routine --");
    remote.press_button(0);
    remote.press_button(2);
    remote.press_button(3);
    remote.press_button(1);

    output.write_line("-- Kitchen slot rewired to something unwise --");
    remote.set_command(2, Box::new(LightBlowUpCommand::new(kitchen)));
    remote.press_button(2);

    output.write_line("-- Nothing bound to slot 9 --");
    remote.press_button(9);
}
