pub mod command;
pub mod observer;
