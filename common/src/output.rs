use log::trace;

pub trait Output {
    fn write_line(&self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdOutput;

impl Output for StdOutput {
    fn write_line(&self, line: &str) {
        trace!("stdout <- {line}");
        println!("{line}");
    }
}
