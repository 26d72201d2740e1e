use std::rc::Rc;

use common::{
    output::Output,
    subject_observer::{
        Observer, ObserverResult, SharedObserver, SharedObservers, Subject, SubjectError,
        SubjectResult,
    },
};
use log::{debug, trace};

pub const GREETING: &str = "Hello, observers!";

#[derive(Default)]
pub struct MessageSubject {
    observers: SharedObservers<Self, String>,
}

impl MessageSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Subject<String> for MessageSubject {
    fn attach(&mut self, observer: SharedObserver<Self, String>) {
        self.observers.push(observer);
        debug!("Observer attached, {} attached", self.observers.len());
    }

    fn detach(&mut self, observer: &SharedObserver<Self, String>) -> SubjectResult {
        let index = self
            .observers
            .iter()
            .position(|obs| Rc::ptr_eq(obs, observer))
            .ok_or(SubjectError::ObserverNotFound)?;
        self.observers.remove(index);
        debug!("Observer detached, {} attached", self.observers.len());
        Ok(())
    }

    fn notify(&self, event: String) -> SubjectResult {
        trace!("Notifying {} observers of {:?}", self.observers.len(), event);
        for obs in &self.observers {
            obs.update(self, event.clone())?;
        }
        Ok(())
    }
}

pub struct ConcreteObserver {
    name: String,
    output: Rc<dyn Output>,
}

impl ConcreteObserver {
    pub fn new(name: impl Into<String>, output: Rc<dyn Output>) -> Self {
        ConcreteObserver {
            name: name.into(),
            output,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer<MessageSubject, String> for ConcreteObserver {
    fn update(&self, _: &MessageSubject, event: String) -> ObserverResult {
        self.output
            .write_line(&format!("{} received message: {}", self.name, event));
        Ok(())
    }
}

pub fn usage_example(subject: &mut MessageSubject, output: Rc<dyn Output>) -> SubjectResult {
    let observers: Vec<SharedObserver<MessageSubject, String>> = (1..=3)
        .map(|i| -> SharedObserver<MessageSubject, String> {
            Rc::new(ConcreteObserver::new(format!("Observer {i}"), output.clone()))
        })
        .collect();

    for observer in &observers {
        subject.attach(observer.clone());
    }
    subject.notify(GREETING.to_string())?;

    subject.detach(&observers[1])?;
    subject.notify("Observer 2 detached".to_string())
}
