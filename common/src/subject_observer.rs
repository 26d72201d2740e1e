use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Observer {observer} failed: {reason}")]
pub struct ObserverError {
    pub observer: String,
    pub reason: String,
}

impl ObserverError {
    pub fn new(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        ObserverError {
            observer: observer.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubjectError {
    #[error("Observer not found")]
    ObserverNotFound,
    #[error(transparent)]
    Observer(#[from] ObserverError),
}

pub type ObserverResult = Result<(), ObserverError>;

pub type SubjectResult = Result<(), SubjectError>;

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub type SharedObservers<S, E> = Vec<SharedObserver<S, E>>;

pub trait Observer<S, E: Clone> {
    fn update(&self, source: &S, event: E) -> ObserverResult;
}

/// Notification order is attachment order. The same observer may be attached several times.
pub trait Subject<E: Clone>: Sized {
    fn attach(&mut self, observer: SharedObserver<Self, E>);

    /// Removes the first attachment of `observer`, compared by identity.
    fn detach(&mut self, observer: &SharedObserver<Self, E>) -> SubjectResult;

    /// Stops at the first observer failure.
    fn notify(&self, event: E) -> SubjectResult;
}
