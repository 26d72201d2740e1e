pub mod output;
pub mod subject_observer;
