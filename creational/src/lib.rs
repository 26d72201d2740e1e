pub mod abstract_factory;
pub mod builder;
