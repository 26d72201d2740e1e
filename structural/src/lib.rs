pub mod decorator;
