// User domain module
// Users are read-only here: registration and login live outside this service

pub mod value_objects;

pub use value_objects::{Email, Username};
