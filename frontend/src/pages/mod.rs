pub mod members;
pub mod settings;
