// Module exports for services

pub mod appearance;
pub mod grid;
pub mod settings;
