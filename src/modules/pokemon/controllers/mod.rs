pub mod pokemon_controller;

pub use pokemon_controller::configure;
