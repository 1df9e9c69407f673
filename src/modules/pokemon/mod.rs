// Pokemon module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{total_pages, CreatePokemonRequest, Pokemon, PokemonPage};
pub use repositories::{MySqlPokemonRepository, PokemonRepository};
pub use services::PokemonService;
