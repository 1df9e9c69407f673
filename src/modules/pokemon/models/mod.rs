pub mod pokemon;

pub use pokemon::{total_pages, CreatePokemonRequest, Pokemon, PokemonPage};
