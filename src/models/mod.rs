//! PokeAPI model types.

mod species;

pub use species::Species;
