// Species Datagen Schema - Shared type definitions
// This crate holds the authored document shapes and the enumerations that the
// compiler and its tests agree on, kept apart from the encoding engine.

// Re-export the main types
pub use constants::*;
pub use evolution::*;
pub use species_data::*;
pub use sprite_data::*;
pub use tutor_schema::*;

pub mod constants;
pub mod evolution;
pub mod species_data;
pub mod sprite_data;
pub mod tutor_schema;
