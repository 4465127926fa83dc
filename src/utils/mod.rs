//! Shared helpers: alphabet positions, modular arithmetic and text
//! normalisation.

pub mod alphabet;
pub mod modular;
pub mod text;
