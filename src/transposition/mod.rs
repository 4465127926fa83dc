//! Transposition ciphers: the letters stay, their order changes.

pub mod columnar;
pub mod rail_fence;
