//! Game implementations on top of the engine core.

pub mod skipbo;
