//! Output writers for transformed metacards.
pub mod metadata;
