//! Domain layer: entities and collaborator contracts.

pub mod collaborators;
pub mod entities;
