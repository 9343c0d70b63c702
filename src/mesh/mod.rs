//! Meshes of variable size: indexed triangle meshes, per-window ribbon slices and the
//! concatenated payload handed to a renderer.

pub mod payload;
pub mod ribbon;
pub mod trimesh;
