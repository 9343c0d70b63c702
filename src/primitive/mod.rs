//! This module contains the primitive geometry types.
//!
//! We define primitive geometry as any geometry of O(1) complexity, such as points, rays,
//! segments, triangles, window frames and axis-aligned bounding boxes.
//!
//! Meshes and ribbons are of variable complexity and live in [`crate::mesh`].

pub mod aabb;
pub mod frame;
pub mod ray;
pub mod segment;
pub mod triangle;
