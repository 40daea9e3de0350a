//! Turns a pointer gesture into a textured ribbon mesh for drawing as a brush stroke.
//!
//! The pipeline runs in three stages, each a pure function of the previous one:
//!
//! 1. [`simplify`] drops raw input points closer than a minimum distance to the last kept point.
//! 2. [`tessellate`] fits a chain of quadratic Beziers through the key points and samples it into
//!    positions with unit normals.
//! 3. [`ribbon_mesh`] offsets each sample along its normal and stitches the offsets into a quad
//!    strip with U tiled by distance along the stroke.
//!
//! [`Stroke`] ties the stages together behind an append-then-compute interface.

pub mod util;

pub mod engine;
pub use engine::*;

pub mod geom;
