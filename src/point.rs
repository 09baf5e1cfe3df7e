//! The point/vector type shared by both pipelines.

/// A 2-D position, 32-bit float components.
pub type Point = nalgebra::Point2<f32>;

/// A 2-D displacement, 32-bit float components.
pub type Vector = nalgebra::Vector2<f32>;
