//! Glob-math: the geometry core behind two-node glob shapes.
//!
//! A glob joins two circles with a pair of cubic bezier curves whose handles are pulled toward two free control points.
//! This crate holds the pure math: the [`Vector`] value type, axis-aligned [`Bounds`], the tangent circle solver, cubic bezier bounds,
//! and the derivation of a glob's full point set from its two circles and parameters.
#[cfg(test)]
pub(crate) mod compare;

mod bezier;
mod bounds;
pub mod consts;
mod error;
mod glob;
mod tangent;
mod utils;
mod vector;

pub use bezier::{cubic_bezier_bounds, cubic_bezier_evaluate};
pub use bounds::{Bounds, common_bounds, expanded_bounds};
pub use error::GeometryError;
pub use glob::{GlobPoints, GlobShape, glob_points};
pub use tangent::{Side, circle_tangent_to_point};
pub use utils::{bez1d, short_angle_dist, solve_linear, solve_quadratic, sweep};
pub use vector::Vector;
