use thiserror::Error;

/// Numeric singularities hit while computing glob geometry.
///
/// Expected degeneracies (a tangent with no solution, a monotonic bezier axis) are not errors and are reported with `Option` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
	#[error("Cannot normalize a vector of zero length")]
	ZeroLength,

	#[error("Division by zero")]
	DivisionByZero,
}
