/// Constant used to determine if `f64`s are equivalent.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;
/// A stricter constant used to determine if `f64`s are equivalent.
pub const STRICT_MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-6;

/// Full turn in radians, used to wrap angular distances.
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// Interpolation fraction used for the bezier handles of a glob when none is given.
pub const DEFAULT_BLEND: f64 = 0.5;
