use glob_math::Vector;

// Node construction defaults
pub const DEFAULT_NODE_RADIUS: f64 = 25.;
pub const DEFAULT_NODE_NAME: &str = "Node";

// Glob construction defaults
pub const DEFAULT_GLOB_NAME: &str = "Glob";
pub const DEFAULT_START_POINT: Vector = Vector::new(0., 0.);
pub const DEFAULT_END_POINT: Vector = Vector::new(100., 100.);

pub const DEFAULT_Z_INDEX: i32 = 1;
