use crate::NodeId;
use crate::consts::{DEFAULT_NODE_NAME, DEFAULT_NODE_RADIUS, DEFAULT_Z_INDEX};
use glob_math::{Bounds, Vector};

use serde::{Deserialize, Serialize};

/// How a glob's ribbon ends where it meets a node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cap {
	#[default]
	Round,
	Flat,
}

/// A circle in the document, identified by a [`NodeId`] that never changes over its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub(crate) id: NodeId,
	pub name: String,
	/// Center of the circle.
	pub point: Vector,
	/// Radius of the circle. Non-positive radii are accepted and produce degenerate geometry downstream.
	pub radius: f64,
	pub cap: Cap,
	pub z_index: i32,
	pub locked: bool,
}

impl Node {
	pub(crate) fn from_options(options: NodeOptions) -> Self {
		let point = options.point();
		Self {
			id: NodeId::new(),
			name: options.name.unwrap_or_else(|| DEFAULT_NODE_NAME.to_string()),
			point,
			radius: options.radius.unwrap_or(DEFAULT_NODE_RADIUS),
			cap: options.cap.unwrap_or_default(),
			z_index: options.z_index.unwrap_or(DEFAULT_Z_INDEX),
			locked: options.locked.unwrap_or(false),
		}
	}

	pub fn id(&self) -> &NodeId {
		&self.id
	}

	pub fn x(&self) -> f64 {
		self.point.x
	}

	pub fn y(&self) -> f64 {
		self.point.y
	}

	/// The square `[point - radius, point + radius]`.
	pub fn bounds(&self) -> Bounds {
		Bounds::from_circle(self.point, self.radius)
	}
}

/// Where a new node is placed, as resolved from its [`NodeOptions`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodePosition {
	Coordinates { x: f64, y: f64 },
	Point(Vector),
	Origin,
}

impl NodePosition {
	pub fn to_point(self) -> Vector {
		match self {
			NodePosition::Coordinates { x, y } => Vector::new(x, y),
			NodePosition::Point(point) => point,
			NodePosition::Origin => Vector::ZERO,
		}
	}
}

/// Construction options for a [`Node`]. Every field is optional and falls back to a documented default.
///
/// The position is given either as `x`/`y` coordinates or as a `point`; coordinates win when both are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeOptions {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub x: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub y: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub point: Option<Vector>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub radius: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cap: Option<Cap>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub z_index: Option<i32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub locked: Option<bool>,
}

impl NodeOptions {
	pub fn at(x: f64, y: f64) -> Self {
		Self {
			x: Some(x),
			y: Some(y),
			..Default::default()
		}
	}

	pub fn at_point(point: Vector) -> Self {
		Self {
			point: Some(point),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_radius(mut self, radius: f64) -> Self {
		self.radius = Some(radius);
		self
	}

	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	#[must_use]
	pub fn with_cap(mut self, cap: Cap) -> Self {
		self.cap = Some(cap);
		self
	}

	#[must_use]
	pub fn with_z_index(mut self, z_index: i32) -> Self {
		self.z_index = Some(z_index);
		self
	}

	#[must_use]
	pub fn locked(mut self, locked: bool) -> Self {
		self.locked = Some(locked);
		self
	}

	pub fn position(&self) -> NodePosition {
		match (self.x, self.y, self.point) {
			(None, None, None) => NodePosition::Origin,
			(None, None, Some(point)) => NodePosition::Point(point),
			// A lone coordinate leaves the other at zero
			(x, y, _) => NodePosition::Coordinates {
				x: x.unwrap_or_default(),
				y: y.unwrap_or_default(),
			},
		}
	}

	pub fn point(&self) -> Vector {
		self.position().to_point()
	}
}
