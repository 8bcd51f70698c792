use crate::Vector;

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box given by its minimum and maximum corners.
///
/// Serializes as `{ minX, minY, maxX, maxY, width, height }`; the width and height are derived and ignored when deserializing.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "BoundsRecord", into = "BoundsRecord")]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
		Self { min_x, min_y, max_x, max_y }
	}

	/// The smallest box containing both points, in any order.
	pub fn from_corners(a: Vector, b: Vector) -> Self {
		Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
	}

	/// The square `[center - radius, center + radius]` enclosing a circle.
	pub fn from_circle(center: Vector, radius: f64) -> Self {
		Self::new(center.x - radius, center.y - radius, center.x + radius, center.y + radius)
	}

	pub fn min(&self) -> Vector {
		Vector::new(self.min_x, self.min_y)
	}

	pub fn max(&self) -> Vector {
		Vector::new(self.max_x, self.max_y)
	}

	pub fn width(&self) -> f64 {
		(self.max_x - self.min_x).abs()
	}

	pub fn height(&self) -> f64 {
		(self.max_y - self.min_y).abs()
	}

	pub fn center(&self) -> Vector {
		self.min().med(self.max())
	}

	pub fn contains(&self, point: Vector) -> bool {
		(self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
	}

	/// The union of this box and `other`.
	#[must_use]
	pub fn expanded(self, other: Self) -> Self {
		Self::new(self.min_x.min(other.min_x), self.min_y.min(other.min_y), self.max_x.max(other.max_x), self.max_y.max(other.max_y))
	}

	/// Grows the box just enough to contain `point`.
	#[must_use]
	pub fn including(self, point: Vector) -> Self {
		Self::new(self.min_x.min(point.x), self.min_y.min(point.y), self.max_x.max(point.x), self.max_y.max(point.y))
	}
}

/// The union of two boxes.
pub fn expanded_bounds(a: Bounds, b: Bounds) -> Bounds {
	a.expanded(b)
}

/// The union of all boxes, or `None` when none are given. A single box is returned unchanged.
pub fn common_bounds(bounds: &[Bounds]) -> Option<Bounds> {
	let (first, rest) = bounds.split_first()?;
	Some(rest.iter().fold(*first, |union, next| union.expanded(*next)))
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundsRecord {
	min_x: f64,
	min_y: f64,
	max_x: f64,
	max_y: f64,
	#[serde(default)]
	width: f64,
	#[serde(default)]
	height: f64,
}

impl From<Bounds> for BoundsRecord {
	fn from(bounds: Bounds) -> Self {
		Self {
			min_x: bounds.min_x,
			min_y: bounds.min_y,
			max_x: bounds.max_x,
			max_y: bounds.max_y,
			width: bounds.width(),
			height: bounds.height(),
		}
	}
}

impl From<BoundsRecord> for Bounds {
	fn from(record: BoundsRecord) -> Self {
		Self::new(record.min_x, record.min_y, record.max_x, record.max_y)
	}
}
