use crate::tangent::{Side, circle_tangent_to_point};
use crate::utils::sweep;
use crate::{Bounds, GeometryError, Vector, common_bounds, cubic_bezier_bounds};

use log::trace;
use serde::{Deserialize, Serialize};

/// The inputs that fully determine the shape of a glob: its two circles, its two control points and its four handle blends.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GlobShape {
	/// Center of the start circle.
	pub start_center: Vector,
	pub start_radius: f64,
	/// Center of the end circle.
	pub end_center: Vector,
	pub end_radius: f64,
	/// Control point pulling the outer curve.
	pub d: Vector,
	/// Control point pulling the inner curve.
	pub dp: Vector,
	/// Handle blend toward `d` at the start of the outer curve.
	pub a: f64,
	/// Handle blend toward `d` at the end of the outer curve.
	pub b: f64,
	/// Handle blend toward `dp` at the start of the inner curve.
	pub ap: f64,
	/// Handle blend toward `dp` at the end of the inner curve.
	pub bp: f64,
}

/// Every point derived for a glob, alongside the inputs it was derived from.
///
/// The outer curve runs `e0 → f0 → f1 → e1` and the inner curve `e0p → f0p → f1p → e1p`.
/// A normal is `None` only when its direction is undefined: both tangent points of that end coincide with its center
/// and the two centers coincide as well. The curves and bounds are always defined.
/// Serialized field names follow the document format (`C0`, `E0p`, `N1`, ...).
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GlobPoints {
	#[serde(rename = "C0")]
	pub c0: Vector,
	pub r0: f64,
	#[serde(rename = "C1")]
	pub c1: Vector,
	pub r1: f64,
	#[serde(rename = "D")]
	pub d: Vector,
	#[serde(rename = "Dp")]
	pub dp: Vector,
	#[serde(rename = "E0")]
	pub e0: Vector,
	#[serde(rename = "E0p")]
	pub e0p: Vector,
	#[serde(rename = "E1")]
	pub e1: Vector,
	#[serde(rename = "E1p")]
	pub e1p: Vector,
	#[serde(rename = "F0")]
	pub f0: Vector,
	#[serde(rename = "F0p")]
	pub f0p: Vector,
	#[serde(rename = "F1")]
	pub f1: Vector,
	#[serde(rename = "F1p")]
	pub f1p: Vector,
	#[serde(rename = "N0")]
	pub n0: Option<Vector>,
	#[serde(rename = "N0p")]
	pub n0p: Option<Vector>,
	#[serde(rename = "N1")]
	pub n1: Option<Vector>,
	#[serde(rename = "N1p")]
	pub n1p: Option<Vector>,
}

impl GlobPoints {
	/// Anchors and handles of the outer curve, in order.
	pub fn outer_curve(&self) -> [Vector; 4] {
		[self.e0, self.f0, self.f1, self.e1]
	}

	/// Anchors and handles of the inner curve, in order.
	pub fn inner_curve(&self) -> [Vector; 4] {
		[self.e0p, self.f0p, self.f1p, self.e1p]
	}

	/// The normals `[n0, n0p, n1, n1p]`, or [`GeometryError::ZeroLength`] if any of them is undefined.
	pub fn normals(&self) -> Result<[Vector; 4], GeometryError> {
		match (self.n0, self.n0p, self.n1, self.n1p) {
			(Some(n0), Some(n0p), Some(n1), Some(n1p)) => Ok([n0, n0p, n1, n1p]),
			_ => Err(GeometryError::ZeroLength),
		}
	}

	/// The union of the bounds of both curves and both circles.
	pub fn bounds(&self) -> Bounds {
		let [p0, c0, c1, p1] = self.outer_curve();
		let outer = cubic_bezier_bounds(p0, c0, c1, p1);
		let [p0, c0, c1, p1] = self.inner_curve();
		let inner = cubic_bezier_bounds(p0, c0, c1, p1);

		let boxes = [outer, inner, Bounds::from_circle(self.c0, self.r0), Bounds::from_circle(self.c1, self.r1)];
		common_bounds(&boxes).unwrap_or(outer)
	}
}

/// Resolve a pair of tangent candidates at one end of the glob.
///
/// A missing candidate takes the value of the other one so the ribbon pinches to a single point,
/// and when both are missing the ribbon collapses to the circle's center.
fn resolve_tangent_pair(center: Vector, outer: Option<Vector>, inner: Option<Vector>) -> (Vector, Vector) {
	match (outer, inner) {
		(Some(outer), Some(inner)) => (outer, inner),
		(Some(outer), None) => {
			trace!("Inner tangent toward the control point is undefined at {center}, pinching to the outer tangent");
			(outer, outer)
		}
		(None, Some(inner)) => {
			trace!("Outer tangent toward the control point is undefined at {center}, pinching to the inner tangent");
			(inner, inner)
		}
		(None, None) => {
			trace!("Both tangents are undefined at {center}, collapsing to the center");
			(center, center)
		}
	}
}

/// Unit direction of an end normal, falling back to the line of centers when the tangent midpoint sits on the center.
fn end_normal(direction: Vector, along_centers: Vector) -> Option<Vector> {
	direction
		.try_uni()
		.or_else(|_| {
			trace!("Tangent midpoint coincides with the center, orienting the normal along the centers");
			along_centers.try_uni()
		})
		.ok()
}

/// Derive the tangent points, bezier handles and end normals of a glob.
///
/// The derivation is a pure function of `shape` and never fails: expected degeneracies fall back as described on
/// [`GlobPoints`], and only a normal with no defined direction is left as `None`.
pub fn glob_points(shape: &GlobShape) -> GlobPoints {
	let GlobShape {
		start_center: c0,
		start_radius: r0,
		end_center: c1,
		end_radius: r1,
		d,
		dp,
		a,
		b,
		ap,
		bp,
	} = *shape;

	// Tangent points of both circles toward both control points
	let (e0, e0p) = resolve_tangent_pair(c0, circle_tangent_to_point(c0, r0, d, Side::Positive), circle_tangent_to_point(c0, r0, dp, Side::Negative));
	let (e1, e1p) = resolve_tangent_pair(c1, circle_tangent_to_point(c1, r1, d, Side::Negative), circle_tangent_to_point(c1, r1, dp, Side::Positive));

	// Bezier handles
	let f0 = e0.lrp(d, a);
	let f1 = e1.lrp(d, b);
	let f0p = e0p.lrp(dp, ap);
	let f1p = e1p.lrp(dp, bp);

	// Inner and outer normals
	let along_centers = c0 - c1;
	let mut n0 = end_normal(c0 - e0.med(e0p), along_centers);
	let mut n0p = n0.map(|normal| -normal);
	let mut n1 = end_normal(e1.med(e1p) - c1, along_centers);
	let mut n1p = n1.map(|normal| -normal);

	if sweep(c0, e0, e0p) > 0. {
		std::mem::swap(&mut n0, &mut n0p);
	}
	if sweep(c1, e1, e1p) > 0. {
		std::mem::swap(&mut n1, &mut n1p);
	}

	GlobPoints {
		c0,
		r0,
		c1,
		r1,
		d,
		dp,
		e0,
		e0p,
		e1,
		e1p,
		f0,
		f0p,
		f1,
		f1p,
		n0,
		n0p,
		n1,
		n1p,
	}
}
