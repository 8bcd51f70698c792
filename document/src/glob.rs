use crate::{DocumentError, GlobId, Node, NodeId, NodeOptions, Registry};
use glob_math::{Bounds, GlobPoints, GlobShape, Vector, glob_points};

use log::trace;
use serde::{Deserialize, Serialize};

/// A ribbon joining two nodes with an outer and an inner cubic bezier curve.
///
/// A glob only stores its inputs. Its derived points are recomputed from the current state of both endpoint nodes on every query.
#[derive(Clone, Debug, PartialEq)]
pub struct Glob {
	pub(crate) id: GlobId,
	pub name: String,
	pub(crate) start: NodeId,
	pub(crate) end: NodeId,
	/// Control point of the outer curve.
	pub d: Vector,
	/// Control point of the inner curve.
	pub dp: Vector,
	pub a: f64,
	pub b: f64,
	pub ap: f64,
	pub bp: f64,
	pub z_index: i32,
}

impl Glob {
	pub fn id(&self) -> &GlobId {
		&self.id
	}

	pub fn start(&self) -> &NodeId {
		&self.start
	}

	pub fn end(&self) -> &NodeId {
		&self.end
	}

	/// The endpoint ids in order, start first.
	pub fn nodes(&self) -> [&NodeId; 2] {
		[&self.start, &self.end]
	}

	fn endpoint<'a>(&self, registry: &'a Registry, node: &NodeId) -> Result<&'a Node, DocumentError> {
		registry.node(node).ok_or_else(|| DocumentError::MissingEndpoint {
			glob: self.id.clone(),
			node: node.clone(),
		})
	}

	/// Resolve both endpoints in `registry` and gather everything the point derivation needs.
	pub fn shape(&self, registry: &Registry) -> Result<GlobShape, DocumentError> {
		let start = self.endpoint(registry, &self.start)?;
		let end = self.endpoint(registry, &self.end)?;

		Ok(GlobShape {
			start_center: start.point,
			start_radius: start.radius,
			end_center: end.point,
			end_radius: end.radius,
			d: self.d,
			dp: self.dp,
			a: self.a,
			b: self.b,
			ap: self.ap,
			bp: self.bp,
		})
	}

	pub fn points(&self, registry: &Registry) -> Result<GlobPoints, DocumentError> {
		let shape = self.shape(registry)?;
		trace!("Deriving points for glob {} between nodes {} and {}", self.id, self.start, self.end);
		Ok(glob_points(&shape))
	}

	/// The end normals `[n0, n0p, n1, n1p]`. Fails with [`DocumentError::Geometry`] when one has no defined direction.
	pub fn normals(&self, registry: &Registry) -> Result<[Vector; 4], DocumentError> {
		Ok(self.points(registry)?.normals()?)
	}

	pub fn bounds(&self, registry: &Registry) -> Result<Bounds, DocumentError> {
		Ok(self.points(registry)?.bounds())
	}
}

/// An endpoint given to [`GlobOptions`]: either a node that already exists or the options for a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
	Existing(NodeId),
	New(NodeOptions),
}

impl From<NodeId> for NodeRef {
	fn from(id: NodeId) -> Self {
		NodeRef::Existing(id)
	}
}

impl From<NodeOptions> for NodeRef {
	fn from(options: NodeOptions) -> Self {
		NodeRef::New(options)
	}
}

/// Construction options for a [`Glob`].
///
/// A missing `start` becomes a new node at `(0, 0)` and a missing `end` a new node at `(100, 100)`, both with the default radius.
/// Missing control points default to the midpoint of the two centers and missing blends to `0.5`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobOptions {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start: Option<NodeRef>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end: Option<NodeRef>,
	#[serde(rename = "D", skip_serializing_if = "Option::is_none")]
	pub d: Option<Vector>,
	#[serde(rename = "Dp", skip_serializing_if = "Option::is_none")]
	pub dp: Option<Vector>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub a: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub b: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ap: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bp: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub z_index: Option<i32>,
}

impl GlobOptions {
	pub fn between(start: impl Into<NodeRef>, end: impl Into<NodeRef>) -> Self {
		Self {
			start: Some(start.into()),
			end: Some(end.into()),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_control_points(mut self, d: Vector, dp: Vector) -> Self {
		self.d = Some(d);
		self.dp = Some(dp);
		self
	}

	#[must_use]
	pub fn with_blends(mut self, a: f64, b: f64, ap: f64, bp: f64) -> Self {
		(self.a, self.b, self.ap, self.bp) = (Some(a), Some(b), Some(ap), Some(bp));
		self
	}

	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	#[must_use]
	pub fn with_z_index(mut self, z_index: i32) -> Self {
		self.z_index = Some(z_index);
		self
	}
}
