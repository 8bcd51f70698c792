use crate::{Cap, Glob, GlobId, Node, NodeId};
use glob_math::Vector;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Tags a node record with its canvas item kind. Glob records carry no tag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasItem {
	#[default]
	Node,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
	pub id: NodeId,
	pub name: String,
	#[serde(rename = "type", default)]
	pub item_type: CanvasItem,
	pub point: Vector,
	pub radius: f64,
	pub z_index: i32,
	pub cap: Cap,
	pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobRecord {
	pub id: GlobId,
	pub name: String,
	/// Start and end node ids, in that order.
	pub nodes: [NodeId; 2],
	#[serde(rename = "D")]
	pub d: Vector,
	#[serde(rename = "Dp")]
	pub dp: Vector,
	pub a: f64,
	pub b: f64,
	pub ap: f64,
	pub bp: f64,
	pub z_index: i32,
}

/// The plain-data result of an evaluation: every node and glob record keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
	pub nodes: FxHashMap<NodeId, NodeRecord>,
	pub globs: FxHashMap<GlobId, GlobRecord>,
}

impl Snapshot {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.globs.is_empty()
	}
}

impl From<&Node> for NodeRecord {
	fn from(node: &Node) -> Self {
		Self {
			id: node.id.clone(),
			name: node.name.clone(),
			item_type: CanvasItem::Node,
			point: node.point,
			radius: node.radius,
			z_index: node.z_index,
			cap: node.cap,
			locked: node.locked,
		}
	}
}

impl From<&NodeRecord> for Node {
	fn from(record: &NodeRecord) -> Self {
		Self {
			id: record.id.clone(),
			name: record.name.clone(),
			point: record.point,
			radius: record.radius,
			cap: record.cap,
			z_index: record.z_index,
			locked: record.locked,
		}
	}
}

impl From<&Glob> for GlobRecord {
	fn from(glob: &Glob) -> Self {
		Self {
			id: glob.id.clone(),
			name: glob.name.clone(),
			nodes: [glob.start.clone(), glob.end.clone()],
			d: glob.d,
			dp: glob.dp,
			a: glob.a,
			b: glob.b,
			ap: glob.ap,
			bp: glob.bp,
			z_index: glob.z_index,
		}
	}
}

impl From<&GlobRecord> for Glob {
	fn from(record: &GlobRecord) -> Self {
		let [start, end] = record.nodes.clone();
		Self {
			id: record.id.clone(),
			name: record.name.clone(),
			start,
			end,
			d: record.d,
			dp: record.dp,
			a: record.a,
			b: record.b,
			ap: record.ap,
			bp: record.bp,
			z_index: record.z_index,
		}
	}
}
