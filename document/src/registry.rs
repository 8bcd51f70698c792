use crate::consts::{DEFAULT_END_POINT, DEFAULT_GLOB_NAME, DEFAULT_START_POINT, DEFAULT_Z_INDEX};
use crate::{DocumentError, Glob, GlobId, GlobOptions, GlobRecord, Node, NodeId, NodeOptions, NodeRecord, NodeRef, Snapshot};
use glob_math::consts::DEFAULT_BLEND;
use glob_math::{Bounds, GlobPoints, common_bounds};

use log::debug;
use rustc_hash::FxHashMap;

/// The live set of nodes and globs making up one document.
///
/// Entities are keyed by id and also remember their construction order, which is the order [`Registry::nodes`] and [`Registry::globs`] yield them in.
/// Globs hold their endpoints by id, so destroying a node that a glob still references is allowed and leaves the glob dangling
/// until it is destroyed too. [`Registry::validate`] reports such globs.
#[derive(Clone, Debug, Default)]
pub struct Registry {
	nodes: FxHashMap<NodeId, Node>,
	globs: FxHashMap<GlobId, Glob>,
	node_order: Vec<NodeId>,
	glob_order: Vec<GlobId>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_node(&mut self, options: NodeOptions) -> NodeId {
		self.insert_node(Node::from_options(options))
	}

	fn insert_node(&mut self, node: Node) -> NodeId {
		let id = node.id.clone();
		debug!("Adding node {id} at {} with radius {}", node.point, node.radius);
		if self.nodes.insert(id.clone(), node).is_none() {
			self.node_order.push(id.clone());
		}
		id
	}

	/// Build a glob, creating any endpoint given as [`NodeRef::New`] first (start before end).
	///
	/// Fails with [`DocumentError::NodeNotFound`] when an endpoint refers to a node that is not in this registry.
	/// Endpoints are validated before anything is inserted, so a failed call leaves the registry unchanged.
	pub fn add_glob(&mut self, options: GlobOptions) -> Result<GlobId, DocumentError> {
		let GlobOptions {
			name,
			start,
			end,
			d,
			dp,
			a,
			b,
			ap,
			bp,
			z_index,
		} = options;
		let start = start.unwrap_or_else(|| NodeRef::New(NodeOptions::at_point(DEFAULT_START_POINT)));
		let end = end.unwrap_or_else(|| NodeRef::New(NodeOptions::at_point(DEFAULT_END_POINT)));

		for endpoint in [&start, &end] {
			if let NodeRef::Existing(id) = endpoint
				&& !self.nodes.contains_key(id)
			{
				return Err(DocumentError::NodeNotFound(id.clone()));
			}
		}

		let start = self.resolve_endpoint(start);
		let end = self.resolve_endpoint(end);
		let midpoint = self.nodes[&start].point.med(self.nodes[&end].point);

		let glob = Glob {
			id: GlobId::new(),
			name: name.unwrap_or_else(|| DEFAULT_GLOB_NAME.to_string()),
			start,
			end,
			d: d.unwrap_or(midpoint),
			dp: dp.unwrap_or(midpoint),
			a: a.unwrap_or(DEFAULT_BLEND),
			b: b.unwrap_or(DEFAULT_BLEND),
			ap: ap.unwrap_or(DEFAULT_BLEND),
			bp: bp.unwrap_or(DEFAULT_BLEND),
			z_index: z_index.unwrap_or(DEFAULT_Z_INDEX),
		};
		Ok(self.insert_glob(glob))
	}

	fn resolve_endpoint(&mut self, endpoint: NodeRef) -> NodeId {
		match endpoint {
			NodeRef::Existing(id) => id,
			NodeRef::New(options) => self.add_node(options),
		}
	}

	fn insert_glob(&mut self, glob: Glob) -> GlobId {
		let id = glob.id.clone();
		debug!("Adding glob {id} from node {} to node {}", glob.start, glob.end);
		if self.globs.insert(id.clone(), glob).is_none() {
			self.glob_order.push(id.clone());
		}
		id
	}

	/// Remove a node and return it. Globs referencing it are left in place.
	pub fn destroy_node(&mut self, id: &NodeId) -> Result<Node, DocumentError> {
		let node = self.nodes.remove(id).ok_or_else(|| DocumentError::NodeNotFound(id.clone()))?;
		self.node_order.retain(|other| other != id);
		debug!("Destroyed node {id}");
		Ok(node)
	}

	pub fn destroy_glob(&mut self, id: &GlobId) -> Result<Glob, DocumentError> {
		let glob = self.globs.remove(id).ok_or_else(|| DocumentError::GlobNotFound(id.clone()))?;
		self.glob_order.retain(|other| other != id);
		debug!("Destroyed glob {id}");
		Ok(glob)
	}

	pub fn node(&self, id: &NodeId) -> Option<&Node> {
		self.nodes.get(id)
	}

	pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
		self.nodes.get_mut(id)
	}

	pub fn glob(&self, id: &GlobId) -> Option<&Glob> {
		self.globs.get(id)
	}

	pub fn glob_mut(&mut self, id: &GlobId) -> Option<&mut Glob> {
		self.globs.get_mut(id)
	}

	/// Nodes in construction order.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.node_order.iter().filter_map(|id| self.nodes.get(id))
	}

	/// Globs in construction order.
	pub fn globs(&self) -> impl Iterator<Item = &Glob> {
		self.glob_order.iter().filter_map(|id| self.globs.get(id))
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn glob_count(&self) -> usize {
		self.globs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.globs.is_empty()
	}

	pub fn clear(&mut self) {
		debug!("Clearing {} nodes and {} globs", self.nodes.len(), self.globs.len());
		self.nodes.clear();
		self.globs.clear();
		self.node_order.clear();
		self.glob_order.clear();
	}

	/// Check that every glob's endpoints are alive, reporting the first dangling reference in construction order.
	pub fn validate(&self) -> Result<(), DocumentError> {
		for glob in self.globs() {
			for node in glob.nodes() {
				if !self.nodes.contains_key(node) {
					return Err(DocumentError::MissingEndpoint {
						glob: glob.id.clone(),
						node: node.clone(),
					});
				}
			}
		}
		Ok(())
	}

	pub fn glob_points(&self, id: &GlobId) -> Result<GlobPoints, DocumentError> {
		self.glob(id).ok_or_else(|| DocumentError::GlobNotFound(id.clone()))?.points(self)
	}

	pub fn glob_bounds(&self, id: &GlobId) -> Result<Bounds, DocumentError> {
		self.glob(id).ok_or_else(|| DocumentError::GlobNotFound(id.clone()))?.bounds(self)
	}

	pub fn node_bounds(&self, id: &NodeId) -> Result<Bounds, DocumentError> {
		self.node(id).map(Node::bounds).ok_or_else(|| DocumentError::NodeNotFound(id.clone()))
	}

	/// The union of every node's and every glob's bounds, or `None` for an empty document.
	pub fn document_bounds(&self) -> Result<Option<Bounds>, DocumentError> {
		let mut boxes: Vec<Bounds> = self.nodes().map(Node::bounds).collect();
		for glob in self.globs() {
			boxes.push(glob.bounds(self)?);
		}
		Ok(common_bounds(&boxes))
	}

	/// Flatten the registry into plain records keyed by id. Derived points are not included.
	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			nodes: self.nodes().map(|node| (node.id.clone(), NodeRecord::from(node))).collect(),
			globs: self.globs().map(|glob| (glob.id.clone(), GlobRecord::from(glob))).collect(),
		}
	}

	/// Rebuild a registry from records, keeping their ids.
	///
	/// Records carry no construction order, so entities are inserted by ascending z-index and then id.
	/// Fails with [`DocumentError::MissingEndpoint`] if a glob record names a node that is not among the node records.
	pub fn from_records(snapshot: &Snapshot) -> Result<Self, DocumentError> {
		let mut registry = Self::new();

		let mut nodes: Vec<&NodeRecord> = snapshot.nodes.values().collect();
		nodes.sort_by(|a, b| (a.z_index, &a.id).cmp(&(b.z_index, &b.id)));
		for record in nodes {
			registry.insert_node(Node::from(record));
		}

		let mut globs: Vec<&GlobRecord> = snapshot.globs.values().collect();
		globs.sort_by(|a, b| (a.z_index, &a.id).cmp(&(b.z_index, &b.id)));
		for record in globs {
			registry.insert_glob(Glob::from(record));
		}

		registry.validate()?;
		Ok(registry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glob_math::Vector;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_construction_order_is_kept() {
		let mut registry = Registry::new();
		let ids: Vec<NodeId> = (0..5).map(|i| registry.add_node(NodeOptions::at(i as f64, 0.))).collect();

		assert_eq!(registry.nodes().map(Node::id).collect::<Vec<_>>(), ids.iter().collect::<Vec<_>>());

		registry.destroy_node(&ids[2]).unwrap();
		assert_eq!(registry.nodes().map(Node::id).collect::<Vec<_>>(), [&ids[0], &ids[1], &ids[3], &ids[4]]);
	}

	#[test]
	fn test_glob_defaults() {
		let mut registry = Registry::new();
		let glob = registry.add_glob(GlobOptions::default()).unwrap();
		let glob = registry.glob(&glob).unwrap();

		let start = registry.node(glob.start()).unwrap();
		let end = registry.node(glob.end()).unwrap();
		assert_eq!((start.point, start.radius), (Vector::new(0., 0.), 25.));
		assert_eq!((end.point, end.radius), (Vector::new(100., 100.), 25.));

		assert_eq!(glob.name, "Glob");
		assert_eq!(glob.d, Vector::new(50., 50.));
		assert_eq!(glob.dp, Vector::new(50., 50.));
		assert_eq!([glob.a, glob.b, glob.ap, glob.bp], [0.5; 4]);
		assert_eq!(glob.z_index, 1);

		// The start node is created before the end node
		assert_eq!(registry.nodes().map(Node::id).collect::<Vec<_>>(), glob.nodes());
	}

	#[test]
	fn test_unknown_endpoint_leaves_registry_unchanged() {
		let mut registry = Registry::new();
		let missing = NodeId::from("7");

		let result = registry.add_glob(GlobOptions::between(NodeOptions::at(0., 0.), missing.clone()));

		assert_eq!(result, Err(DocumentError::NodeNotFound(missing)));
		assert!(registry.is_empty());
	}

	#[test]
	fn test_destroying_unknown_entities() {
		let mut registry = Registry::new();
		let (node, glob) = (NodeId::from("1"), GlobId::from("1"));
		assert_eq!(registry.destroy_node(&node), Err(DocumentError::NodeNotFound(node)));
		assert_eq!(registry.destroy_glob(&glob), Err(DocumentError::GlobNotFound(glob.clone())));
		assert_eq!(registry.glob_points(&glob), Err(DocumentError::GlobNotFound(glob)));
	}

	#[test]
	fn test_validate_reports_dangling_globs() {
		let mut registry = Registry::new();
		let start = registry.add_node(NodeOptions::at(0., 0.));
		let end = registry.add_node(NodeOptions::at(100., 0.));
		let glob = registry.add_glob(GlobOptions::between(start.clone(), end)).unwrap();
		assert_eq!(registry.validate(), Ok(()));

		registry.destroy_node(&start).unwrap();
		assert_eq!(registry.validate(), Err(DocumentError::MissingEndpoint { glob: glob.clone(), node: start }));

		registry.destroy_glob(&glob).unwrap();
		assert_eq!(registry.validate(), Ok(()));
	}

	#[test]
	fn test_bounds() {
		let mut registry = Registry::new();
		assert_eq!(registry.document_bounds(), Ok(None));

		let start = registry.add_node(NodeOptions::at(0., 0.).with_radius(25.));
		let end = registry.add_node(NodeOptions::at(100., 100.).with_radius(25.));
		let lone = registry.add_node(NodeOptions::at(300., 0.).with_radius(10.));
		let glob = registry
			.add_glob(GlobOptions::between(start, end).with_control_points(Vector::new(50., 150.), Vector::new(50., -50.)))
			.unwrap();

		assert_eq!(registry.node_bounds(&lone), Ok(Bounds::new(290., -10., 310., 10.)));
		assert_eq!(registry.glob_bounds(&glob), Ok(Bounds::new(-25., -25., 125., 125.)));
		assert_eq!(registry.document_bounds(), Ok(Some(Bounds::new(-25., -25., 310., 125.))));
	}

	#[test]
	fn test_clear() {
		let mut registry = Registry::new();
		registry.add_glob(GlobOptions::default()).unwrap();
		registry.clear();

		assert!(registry.is_empty());
		assert_eq!(registry.nodes().count(), 0);
		assert_eq!(registry.globs().count(), 0);
	}
}
