use crate::{DocumentError, Glob, GlobId, GlobOptions, Node, NodeId, NodeOptions, Registry, ScriptError};
use glob_math::GlobPoints;

/// Anything that can populate a document through a [`Scope`].
///
/// The hosting mechanism is up to the implementor: a Rust closure, the [`CommandList`](crate::CommandList) interpreter,
/// or an embedded language binding. The geometry core only sees what ends up in the scope.
pub trait Script {
	fn run(&self, scope: &mut Scope) -> Result<(), ScriptError>;
}

impl<F> Script for F
where
	F: Fn(&mut Scope) -> Result<(), ScriptError>,
{
	fn run(&self, scope: &mut Scope) -> Result<(), ScriptError> {
		self(scope)
	}
}

/// The capabilities handed to a running script: node and glob factories plus read access to what it has built so far.
///
/// Every evaluation pass starts from an empty scope.
#[derive(Debug, Default)]
pub struct Scope {
	registry: Registry,
}

impl Scope {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub fn node(&mut self, options: NodeOptions) -> NodeId {
		self.registry.add_node(options)
	}

	pub fn glob(&mut self, options: GlobOptions) -> Result<GlobId, DocumentError> {
		self.registry.add_glob(options)
	}

	pub fn destroy_node(&mut self, id: &NodeId) -> Result<(), DocumentError> {
		self.registry.destroy_node(id).map(drop)
	}

	pub fn destroy_glob(&mut self, id: &GlobId) -> Result<(), DocumentError> {
		self.registry.destroy_glob(id).map(drop)
	}

	pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
		self.registry.node(id)
	}

	pub fn get_glob(&self, id: &GlobId) -> Option<&Glob> {
		self.registry.glob(id)
	}

	pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
		self.registry.node_mut(id)
	}

	pub fn glob_mut(&mut self, id: &GlobId) -> Option<&mut Glob> {
		self.registry.glob_mut(id)
	}

	pub fn glob_points(&self, id: &GlobId) -> Result<GlobPoints, DocumentError> {
		self.registry.glob_points(id)
	}

	pub(crate) fn into_registry(self) -> Registry {
		self.registry
	}
}
