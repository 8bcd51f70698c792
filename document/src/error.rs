use crate::{GlobId, NodeId};
use glob_math::GeometryError;

use thiserror::Error;

/// Failures raised by the registry and by geometry derivation on its entities.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DocumentError {
	#[error("Glob {glob} references node {node}, which no longer exists")]
	MissingEndpoint { glob: GlobId, node: NodeId },

	#[error("Node {0} not found")]
	NodeNotFound(NodeId),

	#[error("Glob {0} not found")]
	GlobNotFound(GlobId),

	#[error("Degenerate geometry: {0}")]
	Geometry(#[from] GeometryError),
}

/// Failures raised while a script populates a scope.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScriptError {
	#[error("Unknown label `{0}`")]
	UnknownLabel(String),

	#[error("Label `{0}` is already in use")]
	DuplicateLabel(String),

	#[error("Script exceeded its budget of {0} commands")]
	StepBudgetExceeded(usize),

	#[error("{0}")]
	Document(#[from] DocumentError),

	#[error("{0}")]
	Custom(String),
}

/// Why an evaluation pass was rejected. The previously committed document is kept in either case.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvaluationError {
	#[error("Script failed: {0}")]
	Script(#[from] ScriptError),

	#[error("Invalid document: {0}")]
	Document(#[from] DocumentError),
}
