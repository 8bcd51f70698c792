use crate::{DocumentError, GlobId, GlobOptions, NodeId, NodeOptions, NodeRef, Scope, Script, ScriptError};
use glob_math::Vector;

use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Limits applied when interpreting a [`CommandList`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationOptions {
	/// Maximum number of commands executed before the script is aborted. `None` is unlimited.
	pub max_commands: Option<usize>,
}

/// A glob endpoint in a command: the label of a node built earlier in the list, or options for a new node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
	Label(String),
	New(NodeOptions),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
	Node {
		#[serde(default)]
		label: Option<String>,
		#[serde(default)]
		options: NodeOptions,
	},
	#[serde(rename_all = "camelCase")]
	Glob {
		#[serde(default)]
		label: Option<String>,
		#[serde(default)]
		name: Option<String>,
		#[serde(default)]
		start: Option<NodeSpec>,
		#[serde(default)]
		end: Option<NodeSpec>,
		#[serde(default, rename = "D")]
		d: Option<Vector>,
		#[serde(default, rename = "Dp")]
		dp: Option<Vector>,
		#[serde(default)]
		a: Option<f64>,
		#[serde(default)]
		b: Option<f64>,
		#[serde(default)]
		ap: Option<f64>,
		#[serde(default)]
		bp: Option<f64>,
		#[serde(default)]
		z_index: Option<i32>,
	},
	DestroyNode {
		node: String,
	},
	DestroyGlob {
		glob: String,
	},
	/// Move a node's center.
	Move {
		node: String,
		to: Vector,
	},
	Resize {
		node: String,
		radius: f64,
	},
}

/// A structured script: a list of commands that build a document, referring back to earlier entities by label.
///
/// ```json
/// { "commands": [
///     { "node": { "label": "hub", "options": { "x": 0, "y": 0, "radius": 50 } } },
///     { "node": { "label": "spoke", "options": { "point": [200, 0] } } },
///     { "glob": { "start": "hub", "end": "spoke", "D": [100, 80] } }
/// ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandList {
	pub commands: Vec<Command>,
	#[serde(skip)]
	pub options: EvaluationOptions,
}

impl CommandList {
	pub fn new(commands: Vec<Command>) -> Self {
		Self {
			commands,
			options: EvaluationOptions::default(),
		}
	}

	#[must_use]
	pub fn with_options(mut self, options: EvaluationOptions) -> Self {
		self.options = options;
		self
	}

	pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(source)
	}

	pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
		ron::from_str(source)
	}
}

/// Label bookkeeping for one run of a command list.
#[derive(Default)]
struct Labels {
	nodes: FxHashMap<String, NodeId>,
	globs: FxHashMap<String, GlobId>,
}

impl Labels {
	fn ensure_free(&self, label: &str) -> Result<(), ScriptError> {
		if self.nodes.contains_key(label) || self.globs.contains_key(label) {
			return Err(ScriptError::DuplicateLabel(label.to_string()));
		}
		Ok(())
	}

	fn node(&self, label: &str) -> Result<NodeId, ScriptError> {
		self.nodes.get(label).cloned().ok_or_else(|| ScriptError::UnknownLabel(label.to_string()))
	}

	fn glob(&self, label: &str) -> Result<GlobId, ScriptError> {
		self.globs.get(label).cloned().ok_or_else(|| ScriptError::UnknownLabel(label.to_string()))
	}

	fn endpoint(&self, spec: Option<&NodeSpec>) -> Result<Option<NodeRef>, ScriptError> {
		Ok(match spec {
			None => None,
			Some(NodeSpec::Label(label)) => Some(NodeRef::Existing(self.node(label)?)),
			Some(NodeSpec::New(options)) => Some(NodeRef::New(options.clone())),
		})
	}
}

impl Script for CommandList {
	fn run(&self, scope: &mut Scope) -> Result<(), ScriptError> {
		let mut labels = Labels::default();

		for (index, command) in self.commands.iter().enumerate() {
			if let Some(max_commands) = self.options.max_commands
				&& index >= max_commands
			{
				return Err(ScriptError::StepBudgetExceeded(max_commands));
			}
			trace!("Running command {index}: {command:?}");

			match command {
				Command::Node { label, options } => {
					if let Some(label) = label {
						labels.ensure_free(label)?;
					}
					let id = scope.node(options.clone());
					if let Some(label) = label {
						labels.nodes.insert(label.clone(), id);
					}
				}
				Command::Glob {
					label,
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
				} => {
					if let Some(label) = label {
						labels.ensure_free(label)?;
					}
					let options = GlobOptions {
						name: name.clone(),
						start: labels.endpoint(start.as_ref())?,
						end: labels.endpoint(end.as_ref())?,
						d: *d,
						dp: *dp,
						a: *a,
						b: *b,
						ap: *ap,
						bp: *bp,
						z_index: *z_index,
					};
					let id = scope.glob(options)?;
					if let Some(label) = label {
						labels.globs.insert(label.clone(), id);
					}
				}
				Command::DestroyNode { node } => scope.destroy_node(&labels.node(node)?)?,
				Command::DestroyGlob { glob } => scope.destroy_glob(&labels.glob(glob)?)?,
				Command::Move { node, to } => {
					let id = labels.node(node)?;
					let node = scope.node_mut(&id).ok_or(DocumentError::NodeNotFound(id))?;
					node.point = *to;
				}
				Command::Resize { node, radius } => {
					let id = labels.node(node)?;
					let node = scope.node_mut(&id).ok_or(DocumentError::NodeNotFound(id))?;
					node.radius = *radius;
				}
			}
		}

		debug!("Command list ran {} commands", self.commands.len());
		Ok(())
	}
}
