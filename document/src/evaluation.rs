use crate::{EvaluationError, Registry, Scope, Script, Snapshot};

use log::{info, warn};

/// Owns the committed document and replaces it wholesale on every successful evaluation pass.
#[derive(Debug, Default)]
pub struct Evaluator {
	registry: Registry,
}

impl Evaluator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from an already committed document, such as one rebuilt with [`Registry::from_records`].
	pub fn with_registry(registry: Registry) -> Self {
		Self { registry }
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn snapshot(&self) -> Snapshot {
		self.registry.snapshot()
	}

	/// Run `script` against an empty scope and commit what it built.
	///
	/// The pass is rejected if the script fails or leaves a glob whose endpoint was destroyed. A rejected pass leaves the previously
	/// committed document untouched.
	pub fn evaluate<S: Script + ?Sized>(&mut self, script: &S) -> Result<Snapshot, EvaluationError> {
		let mut scope = Scope::new();
		if let Err(error) = script.run(&mut scope) {
			warn!("Rejected evaluation, script failed: {error}");
			return Err(error.into());
		}

		let registry = scope.into_registry();
		if let Err(error) = registry.validate() {
			warn!("Rejected evaluation: {error}");
			return Err(error.into());
		}

		let snapshot = registry.snapshot();
		info!("Committed document with {} nodes and {} globs", registry.node_count(), registry.glob_count());
		self.registry = registry;
		Ok(snapshot)
	}
}

/// Evaluate `script` into a fresh document and return its snapshot.
pub fn evaluate<S: Script + ?Sized>(script: &S) -> Result<Snapshot, EvaluationError> {
	Evaluator::new().evaluate(script)
}
