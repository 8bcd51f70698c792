use crate::{GlobOptions, NodeOptions, Scope, Script, ScriptError};
use glob_math::Vector;

/// The starter document: five nodes, the first four chained together by three globs.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultDocument;

impl Script for DefaultDocument {
	fn run(&self, scope: &mut Scope) -> Result<(), ScriptError> {
		let nodes = [((300., 100.), 50., 0), ((500., 300.), 25., 1), ((400., 350.), 10., 1), ((300., 350.), 20., 1), ((500., 550.), 50., 1)]
			.into_iter()
			.enumerate()
			.map(|(index, ((x, y), radius, z_index))| scope.node(NodeOptions::at(x, y).with_radius(radius).with_z_index(z_index).with_name(format!("Node {index}"))))
			.collect::<Vec<_>>();

		let globs = [
			((0, 1), Vector::new(600., 150.), Vector::new(500., 150.), 2),
			((1, 2), Vector::new(650., 450.), Vector::new(620., 400.), 2),
			((2, 3), Vector::new(250., 550.), Vector::new(220., 500.), 3),
		];
		for (index, ((start, end), d, dp, z_index)) in globs.into_iter().enumerate() {
			let options = GlobOptions::between(nodes[start].clone(), nodes[end].clone())
				.with_control_points(d, dp)
				.with_z_index(z_index)
				.with_name(format!("Glob {index}"));
			scope.glob(options)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Evaluator;

	#[test]
	fn test_default_document_derives_every_glob() {
		let mut evaluator = Evaluator::new();
		let snapshot = evaluator.evaluate(&DefaultDocument).unwrap();
		let registry = evaluator.registry();

		assert_eq!(snapshot.nodes.len(), 5);
		assert_eq!(snapshot.globs.len(), 3);
		for glob in registry.globs() {
			let normals = glob.normals(registry).unwrap();
			assert!(normals.iter().all(|normal| normal.is_finite()));
		}
		assert!(registry.document_bounds().unwrap().is_some());
	}

	#[test]
	fn test_default_document_names_and_layers() {
		let mut evaluator = Evaluator::new();
		evaluator.evaluate(&DefaultDocument).unwrap();
		let registry = evaluator.registry();

		let names: Vec<&str> = registry.globs().map(|glob| glob.name.as_str()).collect();
		assert_eq!(names, ["Glob 0", "Glob 1", "Glob 2"]);
		let layers: Vec<i32> = registry.nodes().map(|node| node.z_index).collect();
		assert_eq!(layers, [0, 1, 1, 1, 1]);
	}
}
