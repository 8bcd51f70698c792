use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fern::colors::{Color, ColoredLevelConfig};
use glob_document::{CommandList, DefaultDocument, EvaluationOptions, Evaluator, GlobId, Registry, Snapshot};
use glob_math::{Bounds, GlobPoints};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScriptFormat {
	/// JSON command list
	Json,
	/// RON command list
	Ron,
}

#[derive(Debug, Parser)]
#[command(name = "globs")]
#[command(version)]
#[command(about = "Evaluate glob command lists and print the resulting documents")]
struct Args {
	#[command(subcommand)]
	command: Commands,

	/// Log verbosity written to stderr
	#[arg(long, global = true, default_value = "warn")]
	log_level: log::LevelFilter,

	/// Pretty-print the JSON output
	#[arg(long, global = true)]
	pretty: bool,

	/// Seed for the id generator, for reproducible ids
	#[arg(long, global = true)]
	seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Evaluate a command list and print the document snapshot
	Eval {
		#[command(flatten)]
		script: ScriptArgs,
	},
	/// Evaluate a command list and print the derived points and bounds of every glob
	Points {
		#[command(flatten)]
		script: ScriptArgs,
	},
	/// Print the snapshot of the built-in starter document
	Default,
}

#[derive(Debug, clap::Args)]
struct ScriptArgs {
	/// Path to the command list, or `-` for stdin
	script: PathBuf,

	/// Script encoding (defaults to RON for `.ron` files and JSON otherwise)
	#[arg(short, long, value_enum)]
	format: Option<ScriptFormat>,

	/// Abort the script after this many commands
	#[arg(long)]
	max_commands: Option<usize>,
}

impl ScriptArgs {
	fn format(&self) -> ScriptFormat {
		self.format.unwrap_or_else(|| match self.script.extension().and_then(|extension| extension.to_str()) {
			Some("ron") => ScriptFormat::Ron,
			_ => ScriptFormat::Json,
		})
	}

	fn load(&self) -> Result<CommandList> {
		let source = read_source(&self.script)?;
		let list = match self.format() {
			ScriptFormat::Json => CommandList::from_json(&source).with_context(|| format!("Failed to parse {:?} as a JSON command list", self.script))?,
			ScriptFormat::Ron => CommandList::from_ron(&source).with_context(|| format!("Failed to parse {:?} as a RON command list", self.script))?,
		};
		Ok(list.with_options(EvaluationOptions { max_commands: self.max_commands }))
	}
}

fn read_source(path: &Path) -> Result<String> {
	if path == Path::new("-") {
		let mut source = String::new();
		std::io::stdin().read_to_string(&mut source).context("Failed to read the script from stdin")?;
		return Ok(source);
	}
	std::fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))
}

/// Derived geometry of one glob, as printed by the `points` subcommand.
#[derive(Debug, Serialize)]
struct GlobGeometry {
	id: GlobId,
	name: String,
	points: GlobPoints,
	bounds: Bounds,
}

#[derive(Debug, Serialize)]
struct DocumentGeometry {
	globs: Vec<GlobGeometry>,
	bounds: Option<Bounds>,
}

fn document_geometry(registry: &Registry) -> Result<DocumentGeometry> {
	let globs = registry
		.globs()
		.map(|glob| -> Result<GlobGeometry> {
			let points = glob.points(registry).with_context(|| format!("Failed to derive the points of glob {}", glob.id()))?;
			Ok(GlobGeometry {
				id: glob.id().clone(),
				name: glob.name.clone(),
				bounds: points.bounds(),
				points,
			})
		})
		.collect::<Result<Vec<_>>>()?;
	let bounds = registry.document_bounds().context("Failed to compute the document bounds")?;

	Ok(DocumentGeometry { globs, bounds })
}

fn init_logging(level: log::LevelFilter) -> Result<()> {
	let colors = ColoredLevelConfig::new().debug(Color::Magenta).info(Color::Green).error(Color::Red);

	fern::Dispatch::new()
		.chain(std::io::stderr())
		.level(level)
		.format(move |out, message, record| {
			out.finish(format_args!(
				"[{}]{} {}",
				// This will color the log level only, not the whole line. Just a touch.
				colors.color(record.level()),
				chrono::Utc::now().format("[%Y-%m-%d %H:%M:%S]"),
				message
			))
		})
		.apply()
		.context("Failed to install the logger")
}

fn to_json(value: &impl Serialize, pretty: bool) -> Result<String> {
	let json = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
	json.context("Failed to encode the output as JSON")
}

fn run(args: &Args) -> Result<String> {
	let mut evaluator = Evaluator::new();

	match &args.command {
		Commands::Eval { script } => {
			let list = script.load()?;
			let snapshot: Snapshot = evaluator.evaluate(&list).with_context(|| format!("Failed to evaluate {:?}", script.script))?;
			to_json(&snapshot, args.pretty)
		}
		Commands::Points { script } => {
			let list = script.load()?;
			evaluator.evaluate(&list).with_context(|| format!("Failed to evaluate {:?}", script.script))?;
			to_json(&document_geometry(evaluator.registry())?, args.pretty)
		}
		Commands::Default => {
			let snapshot = evaluator.evaluate(&DefaultDocument).context("Failed to build the default document")?;
			to_json(&snapshot, args.pretty)
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.log_level)?;
	if let Some(seed) = args.seed {
		glob_document::uuid::set_uuid_seed(seed);
	}

	println!("{}", run(&args)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_parse_eval() {
		let args = Args::try_parse_from(["globs", "eval", "scene.ron", "--max-commands", "10", "--pretty"]).unwrap();

		let Commands::Eval { script } = &args.command else { panic!("expected the eval subcommand") };
		assert_eq!(script.script, PathBuf::from("scene.ron"));
		assert_eq!(script.format(), ScriptFormat::Ron);
		assert_eq!(script.max_commands, Some(10));
		assert!(args.pretty);
		assert_eq!(args.log_level, log::LevelFilter::Warn);
	}

	#[test]
	fn test_parse_points_with_explicit_format() {
		let args = Args::try_parse_from(["globs", "--log-level", "debug", "points", "-", "--format", "json"]).unwrap();

		let Commands::Points { script } = &args.command else { panic!("expected the points subcommand") };
		assert_eq!(script.format(), ScriptFormat::Json);
		assert_eq!(args.log_level, log::LevelFilter::Debug);
	}

	#[test]
	fn test_parse_default() {
		let args = Args::try_parse_from(["globs", "default", "--seed", "7"]).unwrap();
		assert!(matches!(args.command, Commands::Default));
		assert_eq!(args.seed, Some(7));
	}

	#[test]
	fn test_rejects_missing_script() {
		assert!(Args::try_parse_from(["globs", "eval"]).is_err());
		assert!(Args::try_parse_from(["globs"]).is_err());
	}

	#[test]
	fn test_default_document_output() {
		let args = Args::try_parse_from(["globs", "default"]).unwrap();
		let snapshot: Snapshot = serde_json::from_str(&run(&args).unwrap()).unwrap();

		assert_eq!(snapshot.nodes.len(), 5);
		assert_eq!(snapshot.globs.len(), 3);
	}

	#[test]
	fn test_document_geometry() {
		let mut evaluator = Evaluator::new();
		evaluator.evaluate(&DefaultDocument).unwrap();
		let geometry = document_geometry(evaluator.registry()).unwrap();

		assert_eq!(geometry.globs.len(), 3);
		assert_eq!(geometry.globs.iter().map(|glob| glob.name.as_str()).collect::<Vec<_>>(), ["Glob 0", "Glob 1", "Glob 2"]);
		let document = geometry.bounds.unwrap();
		assert!(geometry.globs.iter().all(|glob| document.contains(glob.bounds.min()) && document.contains(glob.bounds.max())));
	}

	#[test]
	fn test_geometry_of_an_overlapping_glob() {
		let mut registry = Registry::new();
		let start = registry.add_node(glob_document::NodeOptions::at(0., 0.));
		let end = registry.add_node(glob_document::NodeOptions::at(30., 0.));
		registry.add_glob(glob_document::GlobOptions::between(start, end)).unwrap();

		let geometry = document_geometry(&registry).unwrap();

		assert_eq!(geometry.globs[0].bounds, Bounds::new(-25., -25., 55., 25.));
		assert_eq!(geometry.bounds, Some(Bounds::new(-25., -25., 55., 25.)));
		let json = serde_json::to_value(&geometry).unwrap();
		assert!(json["globs"][0]["points"]["N0"].is_array());
	}
}
