//! The glob document: nodes and the globs joining them, held in a [`Registry`] and populated by evaluating a [`Script`].
//!
//! An [`Evaluator`] runs a script against an empty [`Scope`], checks that every glob still has both of its endpoints, and only
//! then commits the result, handing back a serializable [`Snapshot`]. Geometry comes from `glob-math` and is recomputed on demand.
pub mod consts;
mod command;
mod default_document;
mod error;
mod evaluation;
mod glob;
mod node;
mod records;
mod registry;
mod script;
pub mod uuid;

pub use command::{Command, CommandList, EvaluationOptions, NodeSpec};
pub use default_document::DefaultDocument;
pub use error::{DocumentError, EvaluationError, ScriptError};
pub use evaluation::{Evaluator, evaluate};
pub use glob::{Glob, GlobOptions, NodeRef};
pub use node::{Cap, Node, NodeOptions, NodePosition};
pub use records::{CanvasItem, GlobRecord, NodeRecord, Snapshot};
pub use registry::Registry;
pub use script::{Script, Scope};
pub use uuid::{GlobId, NodeId};
