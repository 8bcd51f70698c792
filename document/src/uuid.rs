use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

mod uuid_generation {
	use core::cell::Cell;
	use rand_chacha::ChaCha20Rng;
	use rand_chacha::rand_core::{RngCore, SeedableRng};
	use std::sync::Mutex;

	static RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);
	thread_local! {
		pub static UUID_SEED: Cell<Option<u64>> = const { Cell::new(None) };
	}

	/// Seeds the id generator. Only takes effect if called before the first id is generated.
	pub fn set_uuid_seed(random_seed: u64) {
		UUID_SEED.with(|seed| seed.set(Some(random_seed)))
	}

	pub fn generate_uuid() -> u64 {
		let mut lock = RNG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
		let rng = lock.get_or_insert_with(|| {
			let random_seed = UUID_SEED.with(|seed| seed.get().unwrap_or(42));
			ChaCha20Rng::seed_from_u64(random_seed)
		});
		rng.next_u64()
	}
}

pub use uuid_generation::*;

macro_rules! entity_id {
	($(#[$attr:meta])* $name:ident) => {
		$(#[$attr])*
		///
		/// Any string is a valid id. Generated ids are decimal renderings of a seeded random `u64`.
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Arc<str>);

		impl $name {
			/// Generates a fresh id, unique within the session.
			pub fn new() -> Self {
				Self(generate_uuid().to_string().into())
			}

			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}

		impl From<&str> for $name {
			fn from(id: &str) -> Self {
				Self(id.into())
			}
		}

		impl From<String> for $name {
			fn from(id: String) -> Self {
				Self(id.into())
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

entity_id!(
	/// Opaque identifier of a [`Node`](crate::Node).
	NodeId
);
entity_id!(
	/// Opaque identifier of a [`Glob`](crate::Glob).
	GlobId
);
