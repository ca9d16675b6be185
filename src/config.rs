//! Library configuration and constants

use std::sync::OnceLock;

use crate::core::TermHasher;

static CUSTOM_TERM_HASHER: OnceLock<TermHasher> = OnceLock::new();
static ENV_TERM_HASHER: OnceLock<TermHasher> = OnceLock::new();

// === Term Hashing ===
pub const HASH_SEED: u64 = 1_125_899_906_842_597; // prime
pub const HASH_MULTIPLIER: u64 = 31;

// === Environment ===
pub const TERM_HASHER_ENV: &str = "SPARSEKIT_TERM_HASHER";
pub const VERBOSE_ENV: &str = "SPARSEKIT_VERBOSE";

/// Override the process-wide term hasher. Only the first call takes effect.
pub fn set_term_hasher(hasher: TermHasher) {
	let _ = CUSTOM_TERM_HASHER.set(hasher);
}

/// Get the term hasher (override, then SPARSEKIT_TERM_HASHER, then default).
///
/// The environment is read once per process.
pub fn term_hasher() -> TermHasher {
	if let Some(custom) = CUSTOM_TERM_HASHER.get() {
		return *custom;
	}

	*ENV_TERM_HASHER.get_or_init(term_hasher_from_env)
}

fn term_hasher_from_env() -> TermHasher {
	if let Ok(name) = std::env::var(TERM_HASHER_ENV) {
		match name.parse::<TermHasher>() {
			Ok(hasher) => {
				crate::ui::debug(&format!("Using {}={}", TERM_HASHER_ENV, name));
				return hasher;
			}
			Err(e) => crate::ui::warn(&format!("Ignoring {}: {}", TERM_HASHER_ENV, e)),
		}
	}

	TermHasher::default()
}

/// Enable verbose logging if SPARSEKIT_VERBOSE is set to a truthy value
pub fn init_from_env() {
	let verbose = std::env::var(VERBOSE_ENV)
		.map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
		.unwrap_or(false);
	crate::ui::Log::set_verbose(verbose);
	if verbose {
		crate::ui::info(&format!("Verbose logging enabled by {}", VERBOSE_ENV));
	}
}
