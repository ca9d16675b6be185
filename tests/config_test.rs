// Process-wide configuration (kept in its own binary: it mutates env and globals)

use sparsekit::config::{self, TERM_HASHER_ENV, VERBOSE_ENV};
use sparsekit::ui::Log;
use sparsekit::{SparseVector, TermHasher};

#[test]
fn test_config_resolution() {
	std::env::set_var(TERM_HASHER_ENV, "xxh3");
	assert_eq!(config::term_hasher(), TermHasher::Xxh3);

	let v = SparseVector::from_terms([("cat", 1.0)]);
	assert_eq!(v.as_slice()[0].id, TermHasher::Xxh3.hash("cat"));

	// Environment is resolved once; later changes are not picked up
	std::env::set_var(TERM_HASHER_ENV, "not-a-hasher");
	assert_eq!(config::term_hasher(), TermHasher::Xxh3);
	std::env::set_var(TERM_HASHER_ENV, "polynomial");
	assert_eq!(config::term_hasher(), TermHasher::Xxh3);

	// Explicit override wins over the cached environment value, and only the first one sticks
	config::set_term_hasher(TermHasher::Polynomial);
	config::set_term_hasher(TermHasher::Xxh3);
	assert_eq!(config::term_hasher(), TermHasher::Polynomial);

	std::env::set_var(VERBOSE_ENV, "true");
	config::init_from_env();
	assert!(Log::is_verbose());

	std::env::set_var(VERBOSE_ENV, "0");
	config::init_from_env();
	assert!(!Log::is_verbose());
}
