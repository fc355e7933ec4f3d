/*!
 * Common test utilities shared across the test suite
 */

use std::sync::Arc;

use sigloss::catalog::SignCatalog;
use sigloss::translator::Translator;

/// Initialize test logging once; honors RUST_LOG like the application
/// logger honors the configured level.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small catalog with known contents for predictable assertions
pub fn small_catalog() -> SignCatalog {
    SignCatalog::from_pairs([
        ("i", "me"),
        ("you", "you"),
        ("run", "run"),
        ("eat", "eat"),
        ("food", "food"),
        ("water", "water"),
        ("name", "name"),
        ("what", "what"),
        ("hello", "hello"),
        ("happy", "happy"),
    ])
}

/// A translator over the small catalog
pub fn small_translator() -> Translator {
    Translator::new(Arc::new(small_catalog()))
}

/// A translator over the built-in starter catalog
pub fn builtin_translator() -> Translator {
    Translator::new(Arc::new(SignCatalog::builtin().clone()))
}
