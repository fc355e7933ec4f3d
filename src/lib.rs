/*!
 * # sigloss - Sign-language Gloss Compiler and Playback Sequencer
 *
 * A Rust library translating free-form text into gloss tokens for a
 * signing-avatar renderer.
 *
 * ## Features
 *
 * - Deterministic text-to-gloss compilation:
 *   - Contraction expansion, lower-casing, punctuation stripping
 *   - Heuristic Subject-Object-Verb reordering with question-word relocation
 *   - Total sign resolution via an ordered fallback chain (exact match,
 *     morphological variants, substring containment, suffix classes,
 *     deterministic filler)
 * - Paced playback of resolved signs against an async render engine
 *   with backpressure, cancellation and a readiness watchdog
 * - Sign catalog loading from the JSON dataset format
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `normalizer`: Tokenization and contraction expansion
 * - `grammar`: SOV reordering heuristics
 * - `catalog`: Sign catalog and reference vocabulary
 * - `resolver`: Ordered sign-resolution fallback chain
 * - `translator`: The text-to-gloss pipeline facade
 * - `sequencer`: Playback state machine and pacing
 * - `engine`: Render engine adapters:
 *   - `engine::console`: Logging stand-in engine for the CLI
 *   - `engine::mock`: Scripted engine for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod catalog;
pub mod engine;
pub mod errors;
pub mod grammar;
pub mod normalizer;
pub mod resolver;
pub mod sequencer;
pub mod translator;

// Re-export main types for easier usage
pub use app_config::Config;
pub use catalog::SignCatalog;
pub use engine::{EngineStatus, RenderEngine};
pub use errors::{AppError, CatalogError, EngineError};
pub use sequencer::{PlaybackSequencer, PlaybackState, PlaybackTiming};
pub use translator::{Translation, Translator};
