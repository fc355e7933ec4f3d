/*!
 * The text-to-gloss pipeline facade.
 *
 * Composes the three stages (normalize -> reorder -> resolve) behind a
 * single `translate` call. The result carries display tokens and sign
 * identifiers index-aligned: position i of one corresponds to position i
 * of the other, and both sequences always have equal length.
 */

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::catalog::SignCatalog;
use crate::grammar;
use crate::normalizer;
use crate::resolver;

/// Default gloss substituted when the input normalizes to nothing
pub const DEFAULT_GLOSS: &str = "hello";

/// Result of a translation call
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Translation {
    /// Gloss tokens in SOV order, for presentation
    pub display_tokens: Vec<String>,
    /// Resolved animation identifiers, index-aligned with the tokens
    pub sign_identifiers: Vec<String>,
}

/// Deterministic text-to-gloss compiler
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<SignCatalog>,
    default_gloss: String,
}

impl Translator {
    /// Create a translator over an immutable catalog
    pub fn new(catalog: Arc<SignCatalog>) -> Self {
        Translator {
            catalog,
            default_gloss: DEFAULT_GLOSS.to_string(),
        }
    }

    /// Override the gloss substituted for empty input
    pub fn with_default_gloss(mut self, gloss: &str) -> Self {
        self.default_gloss = gloss.to_string();
        self
    }

    /// The catalog this translator resolves against
    pub fn catalog(&self) -> &SignCatalog {
        &self.catalog
    }

    /// Translate free-form text into SOV gloss tokens and resolved sign
    /// identifiers. Pure given the catalog: identical input always
    /// yields identical output.
    pub fn translate(&self, text: &str) -> Translation {
        let tokens = normalizer::normalize(text);
        let glosses = grammar::reorder(tokens, &self.default_gloss);

        let mut display_tokens = Vec::with_capacity(glosses.len());
        let mut sign_identifiers = Vec::with_capacity(glosses.len());
        for gloss in &glosses {
            display_tokens.push(gloss.text.clone());
            sign_identifiers.push(resolver::resolve(&gloss.text, &self.catalog));
        }

        debug!(
            "Translated {:?} into {} glosses: {:?} -> {:?}",
            text,
            display_tokens.len(),
            display_tokens,
            sign_identifiers
        );
        Translation {
            display_tokens,
            sign_identifiers,
        }
    }
}
