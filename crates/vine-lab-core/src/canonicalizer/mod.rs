//! Parameter name canonicalizer.
//!
//! Lab vendors print the same measurement under many names ("Soil pH",
//! "EC (dS/m)", "Available N"). Lookups are insensitive to case, spacing
//! and punctuation: both the alias table and the query are reduced to
//! lowercase ASCII alphanumerics before matching.

mod aliases;

pub use aliases::CANONICAL_KEYS;

use std::collections::HashMap;
use std::sync::OnceLock;

/// Maps free-text parameter names to canonical keys.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    /// Normalized alias → canonical key
    aliases: HashMap<String, &'static str>,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Canonicalizer {
    /// Create a canonicalizer with the built-in alias table.
    pub fn new() -> Self {
        let mut aliases = HashMap::with_capacity(aliases::ALIASES.len() + CANONICAL_KEYS.len());

        // Canonical keys resolve to themselves ("organicCarbon" → "organiccarbon").
        for key in CANONICAL_KEYS {
            aliases.insert(normalize_alias(key), *key);
        }
        for (alias, canonical) in aliases::ALIASES {
            aliases.insert(normalize_alias(alias), *canonical);
        }

        Self { aliases }
    }

    /// Shared process-wide instance with the built-in table.
    pub fn global() -> &'static Canonicalizer {
        static GLOBAL: OnceLock<Canonicalizer> = OnceLock::new();
        GLOBAL.get_or_init(Canonicalizer::new)
    }

    /// Register an extra alias for an existing canonical key.
    ///
    /// Unknown canonical keys are ignored, so the vocabulary stays closed.
    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        if let Some(key) = CANONICAL_KEYS.iter().find(|k| **k == canonical) {
            let normalized = normalize_alias(alias);
            if !normalized.is_empty() {
                self.aliases.insert(normalized, *key);
            }
        }
        self
    }

    /// Map a parameter name to its canonical key, if known.
    pub fn canonicalize(&self, key: &str) -> Option<&'static str> {
        let normalized = normalize_alias(key);
        if normalized.is_empty() {
            return None;
        }
        self.aliases.get(&normalized).copied()
    }

    /// Whether `key` is itself a canonical key (exact spelling).
    pub fn is_canonical(key: &str) -> bool {
        CANONICAL_KEYS.contains(&key)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Lowercase and keep only ASCII alphanumerics.
pub fn normalize_alias(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Canonicalize using the shared built-in table.
pub fn canonicalize(key: &str) -> Option<&'static str> {
    Canonicalizer::global().canonicalize(key)
}
