//! Key cleanup for extracted parameter names.
//!
//! Names are slugified, then reduced to a short list of candidate keys by
//! dropping `_as_<symbol>` segments ("phosphorus_as_p2o5") and trailing
//! unit/metric suffixes ("zinc_ppm", "potassium_value"). Candidates run from
//! most general to most specific; the first one the canonicalizer knows wins.
//!
//! Headings that end in their own symbol ("available_nitrogen_n",
//! "nitrate_nitrogen_no3n") resolve when the name and the symbol agree. A
//! nitrogen fraction symbol narrows plain nitrogen ("nitrogen_as_no3n").

use crate::canonicalizer::Canonicalizer;

/// Trailing tokens that describe the reading rather than the parameter.
const METRIC_SUFFIXES: &[&str] = &[
    "ppm", "percent", "pct", "value", "level", "amount", "mgkg", "kgha", "dsm",
];

/// Symbols that name a nitrogen fraction. An `as <symbol>` qualifier using
/// one of these changes the parameter and is never stripped.
const NITROGEN_FRACTION_SYMBOLS: &[&str] = &["no3", "no3n", "nh4", "nh4n"];

/// Keys a trailing fraction symbol may narrow plain `nitrogen` into.
const NITROGEN_FRACTIONS: &[&str] = &["total_nitrogen", "nitrate_nitrogen", "ammonical_nitrogen"];

/// How an extracted name was turned into a parameter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedKey {
    /// Mapped onto the canonical vocabulary
    Canonical(&'static str),
    /// Unknown parameter, kept as its slug
    Passthrough(String),
}

impl ResolvedKey {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedKey::Canonical(key) => key,
            ResolvedKey::Passthrough(key) => key,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ResolvedKey::Canonical(key) => key.to_string(),
            ResolvedKey::Passthrough(key) => key,
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, ResolvedKey::Canonical(_))
    }
}

/// Trim, lowercase, join whitespace runs with `_`, keep only `[a-z0-9_]`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Candidate keys for a slug, most general first. The slug itself is last.
pub fn key_candidates(slug: &str) -> Vec<String> {
    let tokens: Vec<&str> = slug.split('_').filter(|t| !t.is_empty()).collect();

    let without_as = strip_as_segments(&tokens);
    let general = strip_metric_suffixes(&without_as);
    let suffix_only = strip_metric_suffixes(&tokens);

    let mut candidates: Vec<String> = Vec::with_capacity(4);
    for variant in [
        general.join("_"),
        suffix_only.join("_"),
        without_as.join("_"),
        slug.to_string(),
    ] {
        if !variant.is_empty() && !candidates.contains(&variant) {
            candidates.push(variant);
        }
    }
    candidates
}

/// Drop `as <symbol>` pairs ("phosphorus_as_p2o5" → "phosphorus").
/// Nitrogen fraction symbols are kept ("nitrogen_as_no3n").
fn strip_as_segments<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter().enumerate().peekable();
    while let Some((i, token)) = iter.next() {
        let strippable = iter
            .peek()
            .is_some_and(|(_, next)| !NITROGEN_FRACTION_SYMBOLS.contains(*next));
        // A leading "as" is part of the name, not a qualifier.
        if *token == "as" && i > 0 && strippable {
            iter.next();
            continue;
        }
        kept.push(*token);
    }
    kept
}

/// Pop trailing metric tokens, keeping at least one token.
fn strip_metric_suffixes<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    let mut end = tokens.len();
    while end > 1 && METRIC_SUFFIXES.contains(&tokens[end - 1]) {
        end -= 1;
    }
    tokens[..end].to_vec()
}

/// Resolve an extracted name to a parameter key.
///
/// Returns `None` when nothing usable is left after slugifying.
pub fn resolve_key(canonicalizer: &Canonicalizer, name: &str) -> Option<ResolvedKey> {
    let slug = slugify(name);
    if !slug.chars().any(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let candidates = key_candidates(&slug);
    if let Some(canonical) = candidates.iter().find_map(|c| canonicalizer.canonicalize(c)) {
        return Some(ResolvedKey::Canonical(canonical));
    }
    if let Some(canonical) = candidates
        .iter()
        .find_map(|c| resolve_with_symbol(canonicalizer, c))
    {
        return Some(ResolvedKey::Canonical(canonical));
    }

    // Nothing canonical: keep the most specific form.
    candidates
        .last()
        .map(|most_specific| ResolvedKey::Passthrough(most_specific.clone()))
}

/// Resolve "<name>_<symbol>" and "<name>_as_<symbol>" when both halves
/// canonicalize and the symbol matches the name or narrows plain nitrogen.
fn resolve_with_symbol(canonicalizer: &Canonicalizer, candidate: &str) -> Option<&'static str> {
    let (head, symbol) = candidate.rsplit_once('_')?;
    let head = head.strip_suffix("_as").unwrap_or(head);
    if head.is_empty() {
        return None;
    }

    let named = canonicalizer.canonicalize(head)?;
    let symbolized = canonicalizer.canonicalize(symbol)?;
    if named == symbolized {
        Some(named)
    } else if named == "nitrogen" && NITROGEN_FRACTIONS.contains(&symbolized) {
        Some(symbolized)
    } else {
        None
    }
}
