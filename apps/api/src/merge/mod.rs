//! Merge Engine — reconciles untrusted oracle deltas against the caller's
//! authoritative Profile.
//!
//! Every operation here is a pure function `(authoritative, delta) -> new
//! authoritative` with explicit per-field fallback rules, so it is unit
//! testable without any oracle or transport. Policy shared by all four
//! use-cases:
//!
//! - oracle identifiers are matched against EXISTING records only — a foreign
//!   identifier is dropped, never turned into a new entry
//! - an empty/missing oracle field means "no opinion", never "clear this
//!   field" — the prior authoritative value is kept
//! - list reordering by the oracle is an accepted relevance signal; list
//!   shape corruption (non-list, wrong types, foreign ids) is filtered out

pub mod bootstrap;
pub mod condense;
pub mod tailor;

/// Returned in place of a cover letter the oracle failed to produce, so the
/// caller can detect generation failure without a separate status field.
pub const COVER_LETTER_FAILURE_SENTINEL: &str =
    "We could not generate a cover letter for this application. Please try again.";

/// Condense fallback: experience entries kept when the oracle selects none.
pub(crate) const FALLBACK_EXPERIENCE_LIMIT: usize = 4;

/// Condense fallback: skills kept when the oracle selects none.
pub(crate) const FALLBACK_SKILL_LIMIT: usize = 8;

/// Links are always truncated to this many — a formatting constraint, not a
/// reconciliation decision.
pub(crate) const LINK_LIMIT: usize = 3;
