//! Keyword classification of free-text prompts.
//!
//! Each profile scores the number of its distinct keywords occurring as
//! substrings of the lowercased prompt. The highest score wins; ties go to
//! the profile registered first, and a prompt matching nothing resolves to
//! the default profile.

use serde::Serialize;
use tracing::debug;

use crate::profile::{IndustryProfile, PROFILES, default_profile};

/// Keyword matches of one profile against a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileScore {
    pub profile: &'static str,
    pub matched: Vec<&'static str>,
}

impl ProfileScore {
    /// Number of distinct keywords matched.
    #[must_use]
    pub fn count(&self) -> usize {
        self.matched.len()
    }
}

/// Score every profile in registry order.
#[must_use]
pub fn score(prompt: &str) -> Vec<ProfileScore> {
    let lower = prompt.to_lowercase();
    PROFILES
        .iter()
        .map(|p| ProfileScore {
            profile: p.id,
            matched: p
                .keywords
                .iter()
                .copied()
                .filter(|k| lower.contains(k))
                .collect(),
        })
        .collect()
}

/// Pick the profile that best matches `prompt`.
#[must_use]
pub fn classify(prompt: &str) -> &'static IndustryProfile {
    let lower = prompt.to_lowercase();
    let mut best: Option<(&'static IndustryProfile, usize)> = None;

    for profile in PROFILES {
        let count = profile.keywords.iter().filter(|k| lower.contains(*k)).count();
        // Strictly greater keeps the earliest profile on ties.
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((profile, count));
        }
    }

    match best {
        Some((profile, count)) => {
            debug!(profile = profile.id, matches = count, "classified prompt");
            profile
        }
        None => {
            debug!("no keywords matched, using default profile");
            default_profile()
        }
    }
}
