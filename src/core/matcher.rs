use crate::models::{Profile, ScoredProfile, ScoringWeights};
use crate::core::{
    filters::{is_eligible_candidate, result_limit},
    scoring::{calculate_compatibility, score_pair},
};

/// Result of the ranking process
#[derive(Debug, Default)]
pub struct MatchResult {
    pub matches: Vec<ScoredProfile>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Identity and role filtering
/// 2. Compatibility scoring (on copies)
/// 3. Stable descending sort
/// 4. Role-dependent truncation
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    /// The fixed weights every score is computed with
    pub fn weights(&self) -> &'static ScoringWeights {
        &ScoringWeights::DEFAULT
    }

    /// Score a single pair, 0 when either side is absent
    pub fn score(&self, user: Option<&Profile>, target: Option<&Profile>) -> u8 {
        calculate_compatibility(user, target)
    }

    /// Rank candidates for the current user
    ///
    /// # Arguments
    /// * `current_user` - The reference profile; `None` yields no matches
    /// * `candidates` - Candidate profiles in input order
    ///
    /// # Returns
    /// MatchResult whose matches are scored copies sorted by compatibility,
    /// descending. Equal scores keep their input order.
    pub fn rank(&self, current_user: Option<&Profile>, candidates: &[Profile]) -> MatchResult {
        let total_candidates = candidates.len();

        let Some(current_user) = current_user else {
            return MatchResult {
                total_candidates,
                ..MatchResult::default()
            };
        };

        let mut matches: Vec<ScoredProfile> = candidates
            .iter()
            // Stage 1: Identity and role filtering
            .filter(|candidate| is_eligible_candidate(candidate, current_user))
            // Stage 2: Scoring
            .map(|candidate| {
                let compatibility = score_pair(current_user, candidate);
                ScoredProfile::new(candidate, compatibility)
            })
            .collect();

        let eligible_candidates = matches.len();

        // Stage 3: sort_by is stable, so ties keep input order
        matches.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));

        // Stage 4: Truncation
        if let Some(limit) = result_limit(current_user.role) {
            matches.truncate(limit);
        }

        tracing::trace!(
            user_id = %current_user.id,
            total_candidates,
            eligible_candidates,
            returned = matches.len(),
            "ranked candidates"
        );

        MatchResult {
            matches,
            total_candidates,
            eligible_candidates,
        }
    }
}

/// Rank candidates for the current user
pub fn rank_matches(current_user: Option<&Profile>, candidates: &[Profile]) -> Vec<ScoredProfile> {
    Matcher
        .rank(current_user, candidates)
        .matches
}
