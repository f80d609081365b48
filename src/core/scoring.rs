use std::cmp::Ordering;

use crate::models::{Profile, Role, ScoringWeights};
use crate::core::{
    filters::roles_complement,
    similarity::{career_tokens, set_similarity},
    skills::semantic_skills,
};

/// Highest score a pair can receive
pub const MAX_SCORE: u8 = 100;

/// Flat career bonus (before weighting) when a mentee's goal appears in the
/// mentor's career text
const CAREER_GOAL_BONUS: f64 = 20.0;

/// Raw weighted contributions of each scoring term, before rounding
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub career_bonus: f64,
    pub career_overlap: f64,
    pub experience: f64,
    pub availability: f64,
}

impl ScoreBreakdown {
    /// Unrounded score. Terms are summed in accumulation order so the
    /// rounded result is reproducible bit for bit.
    pub fn total(&self) -> f64 {
        self.skills + self.career_bonus + self.career_overlap + self.experience + self.availability
    }
}

/// Calculate the compatibility score (0-100) of `target` as seen by `user`
///
/// Absent profiles and same-role pairs score 0.
///
/// Scoring formula:
/// score = (
///     skill_similarity * 0.45 +       # synonym-expanded skill overlap
///     career_similarity * 0.35 +      # career keyword overlap, plus a flat
///                                     # 20 * 0.35 when a mentee's career is
///                                     # contained in the mentor's
///     experience_credit * 0.15 +      # 1 if the experience gap points the
///                                     # right way, 0.5 if level
///     availability_match * 0.05       # identical availability tag
/// ) * 100, rounded half to even and capped at 100
pub fn calculate_compatibility(user: Option<&Profile>, target: Option<&Profile>) -> u8 {
    match (user, target) {
        (Some(user), Some(target)) => score_pair(user, target),
        _ => 0,
    }
}

/// Score a present pair of profiles
pub fn score_pair(user: &Profile, target: &Profile) -> u8 {
    if !roles_complement(user, target) {
        return 0;
    }

    round_score(score_breakdown(user, target).total())
}

/// Compute each weighted term for a pair of profiles
///
/// Role compatibility is not checked here; see [`score_pair`].
pub fn score_breakdown(user: &Profile, target: &Profile) -> ScoreBreakdown {
    let weights = &ScoringWeights::DEFAULT;

    // Skills
    let user_skills = semantic_skills(user.skills.as_deref());
    let target_skills = semantic_skills(target.skills.as_deref());
    let skills = set_similarity(&user_skills, &target_skills) * 100.0 * weights.skills;

    // Career
    let user_career = user.career_lowercase();
    let target_career = target.career_lowercase();

    let career_bonus = if user.role == Role::Mentee && target_career.contains(&user_career) {
        CAREER_GOAL_BONUS * weights.career
    } else {
        0.0
    };

    let career_similarity = set_similarity(&career_tokens(&user_career), &career_tokens(&target_career));
    let career_overlap = career_similarity * 100.0 * weights.career;

    ScoreBreakdown {
        skills,
        career_bonus,
        career_overlap,
        experience: experience_credit(user, target) * 100.0 * weights.experience,
        availability: if user.availability == target.availability {
            100.0 * weights.availability
        } else {
            0.0
        },
    }
}

/// Experience credit (0, 0.5 or 1)
///
/// Mentees want a more experienced mentor; mentors want a less experienced
/// mentee. Equal levels earn half credit.
#[inline]
fn experience_credit(user: &Profile, target: &Profile) -> f64 {
    let user_level = user.experience_ordinal();
    let target_level = target.experience_ordinal();

    let direction = match user.role {
        Role::Mentee => target_level.cmp(&user_level),
        Role::Mentor => user_level.cmp(&target_level),
    };

    match direction {
        Ordering::Greater => 1.0,
        Ordering::Equal => 0.5,
        Ordering::Less => 0.0,
    }
}

/// Round half to even, then cap at [`MAX_SCORE`]
#[inline]
fn round_score(raw: f64) -> u8 {
    raw.round_ties_even().clamp(0.0, MAX_SCORE as f64) as u8
}
