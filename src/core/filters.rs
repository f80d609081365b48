use crate::models::{Profile, Role};

/// Check whether a candidate may be ranked for the current user
///
/// Candidates must be someone else and sit on the opposite side of the
/// mentorship.
#[inline]
pub fn is_eligible_candidate(candidate: &Profile, current_user: &Profile) -> bool {
    candidate.id != current_user.id && candidate.role != current_user.role
}

/// Check whether two profiles are on complementary sides
#[inline]
pub fn roles_complement(user: &Profile, target: &Profile) -> bool {
    user.role != target.role
}

/// Maximum number of ranked matches returned for a role
///
/// Mentees see their top mentors only; mentors see every ranked mentee.
#[inline]
pub fn result_limit(role: Role) -> Option<usize> {
    match role {
        Role::Mentee => Some(super::MENTEE_MATCH_LIMIT),
        Role::Mentor => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_self() {
        let mentee = Profile::new("u1", Role::Mentee);
        // Same id but a different role still counts as self
        let same_id = Profile::new("u1", Role::Mentor);

        assert!(!is_eligible_candidate(&mentee, &mentee));
        assert!(!is_eligible_candidate(&same_id, &mentee));
    }

    #[test]
    fn test_excludes_same_role() {
        let mentee = Profile::new("u1", Role::Mentee);
        let other_mentee = Profile::new("u2", Role::Mentee);

        assert!(!is_eligible_candidate(&other_mentee, &mentee));
        assert!(!roles_complement(&mentee, &other_mentee));
    }

    #[test]
    fn test_accepts_complementary_role() {
        let mentee = Profile::new("u1", Role::Mentee);
        let mentor = Profile::new("u2", Role::Mentor);

        assert!(is_eligible_candidate(&mentor, &mentee));
        assert!(is_eligible_candidate(&mentee, &mentor));
        assert!(roles_complement(&mentee, &mentor));
    }

    #[test]
    fn test_result_limit() {
        assert_eq!(result_limit(Role::Mentee), Some(5));
        assert_eq!(result_limit(Role::Mentor), None);
    }
}
