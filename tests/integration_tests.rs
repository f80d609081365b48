// Integration tests for Mentor Match

use mentor_match::core::{rank_matches, Matcher, MENTEE_MATCH_LIMIT};
use mentor_match::models::{Profile, Role};
use serde_json::json;

fn create_mentor(id: &str, skills: &[&str], career: &str, experience: &str) -> Profile {
    Profile::new(id, Role::Mentor)
        .with_name(format!("Mentor {}", id))
        .with_skills(skills.iter().copied())
        .with_career(career)
        .with_experience(experience)
        .with_availability("Weekends")
}

fn create_mentee(id: &str) -> Profile {
    Profile::new(id, Role::Mentee)
        .with_name(format!("Mentee {}", id))
        .with_skills(["JavaScript", "Python"])
        .with_career("Backend developer")
        .with_experience("Entry")
        .with_availability("Weekends")
}

#[test]
fn test_integration_end_to_end_ranking() {
    let mentee = create_mentee("me");

    let candidates = vec![
        create_mentor("1", &["React", "Python", "AWS"], "Full-stack software engineer", "Senior"),
        create_mentor("2", &["Node"], "Senior backend developer", "Expert / Lead"),
        create_mentor("3", &["Design"], "Product designer", "Mid-level"),
        create_mentor("4", &["Management"], "Engineering manager", "Entry"),
        create_mentee("5"),                                         // Same role
        create_mentor("me", &["Python"], "Backend developer", "Senior"), // Same id
    ];

    let result = Matcher.rank(Some(&mentee), &candidates);

    assert_eq!(result.total_candidates, 6);
    assert_eq!(result.eligible_candidates, 4);

    for m in &result.matches {
        assert_eq!(m.profile.role, Role::Mentor);
        assert_ne!(m.profile.id, "me");
        assert!(m.compatibility <= 100);
    }

    for pair in result.matches.windows(2) {
        assert!(
            pair[0].compatibility >= pair[1].compatibility,
            "Matches not sorted by compatibility"
        );
    }

    // Career goal contained in the mentor's career puts mentor 2 first
    assert_eq!(result.matches[0].profile.id, "2");
}

#[test]
fn test_reference_pair_ranking() {
    let mentor = create_mentor("1", &["React", "Python", "AWS"], "Full-stack software engineer", "Senior");
    let mentee = create_mentee("2");
    let everyone = vec![mentor.clone(), mentee.clone()];

    let for_mentee = rank_matches(Some(&mentee), &everyone);
    let for_mentor = rank_matches(Some(&mentor), &everyone);

    assert_eq!(for_mentee.len(), 1);
    assert_eq!(for_mentee[0].profile.id, "1");
    assert_eq!(for_mentee[0].compatibility, 52);

    assert_eq!(for_mentor.len(), 1);
    assert_eq!(for_mentor[0].profile.id, "2");
}

#[test]
fn test_mentee_limit_enforcement() {
    let mentee = create_mentee("me");

    let candidates: Vec<Profile> = (0..50)
        .map(|i| {
            let skills: &[&str] = if i % 2 == 0 { &["Python"] } else { &["Design"] };
            create_mentor(&i.to_string(), skills, "Engineer", "Senior")
        })
        .collect();

    let ranked = rank_matches(Some(&mentee), &candidates);

    assert_eq!(ranked.len(), MENTEE_MATCH_LIMIT);
    // Top five are the Python mentors, in input order
    let ids: Vec<&str> = ranked.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "2", "4", "6", "8"]);
}

#[test]
fn test_mentor_sees_all_mentees() {
    let mentor = create_mentor("me", &["Python"], "Backend developer", "Senior");
    let candidates: Vec<Profile> = (0..50).map(|i| create_mentee(&i.to_string())).collect();

    let ranked = rank_matches(Some(&mentor), &candidates);

    assert_eq!(ranked.len(), 50);
}

#[test]
fn test_missing_current_user() {
    let candidates = vec![create_mentee("1")];
    assert!(rank_matches(None, &candidates).is_empty());
}

#[test]
fn test_ranked_json_carries_extra_attributes() {
    let mentee = create_mentee("me");
    let mentor: Profile = serde_json::from_value(json!({
        "id": "m1",
        "role": "mentor",
        "skills": ["Python"],
        "career": "Backend developer at a fintech",
        "experienceLevel": "Senior",
        "availability": "Weekends",
        "photoUrl": "https://example.com/m1.png",
        "languages": ["English", "Spanish"]
    }))
    .unwrap();

    let ranked = rank_matches(Some(&mentee), &[mentor]);
    let value = serde_json::to_value(&ranked[0]).unwrap();

    assert_eq!(value["id"], "m1");
    assert_eq!(value["experienceLevel"], "Senior");
    assert_eq!(value["photoUrl"], "https://example.com/m1.png");
    assert_eq!(value["languages"], json!(["English", "Spanish"]));
    assert!(value["compatibility"].as_u64().unwrap() > 0);
}
