use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which side of the mentorship a profile is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentee,
    Mentor,
}

/// Named experience tiers, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExperienceLevel {
    Entry = 1,
    MidLevel = 2,
    Senior = 3,
    ExpertLead = 4,
}

/// Tags accepted in `experienceLevel`. Matching is exact.
const EXPERIENCE_TAGS: [(&str, ExperienceLevel); 4] = [
    ("Entry", ExperienceLevel::Entry),
    ("Mid-level", ExperienceLevel::MidLevel),
    ("Senior", ExperienceLevel::Senior),
    ("Expert / Lead", ExperienceLevel::ExpertLead),
];

impl ExperienceLevel {
    pub fn from_tag(tag: &str) -> Option<Self> {
        EXPERIENCE_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, level)| *level)
    }

    pub fn tag(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::MidLevel => "Mid-level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::ExpertLead => "Expert / Lead",
        }
    }

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// A mentorship profile as supplied by the hosting application
///
/// Only the fields used for scoring are typed. Anything else the host sends
/// (photos, bios, names, ...) lands in `attributes` and is carried through to
/// ranked copies untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    #[serde(rename = "experienceLevel", default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Profile {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            name: None,
            skills: None,
            career: None,
            experience_level: None,
            availability: None,
            attributes: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_career(mut self, career: impl Into<String>) -> Self {
        self.career = Some(career.into());
        self
    }

    pub fn with_experience(mut self, level: impl Into<String>) -> Self {
        self.experience_level = Some(level.into());
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    /// Parsed experience tier, `None` when absent or unrecognized
    pub fn experience(&self) -> Option<ExperienceLevel> {
        self.experience_level.as_deref().and_then(ExperienceLevel::from_tag)
    }

    /// Experience ordinal (1-4); absent or unrecognized levels rank as Entry
    pub fn experience_ordinal(&self) -> u8 {
        self.experience()
            .unwrap_or(ExperienceLevel::Entry)
            .ordinal()
    }

    /// Lowercased career text, empty when absent
    pub fn career_lowercase(&self) -> String {
        self.career.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// A ranked copy of a candidate profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    #[serde(flatten)]
    pub profile: Profile,
    pub compatibility: u8,
}

impl ScoredProfile {
    /// Clone `profile` and attach its score
    ///
    /// A stale `compatibility` attribute from the host is dropped so the
    /// serialized copy carries a single score.
    pub fn new(profile: &Profile, compatibility: u8) -> Self {
        let mut profile = profile.clone();
        profile.attributes.remove("compatibility");
        Self {
            profile,
            compatibility,
        }
    }
}

/// Scoring weights
///
/// Only [`ScoringWeights::DEFAULT`] exists; the blend is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub(crate) skills: f64,
    pub(crate) career: f64,
    pub(crate) experience: f64,
    pub(crate) availability: f64,
}

impl ScoringWeights {
    pub const DEFAULT: ScoringWeights = ScoringWeights {
        skills: 0.45,
        career: 0.35,
        experience: 0.15,
        availability: 0.05,
    };

    pub fn sum(&self) -> f64 {
        self.skills + self.career + self.experience + self.availability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
