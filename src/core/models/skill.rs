//! Focus-area skills

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four skill categories a study plan can focus on.
///
/// Declaration order is the per-day allocation order used by the generator
/// (grammar → vocabulary → reading → listening) and the ordering of focus-area
/// sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    /// Rules and structures, taught from the level's reference book
    Grammar,
    /// Word building
    Vocabulary,
    /// Comprehension skills
    Reading,
    /// Audio comprehension
    Listening,
}

impl Skill {
    /// All skills in allocation order
    pub const ALL: [Self; 4] = [Self::Grammar, Self::Vocabulary, Self::Reading, Self::Listening];

    /// Lowercase identifier used in storage and session ids
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Vocabulary => "vocabulary",
            Self::Reading => "reading",
            Self::Listening => "listening",
        }
    }

    /// Display name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grammar => "Grammar",
            Self::Vocabulary => "Vocabulary",
            Self::Reading => "Reading",
            Self::Listening => "Listening",
        }
    }

    /// Short description shown next to the focus-area choice
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Grammar => "Rules and structures",
            Self::Vocabulary => "Word building",
            Self::Reading => "Comprehension skills",
            Self::Listening => "Audio comprehension",
        }
    }

    /// Terminal marker for the skill
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Grammar => "✎",
            Self::Vocabulary => "📖",
            Self::Reading => "🧠",
            Self::Listening => "🎧",
        }
    }

    /// Longest session the generator will emit for this skill, in minutes
    #[must_use]
    pub const fn cap_minutes(self) -> u32 {
        match self {
            Self::Grammar => 30,
            Self::Vocabulary | Self::Listening => 20,
            Self::Reading => 25,
        }
    }

    /// Remaining daily budget required before a session of this skill is emitted
    #[must_use]
    pub const fn min_minutes(self) -> u32 {
        match self {
            Self::Grammar | Self::Reading => 15,
            Self::Vocabulary | Self::Listening => 10,
        }
    }

    /// Fixed source cited by non-grammar sessions.
    ///
    /// Grammar sessions cite the level's reference book instead, so this
    /// returns `None` for [`Skill::Grammar`].
    #[must_use]
    pub const fn fixed_source(self) -> Option<&'static str> {
        match self {
            Self::Grammar => None,
            Self::Vocabulary => Some("Academic word lists"),
            Self::Reading => Some("Academic articles"),
            Self::Listening => Some("Academic lectures"),
        }
    }

    /// Session title; `topic` is only used by grammar sessions
    #[must_use]
    pub fn session_title(self, topic: &str) -> String {
        match self {
            Self::Grammar => format!("Grammar: {topic}"),
            Self::Vocabulary => "Vocabulary Building".to_string(),
            Self::Reading => "Reading Comprehension".to_string(),
            Self::Listening => "Listening Practice".to_string(),
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Skill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grammar" => Ok(Self::Grammar),
            "vocabulary" | "vocab" => Ok(Self::Vocabulary),
            "reading" => Ok(Self::Reading),
            "listening" => Ok(Self::Listening),
            _ => Err(format!(
                "Unknown focus area: '{s}' (expected grammar, vocabulary, reading or listening)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_and_thresholds() {
        assert_eq!(Skill::Grammar.cap_minutes(), 30);
        assert_eq!(Skill::Vocabulary.cap_minutes(), 20);
        assert_eq!(Skill::Reading.cap_minutes(), 25);
        assert_eq!(Skill::Listening.cap_minutes(), 20);

        for skill in Skill::ALL {
            assert!(skill.min_minutes() <= skill.cap_minutes());
        }
    }

    #[test]
    fn test_allocation_order_matches_ord() {
        let mut shuffled = vec![Skill::Listening, Skill::Grammar, Skill::Reading, Skill::Vocabulary];
        shuffled.sort();
        assert_eq!(shuffled, Skill::ALL.to_vec());
    }

    #[test]
    fn test_parse_skill() {
        assert_eq!("Grammar".parse::<Skill>(), Ok(Skill::Grammar));
        assert_eq!("vocab".parse::<Skill>(), Ok(Skill::Vocabulary));
        assert!("speaking".parse::<Skill>().is_err());
    }

    #[test]
    fn test_session_titles() {
        assert_eq!(
            Skill::Grammar.session_title("Passive voice"),
            "Grammar: Passive voice"
        );
        assert_eq!(Skill::Reading.session_title("ignored"), "Reading Comprehension");
        assert!(Skill::Grammar.fixed_source().is_none());
        assert_eq!(Skill::Listening.fixed_source(), Some("Academic lectures"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Skill::Listening).unwrap();
        assert_eq!(json, "\"listening\"");
        let parsed: Skill = serde_json::from_str("\"vocabulary\"").unwrap();
        assert_eq!(parsed, Skill::Vocabulary);
    }
}
