//! Reference grammar books recommended per proficiency level

use super::ProficiencyLevel;
use serde::{Deserialize, Serialize};

/// Study guide for one grammar topic of a reference book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitGuide {
    /// Topic this guide belongs to
    pub topic: &'static str,
    /// Unit range in the book (e.g. "Units 1-8")
    pub unit: &'static str,
    /// What the units cover
    pub content: &'static str,
    /// How to work through the units
    pub instructions: &'static str,
    /// Example sentences
    pub examples: &'static [&'static str],
}

/// Static reference book metadata for a proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceBook {
    /// Level the book targets
    pub level: ProficiencyLevel,
    /// Book title
    pub title: &'static str,
    /// Author
    pub author: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Ordered grammar topics; the first few rotate through the week
    pub topics: &'static [&'static str],
    /// Unit guides for the topics that have one
    pub units: &'static [UnitGuide],
}

/// Number of leading topics rotated through a generated week
pub const WEEKLY_TOPIC_COUNT: usize = 4;

impl ReferenceBook {
    /// Reference book for `level`
    #[must_use]
    pub fn for_level(level: ProficiencyLevel) -> &'static Self {
        match level {
            ProficiencyLevel::Elementary => &ELEMENTARY,
            ProficiencyLevel::Intermediate => &INTERMEDIATE,
            ProficiencyLevel::Advanced => &ADVANCED,
        }
    }

    /// Grammar topics covered by one generated week
    #[must_use]
    pub fn weekly_topics(&self) -> &'static [&'static str] {
        let topics: &'static [&'static str] = self.topics;
        &topics[..WEEKLY_TOPIC_COUNT.min(topics.len())]
    }

    /// Unit guide for `topic`, if the book has one
    #[must_use]
    pub fn unit_for(&self, topic: &str) -> Option<&'static UnitGuide> {
        let units: &'static [UnitGuide] = self.units;
        units.iter().find(|guide| guide.topic == topic)
    }

    /// Source line cited by grammar sessions
    #[must_use]
    pub fn citation(&self) -> String {
        format!("{} - {}", self.title, self.author)
    }

    /// Owned metadata stored with a generated plan
    #[must_use]
    pub fn to_resource(&self) -> RecommendedResource {
        RecommendedResource {
            title: self.title.to_string(),
            author: self.author.to_string(),
            description: self.description.to_string(),
        }
    }
}

/// Reference resource metadata persisted with a plan; not user-editable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedResource {
    /// Book title
    pub title: String,
    /// Author
    pub author: String,
    /// One-line description
    pub description: String,
}

static ELEMENTARY: ReferenceBook = ReferenceBook {
    level: ProficiencyLevel::Elementary,
    title: "Essential Grammar in Use (Red Book)",
    author: "Raymond Murphy",
    description: "Perfect for beginners and elementary level students",
    topics: &[
        "Present tenses",
        "Past tenses",
        "Present perfect",
        "Passive voice",
        "Future forms",
        "Modal verbs",
        "If sentences",
        "Reported speech",
        "Questions",
        "Articles and nouns",
        "Pronouns",
        "Adjectives and adverbs",
    ],
    units: &[
        UnitGuide {
            topic: "Present tenses",
            unit: "Units 1-8",
            content: "am/is/are, am/is/are + -ing (present continuous), I do/work/like (present simple)",
            instructions: "Study the form and usage of present tenses. Complete exercises A, B, and C for each unit. Pay special attention to the difference between present simple and continuous.",
            examples: &["I am working now", "I work every day", "She is eating lunch"],
        },
        UnitGuide {
            topic: "Past tenses",
            unit: "Units 9-14",
            content: "was/were, worked/got/went (past simple), I was doing (past continuous)",
            instructions: "Learn past tense formations and irregular verbs. Practice with the additional exercises at the back of the book. Focus on time expressions.",
            examples: &["I worked yesterday", "I was working when she called", "They went to London"],
        },
        UnitGuide {
            topic: "Present perfect",
            unit: "Units 15-20",
            content: "I have done (present perfect), How long have you...? (present perfect questions)",
            instructions: "Understand the connection between past and present. Practice with for/since time expressions. Complete all exercises twice for better retention.",
            examples: &["I have lived here for 5 years", "Have you ever been to Paris?", "She has just arrived"],
        },
        UnitGuide {
            topic: "Modal verbs",
            unit: "Units 26-31",
            content: "can/could/would you...?, may/might, have to/must, should",
            instructions: "Learn the different meanings and uses of modal verbs. Practice polite requests and giving advice. Use the appendix for additional practice.",
            examples: &["Can you help me?", "You should study more", "I must go now"],
        },
    ],
};

static INTERMEDIATE: ReferenceBook = ReferenceBook {
    level: ProficiencyLevel::Intermediate,
    title: "English Grammar in Use (Blue Book)",
    author: "Raymond Murphy",
    description: "The world's best-selling grammar book for intermediate learners",
    topics: &[
        "Present and past",
        "Present perfect and past",
        "Future",
        "Modal verbs",
        "If and wish",
        "Passive",
        "Reported speech",
        "Questions and auxiliary verbs",
        "Articles and nouns",
        "Pronouns and determiners",
        "Relative clauses",
        "Adjectives and adverbs",
    ],
    units: &[
        UnitGuide {
            topic: "Present and past",
            unit: "Units 1-12",
            content: "Present continuous and simple, Past continuous and simple, Present perfect vs past simple",
            instructions: "Focus on the subtle differences between tenses. Use the Study Guide to plan your learning. Complete the Additional Exercises for extra practice.",
            examples: &["I'm living in London (temporary)", "I live in London (permanent)", "I've lived here since 2010"],
        },
        UnitGuide {
            topic: "Present perfect and past",
            unit: "Units 13-20",
            content: "Present perfect continuous, How long...?, For and since, Present perfect vs past",
            instructions: "Master the present perfect forms and their uses. Pay attention to time markers. Use the Answer Key to check your understanding immediately.",
            examples: &["I've been studying for 3 hours", "How long have you been waiting?", "I finished yesterday vs I've finished"],
        },
        UnitGuide {
            topic: "Future",
            unit: "Units 21-25",
            content: "will/shall, be going to, Present continuous for future, Present simple for future",
            instructions: "Learn to express future ideas accurately. Practice with the prediction and intention exercises. Review the differences between future forms regularly.",
            examples: &["I'll help you", "I'm going to study tonight", "The train leaves at 6pm"],
        },
        UnitGuide {
            topic: "Modal verbs",
            unit: "Units 26-38",
            content: "can/could/be able to, must/have to/should, may/might, would",
            instructions: "Study each modal verb section thoroughly. Practice the meaning differences with the exercises. Use real-life situations to practice.",
            examples: &["You must be tired", "She might come later", "I'd like some coffee"],
        },
        UnitGuide {
            topic: "If and wish",
            unit: "Units 39-42",
            content: "If I do/If I did/If I had done, I wish I knew/I wish I had known",
            instructions: "Master conditional structures step by step. Start with real conditions, then move to hypothetical. Practice with the mixed conditional exercises.",
            examples: &["If it rains, I'll stay home", "If I won the lottery, I'd travel", "I wish I had studied harder"],
        },
        UnitGuide {
            topic: "Passive",
            unit: "Units 43-45",
            content: "is done/was done, be/been/being done",
            instructions: "Learn passive formation and when to use it. Focus on the exercises about reporting and formal writing. Practice active to passive transformation.",
            examples: &["The house was built in 1990", "Letters are delivered daily", "The work is being done"],
        },
    ],
};

static ADVANCED: ReferenceBook = ReferenceBook {
    level: ProficiencyLevel::Advanced,
    title: "Advanced Grammar in Use (Green Book)",
    author: "Raymond Murphy",
    description: "For advanced learners who want to perfect their English",
    topics: &[
        "Tenses and time",
        "Modality",
        "The passive",
        "Infinitives and gerunds",
        "Articles",
        "Relative clauses",
        "Conditionals",
        "Emphasis and focus",
        "Cohesion and discourse",
        "Word order and emphasis",
        "Prepositions",
        "Adverbials",
    ],
    units: &[
        UnitGuide {
            topic: "Tenses and time",
            unit: "Units 1-15",
            content: "Present time, Past time, Present perfect, Future time, Advanced tense usage",
            instructions: "Study advanced time concepts and aspectual differences. Focus on subtle meaning changes. Use the diagnostic test to identify weak areas first.",
            examples: &["I'm always forgetting things", "I'll be having dinner then", "By next year, I'll have graduated"],
        },
        UnitGuide {
            topic: "Modality",
            unit: "Units 16-30",
            content: "Probability, Necessity and obligation, Permission and ability, Hypothetical meaning",
            instructions: "Master nuanced modal meanings. Study hedging and academic language use. Practice with authentic texts and formal writing exercises.",
            examples: &["That could well be true", "You needn't have worried", "They're bound to succeed"],
        },
        UnitGuide {
            topic: "The passive",
            unit: "Units 31-35",
            content: "Advanced passive structures, Passive with modals, Have/get something done",
            instructions: "Learn complex passive constructions. Focus on formal and academic uses. Practice with the reporting and impersonal structures.",
            examples: &["It is said that...", "Having been warned, we...", "I had my car repaired"],
        },
        UnitGuide {
            topic: "Infinitives and gerunds",
            unit: "Units 36-42",
            content: "Verb + infinitive/gerund, Adjective + infinitive, Perfect infinitives and gerunds",
            instructions: "Master the subtle differences in meaning. Use the appendix verb lists extensively. Practice with academic and formal contexts.",
            examples: &["I regret to inform you", "I regret telling him", "He appears to have left"],
        },
        UnitGuide {
            topic: "Articles",
            unit: "Units 65-71",
            content: "The and a/an, Articles with geographical names, Articles in academic writing",
            instructions: "Perfect your article usage for academic writing. Study the patterns with proper nouns. Focus on zero article usage rules.",
            examples: &["The University of Oxford", "Life is precious", "In the event of fire"],
        },
        UnitGuide {
            topic: "Conditionals",
            unit: "Units 43-48",
            content: "Advanced conditional structures, Mixed conditionals, Alternative conditional forms",
            instructions: "Study complex conditional meanings and forms. Practice with inversion and alternative structures. Focus on academic and formal uses.",
            examples: &["Were it not for your help...", "But for the rain, we would have...", "Should you need help..."],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_a_book() {
        for level in ProficiencyLevel::ALL {
            let book = ReferenceBook::for_level(level);
            assert_eq!(book.level, level);
            assert_eq!(book.topics.len(), 12);
            assert_eq!(book.weekly_topics().len(), WEEKLY_TOPIC_COUNT);
        }
    }

    #[test]
    fn test_weekly_topics_are_leading_topics() {
        let book = ReferenceBook::for_level(ProficiencyLevel::Elementary);
        assert_eq!(
            book.weekly_topics(),
            &["Present tenses", "Past tenses", "Present perfect", "Passive voice"]
        );
    }

    #[test]
    fn test_unit_lookup() {
        let book = ReferenceBook::for_level(ProficiencyLevel::Intermediate);
        let guide = book.unit_for("Future").expect("Future has a unit guide");
        assert_eq!(guide.unit, "Units 21-25");
        assert_eq!(guide.examples.len(), 3);
        assert!(book.unit_for("Relative clauses").is_none());
    }

    #[test]
    fn test_unit_guides_reference_known_topics() {
        for level in ProficiencyLevel::ALL {
            let book = ReferenceBook::for_level(level);
            for guide in book.units {
                assert!(book.topics.contains(&guide.topic), "{}", guide.topic);
            }
        }
    }

    #[test]
    fn test_citation() {
        let book = ReferenceBook::for_level(ProficiencyLevel::Advanced);
        assert_eq!(
            book.citation(),
            "Advanced Grammar in Use (Green Book) - Raymond Murphy"
        );
        assert_eq!(book.to_resource().author, "Raymond Murphy");
    }
}
