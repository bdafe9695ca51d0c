//! Keyword and context-pattern categorization.
//!
//! Each category has a keyword list, a weight and a handful of context
//! regexes. An event's score for a category is
//! `keyword_hits * weight + pattern_hits * weight * 1.5`; the best score
//! wins.

use history_events::Category;
use regex::Regex;
use std::collections::BTreeMap;

use crate::error::CuratorError;

/// Extra multiplier applied to context-pattern hits.
const CONTEXT_BONUS: f32 = 1.5;

/// Penalty for Indian History scores on text that is not about India.
const NON_INDIAN_PENALTY: f32 = 0.3;

struct CategorySpec {
    category: Category,
    weight: f32,
    keywords: &'static [&'static str],
    patterns: &'static [&'static str],
}

const CATEGORY_SPECS: &[CategorySpec] = &[
    CategorySpec {
        category: Category::Politics,
        weight: 1.2,
        keywords: &[
            "president", "government", "election", "vote", "democracy", "parliament",
            "congress", "political", "minister", "law", "treaty", "constitution",
            "legislation", "court", "supreme court", "prime minister", "chancellor",
            "diplomat", "ambassador", "senate", "governor", "monarchy", "emperor", "king",
            "queen", "ruler",
        ],
        patterns: &[
            r"elected (as|to the position of) [a-z]",
            r"signed (a|the) treaty",
            r"passed (a|the) (law|bill|act)",
            r"became (the )?(president|prime minister|king|queen|emperor)",
        ],
    },
    CategorySpec {
        category: Category::War,
        weight: 1.0,
        keywords: &[
            "war", "battle", "conflict", "military", "army", "soldier", "invasion", "troops",
            "combat", "weapon", "attack", "defense", "peace treaty", "ceasefire", "surrender",
            "rebellion", "revolution", "uprising", "siege", "guerrilla", "civil war",
            "world war",
        ],
        patterns: &[
            r"(fought|won|lost) (a|the) battle",
            r"(began|ended|during) (the )?war",
            r"military (campaign|operation|offensive)",
            r"(attacked|invaded|occupied)",
        ],
    },
    CategorySpec {
        category: Category::Science,
        weight: 1.1,
        keywords: &[
            "science", "technology", "invention", "discovery", "research", "scientist",
            "engineer", "innovation", "computer", "internet", "digital", "software", "space",
            "rocket", "satellite", "patent", "laboratory", "experiment", "theory", "physics",
            "chemistry", "biology", "medicine", "astronomy", "mathematics", "algorithm",
            "machine",
        ],
        patterns: &[
            r"(invented|discovered|developed|created) (a|the|an) (new )?",
            r"scientific (breakthrough|discovery|achievement)",
            r"(launched|sent) into (space|orbit)",
            r"(published|proposed) (a|the|their) theory",
        ],
    },
    CategorySpec {
        category: Category::Arts,
        weight: 0.9,
        keywords: &[
            "art", "music", "literature", "painting", "sculpture", "novel", "poetry",
            "theater", "cinema", "movie", "actor", "director", "musician", "artist", "writer",
            "author", "play", "concert", "exhibition", "museum", "gallery", "dance",
            "symphony", "orchestra", "architecture", "festival", "cultural", "heritage",
            "tradition", "folklore", "crafts", "art history", "artistic movements",
            "famous paintings", "renaissance art", "modern art", "contemporary art",
            "museum openings", "world heritage sites", "traditional festivals",
            "classical music", "theater history", "dance history", "cinema history",
            "fashion history",
        ],
        patterns: &[
            r"(wrote|published|released) (a|the|their) (book|novel|poem|song|album)",
            r"(premiered|debuted|opened) (at|in) (the )?",
            r"(painted|sculpted|composed|directed|produced)",
            r"(won|awarded|received) (a|the|an) (award|prize|medal)",
        ],
    },
    CategorySpec {
        category: Category::Sports,
        weight: 0.8,
        keywords: &[
            "sport", "game", "athlete", "championship", "tournament", "olympics", "medal",
            "record", "team", "player", "coach", "stadium", "match", "competition", "race",
            "win", "score", "football", "soccer", "cricket", "tennis", "golf", "basketball",
            "baseball", "hockey", "swimming",
        ],
        patterns: &[
            r"(won|lost) (the|a) (match|game|championship|tournament)",
            r"(set|broke) (a|the) (world )?record",
            r"(competed|participated) in (the )?",
            r"(gold|silver|bronze) medal",
        ],
    },
    CategorySpec {
        category: Category::Medicine,
        weight: 1.0,
        keywords: &[
            "medicine", "health", "disease", "cure", "treatment", "hospital", "doctor",
            "nurse", "patient", "surgery", "vaccine", "epidemic", "pandemic", "medical",
            "physician", "therapy", "diagnosis", "virus", "bacteria", "infection", "outbreak",
            "pharmaceutical", "drug", "clinical",
        ],
        patterns: &[
            r"(discovered|developed|created) (a|the|an) (cure|treatment|vaccine)",
            r"(outbreak|epidemic|pandemic) of",
            r"medical (breakthrough|discovery|procedure)",
            r"(diagnosed|treated|cured)",
        ],
    },
    CategorySpec {
        category: Category::IndianHistory,
        weight: 1.3,
        keywords: &[
            "india", "indian", "gandhi", "nehru", "delhi", "mumbai", "kolkata",
            "independence", "republic of india", "maharaja", "british raj", "mughal",
            "ashoka", "taj mahal", "himalaya", "ganga", "ganges", "bengal", "punjab",
            "gujarat", "rajasthan", "maratha", "sikh", "hindu", "muslim", "jain", "vedic",
            "sanskrit", "urdu", "hindi", "tamil", "mahatma gandhi", "jawaharlal nehru",
            "sardar vallabhbhai patel", "subhas chandra bose", "bhagat singh",
            "dr. b.r. ambedkar", "lal bahadur shastri", "bal gangadhar tilak",
            "lala lajpat rai", "bipin chandra pal", "gopal krishna gokhale",
            "sarojini naidu", "c. rajagopalachari", "annie besant",
            "maulana abul kalam azad", "chittaranjan das", "motilal nehru",
            "vinayak damodar savarkar", "rajendra prasad", "rani lakshmibai", "tantia tope",
            "mangal pandey", "dadabhai naoroji", "madan mohan malaviya",
        ],
        patterns: INDIAN_CONTEXT_PATTERNS,
    },
    CategorySpec {
        category: Category::Disasters,
        weight: 1.0,
        keywords: &[
            "disaster", "accident", "earthquake", "flood", "hurricane", "tornado", "tsunami",
            "volcanic eruption", "explosion", "fire", "crash", "sinking", "collapse",
            "catastrophe", "tragedy", "emergency", "rescue", "survivor",
        ],
        patterns: &[
            r"(killed|claimed) [0-9]+ (lives|people)",
            r"(struck|hit|devastated) (causing|resulting in)",
            r"(worst|deadliest|most destructive) (disaster|accident|catastrophe)",
            r"(rescue|emergency|relief) (operation|effort|response)",
        ],
    },
];

const INDIAN_CONTEXT_PATTERNS: &[&str] = &[
    r"in India",
    r"Indian (government|parliament|leader|movement)",
    r"(Mughal|Maratha|Gupta|Maurya|Chola|Vijayanagara) (Empire|Kingdom|Dynasty)",
    r"(freedom|independence) (movement|struggle) (of|in) India",
];

const INDIAN_CORE_KEYWORDS: &[&str] = &[
    "india", "indian", "gandhi", "nehru", "delhi", "mumbai", "kolkata", "british raj",
    "mughal", "maratha", "ashoka", "taj mahal", "himalaya", "indira gandhi", "rajiv gandhi",
    "sardar patel", "subhas chandra bose", "bhagat singh", "ambedkar", "lal bahadur shastri",
];

const INDIAN_SECONDARY_KEYWORDS: &[&str] = &[
    "independence", "republic of india", "maharaja", "ganga", "ganges", "bengal", "punjab",
    "gujarat", "rajasthan", "sikh", "hindu", "muslim", "buddhist", "jain", "vedic",
    "sanskrit", "urdu", "hindi", "tamil",
];

const INDIAN_ANTI_PATTERNS: &[&str] = &[
    r"Indian Ocean",
    r"West Indies",
    r"East India Company",
    r"American Indian",
    r"Indianapolis",
    r"Indiana",
];

const ARTS_CORE_KEYWORDS: &[&str] = &[
    "art", "music", "literature", "painting", "sculpture", "novel", "poetry", "theater",
    "cinema", "film", "movie", "actor", "actress", "director", "composer", "musician",
    "artist", "writer", "author", "play", "concert", "exhibition", "museum", "gallery",
    "performance", "dance", "ballet", "opera", "symphony", "orchestra", "band",
];

const ARTS_SECONDARY_KEYWORDS: &[&str] = &[
    "cultural", "artistic", "creative", "premiere", "debut", "masterpiece", "composition",
    "publication", "release", "award", "festival", "ceremony", "heritage", "tradition",
    "folklore", "crafts", "design", "fashion",
];

const ARTS_CONTEXT_PATTERNS: &[&str] = &[
    r"(wrote|published|released) (a|the|their) (book|novel|poem|song|album)",
    r"(premiered|debuted|opened) (at|in) (the )?",
    r"(painted|sculpted|composed|directed|produced)",
    r"(won|awarded|received) (a|the|an) (award|prize|medal)",
    r"(performed|sang|played|exhibited) (at|in|on) (the )?",
    r"(festival|exhibition|show|performance|concert) (of|at|in) (the )?",
];

const ARTS_ANTI_PATTERNS: &[&str] = &[r"political art", r"state of the art", r"martial art"];

/// Compiles patterns as case-insensitive regexes.
fn compile(patterns: &[&str]) -> Result<Vec<Regex>, regex::Error> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)))
        .collect()
}

fn keyword_hits(keywords: &[&str], text_lower: &str) -> usize {
    keywords.iter().filter(|k| text_lower.contains(*k)).count()
}

fn pattern_hits(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().filter(|p| p.is_match(text)).count()
}

/// Keyword/pattern evidence for one topic (Indian history, arts).
#[derive(Debug, Clone)]
struct TopicDetector {
    core: &'static [&'static str],
    secondary: &'static [&'static str],
    context: Vec<Regex>,
    anti: Vec<Regex>,
}

impl TopicDetector {
    fn new(
        core: &'static [&'static str],
        secondary: &'static [&'static str],
        context: &[&str],
        anti: &[&str],
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            core,
            secondary,
            context: compile(context)?,
            anti: compile(anti)?,
        })
    }

    /// Anti-patterns raise the bar to two core keywords or one context hit.
    fn overridden_anti_pattern(&self, text: &str, text_lower: &str) -> Option<bool> {
        if self.anti.iter().any(|p| p.is_match(text)) {
            let core = keyword_hits(self.core, text_lower);
            let context = pattern_hits(&self.context, text);
            return Some(core >= 2 || context >= 1);
        }
        None
    }
}

/// Scoring rule for one category.
#[derive(Debug, Clone)]
struct CategoryRule {
    category: Category,
    weight: f32,
    keywords: &'static [&'static str],
    patterns: Vec<Regex>,
}

/// Assigns categories to event text.
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    indian: TopicDetector,
    arts: TopicDetector,
}

impl Categorizer {
    /// Creates a categorizer with the built-in weights.
    pub fn new() -> Result<Self, CuratorError> {
        let rules = CATEGORY_SPECS
            .iter()
            .map(|spec| {
                Ok(CategoryRule {
                    category: spec.category,
                    weight: spec.weight,
                    keywords: spec.keywords,
                    patterns: compile(spec.patterns)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            rules,
            indian: TopicDetector::new(
                INDIAN_CORE_KEYWORDS,
                INDIAN_SECONDARY_KEYWORDS,
                INDIAN_CONTEXT_PATTERNS,
                INDIAN_ANTI_PATTERNS,
            )?,
            arts: TopicDetector::new(
                ARTS_CORE_KEYWORDS,
                ARTS_SECONDARY_KEYWORDS,
                ARTS_CONTEXT_PATTERNS,
                ARTS_ANTI_PATTERNS,
            )?,
        })
    }

    /// Creates a categorizer with weights overridden by category name.
    ///
    /// Unknown names are logged and ignored.
    pub fn with_weights(overrides: &BTreeMap<String, f32>) -> Result<Self, CuratorError> {
        let mut categorizer = Self::new()?;
        for (name, weight) in overrides {
            match name.parse::<Category>() {
                Ok(category) => categorizer.set_weight(category, *weight),
                Err(e) => tracing::warn!(%e, "ignoring category weight override"),
            }
        }
        Ok(categorizer)
    }

    /// Overrides the weight of one category.
    pub fn set_weight(&mut self, category: Category, weight: f32) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.category == category) {
            rule.weight = weight;
        }
    }

    /// Current weight of a category, if it is scored.
    pub fn weight(&self, category: Category) -> Option<f32> {
        self.rules
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.weight)
    }

    /// Scores every category for `text`, in table order.
    pub fn scores(&self, text: &str) -> Vec<(Category, f32)> {
        let text_lower = text.to_lowercase();
        let is_indian = self.is_indian_event(text);

        self.rules
            .iter()
            .map(|rule| {
                let keywords = keyword_hits(rule.keywords, &text_lower) as f32;
                let context = pattern_hits(&rule.patterns, text) as f32;
                let mut score = keywords * rule.weight + context * rule.weight * CONTEXT_BONUS;
                if rule.category == Category::IndianHistory && score > 0.0 && !is_indian {
                    score *= NON_INDIAN_PENALTY;
                }
                (rule.category, score)
            })
            .collect()
    }

    /// Picks the best category for `text`.
    ///
    /// Ties go to the category listed first. Text matching nothing is
    /// filed under [`Category::Other`].
    pub fn categorize(&self, text: &str) -> Category {
        if text.trim().is_empty() {
            return Category::Other;
        }

        let mut best = (Category::Other, 0.0f32);
        for (category, score) in self.scores(text) {
            if score > best.1 {
                best = (category, score);
            }
        }
        best.0
    }

    /// Returns true if the text is genuinely about Indian history.
    ///
    /// One core keyword suffices; secondary keywords need a context
    /// pattern as well. Anti-patterns ("Indian Ocean", "Indiana") demand
    /// two core keywords or a context pattern.
    pub fn is_indian_event(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let text_lower = text.to_lowercase();
        if let Some(verdict) = self.indian.overridden_anti_pattern(text, &text_lower) {
            return verdict;
        }

        if keyword_hits(self.indian.core, &text_lower) >= 1 {
            return true;
        }
        keyword_hits(self.indian.secondary, &text_lower) >= 1
            && pattern_hits(&self.indian.context, text) >= 1
    }

    /// Returns true if the text is genuinely about arts and culture.
    ///
    /// Needs two core keywords, one core plus one secondary keyword, or a
    /// context pattern.
    pub fn is_arts_culture_event(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let text_lower = text.to_lowercase();
        if let Some(verdict) = self.arts.overridden_anti_pattern(text, &text_lower) {
            return verdict;
        }

        let core = keyword_hits(self.arts.core, &text_lower);
        if core >= 2 {
            return true;
        }
        let secondary = keyword_hits(self.arts.secondary, &text_lower);
        let context = pattern_hits(&self.arts.context, text);
        (core >= 1 && secondary >= 1) || context >= 1
    }
}
