//! Typed answers to the recommendation questionnaire.
//!
//! Visitors answer with free strings; anything outside the known options
//! degrades to "no preference" rather than an error.

/// How the visitor is feeling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
}

impl Mood {
    /// Parse a normalized answer ("happy", "sad", "neutral").
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "happy" => Some(Mood::Happy),
            "sad" => Some(Mood::Sad),
            "neutral" => Some(Mood::Neutral),
            _ => None,
        }
    }

    /// Genre keywords that earn a movie the mood point.
    ///
    /// Neutral has none, so it never scores.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &["comedy", "family", "animation", "musical"],
            Mood::Sad => &["drama", "tragedy"],
            Mood::Neutral => &[],
        }
    }
}

/// Who the visitor is watching with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occasion {
    Alone,
    Free,
    Special,
}

impl Occasion {
    /// Parse a normalized answer ("alone", "free", "special").
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "alone" => Some(Occasion::Alone),
            "free" => Some(Occasion::Free),
            "special" => Some(Occasion::Special),
            _ => None,
        }
    }

    /// Genre keywords that earn a movie the occasion point.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Occasion::Alone => &["drama", "mystery", "thriller"],
            Occasion::Free => &["comedy", "adventure"],
            Occasion::Special => &["romance", "fantasy", "animation"],
        }
    }
}

/// Age cut-off for "very old" movies
pub const VERY_OLD_YEARS: i32 = 25;

/// How recent the movie should be.
///
/// There is no "reject everything" variant: an answer outside the known
/// options is read as `Any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeline {
    /// Released within the last N years ("5", "10", "15", "25")
    LastYears(i32),
    /// No preference ("any", empty or unrecognized)
    #[default]
    Any,
    /// At least 25 years old ("very old")
    VeryOld,
}

impl Timeline {
    /// Parse a normalized answer.
    pub fn from_answer(answer: &str) -> Self {
        match answer {
            "5" => Timeline::LastYears(5),
            "10" => Timeline::LastYears(10),
            "15" => Timeline::LastYears(15),
            "25" => Timeline::LastYears(25),
            "very old" => Timeline::VeryOld,
            _ => Timeline::Any,
        }
    }

    /// Whether a movie released in `release_year` fits this timeline.
    ///
    /// Example (current_year = 2025):
    ///   LastYears(5).admits(2020) -> true, admits(2019) -> false
    ///   VeryOld.admits(2000)      -> true, admits(2001) -> false
    pub fn admits(self, release_year: i32, current_year: i32) -> bool {
        match self {
            Timeline::LastYears(years) => release_year >= current_year - years,
            Timeline::Any => true,
            Timeline::VeryOld => release_year <= current_year - VERY_OLD_YEARS,
        }
    }
}

/// Most genres a visitor may pick
pub const MAX_GENRES: usize = 3;

/// A visitor's normalized questionnaire answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Questionnaire {
    pub mood: Option<Mood>,
    pub occasion: Option<Occasion>,
    /// Lower-cased, non-empty, at most `MAX_GENRES`
    pub genres: Vec<String>,
    /// Exclude movies showing adult-content signals
    pub family_friendly: bool,
    pub timeline: Timeline,
}

impl Questionnaire {
    /// Build from raw answers; every string is trimmed and lower-cased.
    pub fn from_answers(
        mood: &str,
        occasion: &str,
        genres: &[String],
        age_appropriateness: &str,
        timeline: &str,
    ) -> Self {
        let genres = genres
            .iter()
            .map(|genre| normalize(genre))
            .filter(|genre| !genre.is_empty())
            .take(MAX_GENRES)
            .collect();

        Self {
            mood: Mood::from_answer(&normalize(mood)),
            occasion: Occasion::from_answer(&normalize(occasion)),
            genres,
            family_friendly: normalize(age_appropriateness) == "yes",
            timeline: Timeline::from_answer(&normalize(timeline)),
        }
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}
