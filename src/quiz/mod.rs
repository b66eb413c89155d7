//! Sequential quiz engine shared by the portfolio mini-games.
//!
//! A [`QuizSession`] walks an ordered list of [`ChallengeItem`]s: each item is
//! presented, answered once, then the player advances. After the last item the
//! session is complete and a [`Summary`] is available. The engine is pure state;
//! markup lives in `crate::render` and DOM wiring in `crate::page`.
//!
//! Content for the built-in games lives in the child modules below.

use log::debug;
use thiserror::Error;

mod quiz_bugs;
mod quiz_myths;

pub use quiz_bugs::bug_hunt;
pub use quiz_myths::web_myths;

// --- Content -----------------------------------------------------------------

/// One answer option of a multiple-choice item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceOption {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub correct: bool,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, correct: bool) -> Self {
        Self {
            label: label.into(),
            correct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultipleChoice {
    pub prompt: String,
    pub options: Vec<ChoiceOption>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub explanation: Option<String>,
    /// Source snippet shown above the prompt (plain text, escaped on render).
    #[cfg_attr(feature = "serde", serde(default))]
    pub code: Option<String>,
    /// Fragment of `code` to highlight; first occurrence only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlight: Option<String>,
}

impl MultipleChoice {
    /// Index of the option flagged correct. Only meaningful after validation.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanStatement {
    pub statement: String,
    pub answer: bool,
    pub explanation: String,
}

/// One question unit of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ChallengeItem {
    MultipleChoice(MultipleChoice),
    Boolean(BooleanStatement),
}

impl ChallengeItem {
    pub fn explanation(&self) -> Option<&str> {
        match self {
            ChallengeItem::MultipleChoice(mc) => mc.explanation.as_deref(),
            ChallengeItem::Boolean(b) => Some(b.explanation.as_str()),
        }
    }

    fn correct_selection(&self) -> Option<Selection> {
        match self {
            ChallengeItem::MultipleChoice(mc) => mc.correct_index().map(Selection::Option),
            ChallengeItem::Boolean(b) => Some(Selection::Boolean(b.answer)),
        }
    }
}

/// Checks the exactly-one-correct-option rule over a whole item list.
pub fn validate_items(items: &[ChallengeItem]) -> Result<(), QuizError> {
    for (item, challenge) in items.iter().enumerate() {
        if let ChallengeItem::MultipleChoice(mc) = challenge {
            match mc.options.iter().filter(|o| o.correct).count() {
                1 => {}
                0 => return Err(QuizError::NoCorrectOption { item }),
                count => return Err(QuizError::MultipleCorrectOptions { item, count }),
            }
        }
    }
    Ok(())
}

// --- Errors ------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("item {item} has no option marked correct")]
    NoCorrectOption { item: usize },
    #[error("item {item} has {count} options marked correct, expected exactly one")]
    MultipleCorrectOptions { item: usize, count: usize },
    #[error("summary is not available until the session is complete")]
    SummaryUnavailable,
    #[cfg(feature = "serde_json")]
    #[error("invalid quiz content: {0}")]
    Parse(#[from] serde_json::Error),
}

// --- Session state -----------------------------------------------------------

/// What the player picked for the current item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Option(usize),
    Boolean(bool),
}

/// Result of a recorded answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub item: usize,
    pub correct: bool,
    pub selected: Selection,
    /// The selection that would have been correct (for highlighting).
    pub expected: Selection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Presenting(usize),
    Answered(usize),
    Complete,
}

/// Per-item progress indicator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Pending,
    Current,
    AnsweredCorrect,
    AnsweredIncorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Perfect,
    Solid,
    Developing,
}

impl Tier {
    /// Bucket a final score. An empty quiz collects no signal and gets the lowest tier.
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            Tier::Developing
        } else if score == total {
            Tier::Perfect
        } else if score * 2 >= total {
            Tier::Solid
        } else {
            Tier::Developing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::Solid => "solid",
            Tier::Developing => "developing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub tier: Tier,
}

impl Summary {
    /// Rounded percentage, 0 for an empty quiz.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.score * 100 + self.total / 2) / self.total) as u32
    }
}

/// One run through a fixed list of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    items: Vec<ChallengeItem>,
    current: usize,
    outcomes: Vec<bool>,
    score: usize,
}

impl QuizSession {
    /// Validates the items and starts at the first one (or complete, if empty).
    pub fn new(items: Vec<ChallengeItem>) -> Result<Self, QuizError> {
        validate_items(&items)?;
        Ok(Self {
            items,
            current: 0,
            outcomes: Vec::new(),
            score: 0,
        })
    }

    pub fn items(&self) -> &[ChallengeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        if self.current >= self.items.len() {
            Phase::Complete
        } else if self.outcomes.len() > self.current {
            Phase::Answered(self.current)
        } else {
            Phase::Presenting(self.current)
        }
    }

    /// The item on screen, if the session is not complete.
    pub fn current_item(&self) -> Option<&ChallengeItem> {
        self.items.get(self.current)
    }

    pub fn is_last_item(&self) -> bool {
        self.current + 1 >= self.items.len()
    }

    /// Records an answer for the presented item.
    ///
    /// Returns `None` (and leaves state untouched) when the item was already
    /// answered, the session is complete, or the selection does not belong to
    /// the current item.
    pub fn submit_answer(&mut self, selection: Selection) -> Option<Verdict> {
        let Phase::Presenting(item) = self.phase() else {
            debug!("ignoring answer {:?} outside presenting phase", selection);
            return None;
        };
        let challenge = &self.items[item];
        let correct = match (challenge, selection) {
            (ChallengeItem::MultipleChoice(mc), Selection::Option(idx)) => {
                mc.options.get(idx)?.correct
            }
            (ChallengeItem::Boolean(b), Selection::Boolean(answer)) => answer == b.answer,
            _ => {
                debug!("selection {:?} does not fit item {}", selection, item);
                return None;
            }
        };
        let expected = challenge.correct_selection()?;
        self.outcomes.push(correct);
        if correct {
            self.score += 1;
        }
        Some(Verdict {
            item,
            correct,
            selected: selection,
            expected,
        })
    }

    /// Moves past an answered item. Returns the new phase.
    pub fn advance(&mut self) -> Phase {
        if let Phase::Answered(_) = self.phase() {
            self.current += 1;
        } else {
            debug!("ignoring advance in {:?}", self.phase());
        }
        self.phase()
    }

    /// Back to the first item with a clean score.
    pub fn restart(&mut self) {
        self.current = 0;
        self.outcomes.clear();
        self.score = 0;
    }

    pub fn progress_markers(&self) -> Vec<Marker> {
        (0..self.items.len())
            .map(|i| match self.outcomes.get(i) {
                Some(true) => Marker::AnsweredCorrect,
                Some(false) => Marker::AnsweredIncorrect,
                None if i == self.current => Marker::Current,
                None => Marker::Pending,
            })
            .collect()
    }

    pub fn summary(&self) -> Result<Summary, QuizError> {
        if self.phase() != Phase::Complete {
            return Err(QuizError::SummaryUnavailable);
        }
        let total = self.items.len();
        Ok(Summary {
            score: self.score,
            total,
            tier: Tier::from_score(self.score, total),
        })
    }
}

// --- Quiz definitions --------------------------------------------------------

/// Closing line shown for each summary tier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierMessages {
    pub perfect: String,
    pub solid: String,
    pub developing: String,
}

impl TierMessages {
    pub fn for_tier(&self, tier: Tier) -> &str {
        match tier {
            Tier::Perfect => &self.perfect,
            Tier::Solid => &self.solid,
            Tier::Developing => &self.developing,
        }
    }
}

/// Static content for one quiz panel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizDefinition {
    pub title: String,
    pub items: Vec<ChallengeItem>,
    pub messages: TierMessages,
    /// Label of the advance button on every item but the last.
    pub next_label: String,
}

impl QuizDefinition {
    pub fn start(&self) -> Result<QuizSession, QuizError> {
        QuizSession::new(self.items.clone())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let def: QuizDefinition = serde_json::from_str(json)?;
        validate_items(&def.items)?;
        Ok(def)
    }
}
