//! The three game panels behind the tab strip and the input they react to.

use log::{debug, error};

use crate::keymap::{KeyCommand, map_key};
use crate::perf::PerfOptimizer;
use crate::quiz::{
    ChallengeItem, QuizDefinition, QuizSession, Selection, Verdict, bug_hunt, web_myths,
};
use crate::render::{QuizView, quiz_markup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameId {
    Bug,
    Perf,
    Myths,
}

impl GameId {
    /// Parse a tab's `data-game` attribute.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "bug" => Some(GameId::Bug),
            "perf" => Some(GameId::Perf),
            "myths" => Some(GameId::Myths),
            _ => None,
        }
    }

    pub fn panel_id(self) -> &'static str {
        match self {
            GameId::Bug => "game-bug",
            GameId::Perf => "game-perf",
            GameId::Myths => "game-myths",
        }
    }

    /// Container the quiz markup is rendered into; the optimizer has none.
    pub fn area_id(self) -> Option<&'static str> {
        match self {
            GameId::Bug => Some("bug-game-area"),
            GameId::Perf => None,
            GameId::Myths => Some("myths-game-area"),
        }
    }
}

/// A player action on a quiz panel, from a click or a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Answer(Selection),
    Advance,
    Restart,
}

impl PanelAction {
    /// Decode the `data-*` attributes the render layer puts on buttons.
    pub fn from_attrs(action: &str, idx: Option<&str>, answer: Option<&str>) -> Option<Self> {
        match action {
            "answer" => match (idx, answer) {
                (Some(i), _) => Some(PanelAction::Answer(Selection::Option(i.parse().ok()?))),
                (None, Some("true")) => Some(PanelAction::Answer(Selection::Boolean(true))),
                (None, Some("false")) => Some(PanelAction::Answer(Selection::Boolean(false))),
                _ => None,
            },
            "next" => Some(PanelAction::Advance),
            "restart" => Some(PanelAction::Restart),
            _ => None,
        }
    }
}

impl From<KeyCommand> for PanelAction {
    fn from(cmd: KeyCommand) -> Self {
        match cmd {
            KeyCommand::Answer(sel) => PanelAction::Answer(sel),
            KeyCommand::Advance => PanelAction::Advance,
        }
    }
}

/// One quiz game: its content, the running session and the last verdict shown.
pub struct QuizPanel {
    prefix: &'static str,
    definition: QuizDefinition,
    /// `None` when the content failed validation; the panel then stays blank.
    session: Option<QuizSession>,
    last: Option<Verdict>,
}

impl QuizPanel {
    pub fn new(prefix: &'static str, definition: QuizDefinition) -> Self {
        let session = match definition.start() {
            Ok(s) => Some(s),
            Err(e) => {
                error!("quiz '{}' disabled: {}", definition.title, e);
                None
            }
        };
        Self {
            prefix,
            definition,
            session,
            last: None,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn current_item(&self) -> Option<&ChallengeItem> {
        self.session.as_ref()?.current_item()
    }

    /// Apply an action. Returns true if the panel needs re-rendering.
    pub fn handle(&mut self, action: PanelAction) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match action {
            PanelAction::Answer(sel) => match session.submit_answer(sel) {
                Some(verdict) => {
                    debug!(
                        "{}: item {} answered, correct={}",
                        self.prefix, verdict.item, verdict.correct
                    );
                    self.last = Some(verdict);
                    true
                }
                None => false,
            },
            PanelAction::Advance => {
                let before = session.current_index();
                session.advance();
                session.current_index() != before
            }
            PanelAction::Restart => {
                session.restart();
                self.last = None;
                debug!("{}: restarted", self.prefix);
                true
            }
        }
    }

    pub fn markup(&self) -> String {
        match &self.session {
            Some(session) => quiz_markup(&QuizView {
                prefix: self.prefix,
                definition: &self.definition,
                session,
                last: self.last.as_ref(),
            }),
            None => String::new(),
        }
    }
}

/// Tabbed game area. Each panel keeps its own state regardless of which is shown.
pub struct Games {
    active: GameId,
    pub bug: QuizPanel,
    pub perf: PerfOptimizer,
    pub myths: QuizPanel,
}

impl Default for Games {
    fn default() -> Self {
        Self::new()
    }
}

impl Games {
    pub fn new() -> Self {
        Self::with_content(bug_hunt(), web_myths())
    }

    pub fn with_content(bug: QuizDefinition, myths: QuizDefinition) -> Self {
        Self {
            active: GameId::Bug,
            bug: QuizPanel::new("bug", bug),
            perf: PerfOptimizer::new(),
            myths: QuizPanel::new("myth", myths),
        }
    }

    pub fn active(&self) -> GameId {
        self.active
    }

    pub fn activate(&mut self, id: GameId) {
        self.active = id;
    }

    pub fn quiz(&self, id: GameId) -> Option<&QuizPanel> {
        match id {
            GameId::Bug => Some(&self.bug),
            GameId::Myths => Some(&self.myths),
            GameId::Perf => None,
        }
    }

    pub fn quiz_mut(&mut self, id: GameId) -> Option<&mut QuizPanel> {
        match id {
            GameId::Bug => Some(&mut self.bug),
            GameId::Myths => Some(&mut self.myths),
            GameId::Perf => None,
        }
    }

    /// Route a key press to the active quiz. Returns the panel to re-render.
    pub fn handle_key(&mut self, key: &str) -> Option<GameId> {
        let id = self.active;
        let panel = self.quiz_mut(id)?;
        let cmd = map_key(key, panel.current_item())?;
        panel.handle(cmd.into()).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Phase, Tier};

    #[test]
    fn test_from_attrs() {
        assert_eq!(
            PanelAction::from_attrs("answer", Some("2"), None),
            Some(PanelAction::Answer(Selection::Option(2)))
        );
        assert_eq!(
            PanelAction::from_attrs("answer", None, Some("false")),
            Some(PanelAction::Answer(Selection::Boolean(false)))
        );
        assert_eq!(PanelAction::from_attrs("answer", Some("x"), None), None);
        assert_eq!(
            PanelAction::from_attrs("restart", None, None),
            Some(PanelAction::Restart)
        );
        assert_eq!(PanelAction::from_attrs("bogus", None, None), None);
    }

    #[test]
    fn test_keys_only_reach_active_panel() {
        let mut games = Games::new();
        assert_eq!(games.handle_key("t"), None);
        assert_eq!(games.handle_key("1"), Some(GameId::Bug));
        assert_eq!(games.myths.session().unwrap().outcomes().len(), 0);

        games.activate(GameId::Myths);
        assert_eq!(games.handle_key("f"), Some(GameId::Myths));
        // bug panel kept its answered state
        assert_eq!(games.bug.session().unwrap().phase(), Phase::Answered(0));
    }

    #[test]
    fn test_zero_key_is_ignored() {
        let mut games = Games::new();
        assert_eq!(games.handle_key("0"), None);
        assert_eq!(games.bug.session().unwrap().phase(), Phase::Presenting(0));
        assert_eq!(games.handle_key("2"), Some(GameId::Bug));
        assert_eq!(games.bug.session().unwrap().phase(), Phase::Answered(0));
    }

    #[test]
    fn test_perf_tab_ignores_keys() {
        let mut games = Games::new();
        games.activate(GameId::Perf);
        assert_eq!(games.handle_key("Enter"), None);
        assert_eq!(games.handle_key("1"), None);
    }

    #[test]
    fn test_second_answer_needs_no_render() {
        let mut games = Games::new();
        assert!(games.bug.handle(PanelAction::Answer(Selection::Option(0))));
        assert!(!games.bug.handle(PanelAction::Answer(Selection::Option(1))));
        assert!(games.bug.handle(PanelAction::Advance));
        assert!(!games.bug.handle(PanelAction::Advance));
    }

    #[test]
    fn test_keyboard_playthrough_of_myths() {
        let mut games = Games::new();
        games.activate(GameId::Myths);
        for key in [
            "f", "Enter", "t", "Enter", "f", "Enter", "t", "Enter", "f", "Enter", "t", "Enter",
        ] {
            games.handle_key(key);
        }
        let summary = games.myths.session().unwrap().summary().unwrap();
        assert_eq!((summary.score, summary.total), (6, 6));
        assert_eq!(summary.tier, Tier::Perfect);
        assert!(games.myths.markup().contains("Play Again"));
        assert!(games.myths.handle(PanelAction::Restart));
        assert_eq!(games.myths.session().unwrap().phase(), Phase::Presenting(0));
    }

    #[test]
    fn test_invalid_content_leaves_panel_blank() {
        let mut bad = bug_hunt();
        if let ChallengeItem::MultipleChoice(mc) = &mut bad.items[0] {
            mc.options[1].correct = true;
        }
        let mut games = Games::with_content(bad, web_myths());
        assert!(games.bug.session().is_none());
        assert!(games.bug.markup().is_empty());
        assert!(!games.bug.handle(PanelAction::Restart));
        assert!(games.myths.session().is_some());
    }
}
