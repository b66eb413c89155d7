// Integration tests for the sequential quiz engine.
// Native-only: exercises the public API without any browser APIs.

use portfolio_games::{
    ChallengeItem, Marker, Phase, QuizError, QuizSession, Selection, Tier,
    quiz::{BooleanStatement, ChoiceOption, MultipleChoice},
};

fn mc(correct: usize) -> ChallengeItem {
    ChallengeItem::MultipleChoice(MultipleChoice {
        prompt: "Which one?".into(),
        options: (0..3)
            .map(|i| ChoiceOption::new(format!("option {i}"), i == correct))
            .collect(),
        explanation: Some("because".into()),
        code: None,
        highlight: None,
    })
}

fn tf(answer: bool) -> ChallengeItem {
    ChallengeItem::Boolean(BooleanStatement {
        statement: "Statement".into(),
        answer,
        explanation: "because".into(),
    })
}

// Check the score/outcome bookkeeping after every transition.
fn assert_consistent(s: &QuizSession) {
    let correct = s.outcomes().iter().filter(|o| **o).count();
    assert_eq!(s.score(), correct, "score drifted from outcomes");
    let expected_len = match s.phase() {
        Phase::Answered(_) => s.current_index() + 1,
        Phase::Presenting(_) | Phase::Complete => s.current_index(),
    };
    assert_eq!(s.outcomes().len(), expected_len);
}

fn answer_and_advance(s: &mut QuizSession, sel: Selection) {
    s.submit_answer(sel).expect("answer accepted");
    assert_consistent(s);
    s.advance();
    assert_consistent(s);
}

#[test]
fn four_item_mixed_run_is_solid() {
    let items = vec![mc(0), mc(1), mc(2), mc(0)];
    let mut s = QuizSession::new(items).unwrap();
    assert_consistent(&s);
    answer_and_advance(&mut s, Selection::Option(0));
    answer_and_advance(&mut s, Selection::Option(2));
    answer_and_advance(&mut s, Selection::Option(2));
    answer_and_advance(&mut s, Selection::Option(0));

    assert_eq!(s.phase(), Phase::Complete);
    assert_eq!(s.score(), 3);
    assert_eq!(s.outcomes(), &[true, false, true, true]);
    let summary = s.summary().unwrap();
    assert_eq!((summary.score, summary.total), (3, 4));
    assert_eq!(summary.tier, Tier::Solid);
    assert_eq!(summary.percent(), 75);
}

#[test]
fn six_boolean_items_all_correct_is_perfect() {
    let answers = [false, true, false, true, false, true];
    let mut s = QuizSession::new(answers.iter().map(|a| tf(*a)).collect()).unwrap();
    for a in answers {
        answer_and_advance(&mut s, Selection::Boolean(a));
    }
    let summary = s.summary().unwrap();
    assert_eq!(summary.score, 6);
    assert_eq!(summary.tier, Tier::Perfect);
}

#[test]
fn markers_while_presenting_second_item() {
    let mut s = QuizSession::new(vec![mc(0), mc(0), mc(0), mc(0)]).unwrap();
    answer_and_advance(&mut s, Selection::Option(0));
    assert_eq!(s.phase(), Phase::Presenting(1));
    assert_eq!(
        s.progress_markers(),
        vec![
            Marker::AnsweredCorrect,
            Marker::Current,
            Marker::Pending,
            Marker::Pending
        ]
    );
}

#[test]
fn repeated_submit_does_not_change_state() {
    let mut s = QuizSession::new(vec![tf(true), tf(false)]).unwrap();
    let first = s.submit_answer(Selection::Boolean(true)).unwrap();
    assert!(first.correct);
    let snapshot = s.clone();
    assert!(s.submit_answer(Selection::Boolean(false)).is_none());
    assert!(s.submit_answer(Selection::Boolean(true)).is_none());
    assert_eq!(s, snapshot);
    assert_consistent(&s);
}

#[test]
fn single_item_completes_after_one_submit_and_advance() {
    let mut s = QuizSession::new(vec![mc(1)]).unwrap();
    assert_eq!(s.phase(), Phase::Presenting(0));
    s.submit_answer(Selection::Option(1)).unwrap();
    assert_eq!(s.phase(), Phase::Answered(0));
    assert_eq!(s.advance(), Phase::Complete);
    // Submitting after completion is ignored.
    assert!(s.submit_answer(Selection::Option(1)).is_none());
    assert_eq!(s.score(), 1);
}

#[test]
fn empty_session_is_complete_immediately() {
    let mut s = QuizSession::new(Vec::new()).unwrap();
    assert_eq!(s.phase(), Phase::Complete);
    assert!(s.progress_markers().is_empty());
    let summary = s.summary().unwrap();
    assert_eq!((summary.score, summary.total), (0, 0));
    assert_eq!(summary.tier, Tier::Developing);
    assert_eq!(summary.percent(), 0);
    s.restart();
    assert_eq!(s.phase(), Phase::Complete);
}

#[test]
fn restart_matches_fresh_session() {
    let items = vec![mc(0), tf(false), mc(2)];
    let fresh = QuizSession::new(items.clone()).unwrap();
    let mut s = QuizSession::new(items).unwrap();

    // restart mid-session
    s.submit_answer(Selection::Option(1)).unwrap();
    s.restart();
    assert_eq!(s, fresh);

    answer_and_advance(&mut s, Selection::Option(0));
    answer_and_advance(&mut s, Selection::Boolean(false));
    answer_and_advance(&mut s, Selection::Option(1));
    assert_eq!(s.phase(), Phase::Complete);
    s.restart();
    assert_eq!(s, fresh);
    assert_consistent(&s);
}

#[test]
fn summary_before_completion_is_an_error() {
    let mut s = QuizSession::new(vec![tf(true)]).unwrap();
    assert!(matches!(s.summary(), Err(QuizError::SummaryUnavailable)));
    s.submit_answer(Selection::Boolean(true)).unwrap();
    assert!(matches!(s.summary(), Err(QuizError::SummaryUnavailable)));
}

#[test]
fn misconfigured_item_rejected_at_construction() {
    let broken = ChallengeItem::MultipleChoice(MultipleChoice {
        prompt: "?".into(),
        options: vec![ChoiceOption::new("a", true), ChoiceOption::new("b", true)],
        explanation: None,
        code: None,
        highlight: None,
    });
    let err = QuizSession::new(vec![tf(true), broken]).unwrap_err();
    assert!(matches!(
        err,
        QuizError::MultipleCorrectOptions { item: 1, count: 2 }
    ));
    assert!(err.to_string().contains("item 1"));
}
