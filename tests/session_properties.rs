//! Property-based tests for whole-game scoring and lifeline rules.
//!
//! Increase cases locally with: PROPTEST_CASES=800 cargo test --test session_properties

use std::env;

use kbc_quiz::game::{GameEvent, Lifeline, LifelineEffect, Outcome, Phase, SessionError};
use kbc_quiz::{load_builtin_deck, PrizeLadder, Session};
use proptest::prelude::*;

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn session(seed: u64) -> Session {
    Session::seeded(load_builtin_deck().unwrap(), PrizeLadder::default(), Some(seed)).unwrap()
}

fn play(session: &mut Session, option: usize) -> GameEvent {
    session.select(option).unwrap();
    session.resolve().unwrap();
    session.advance().unwrap()
}

fn play_correct(session: &mut Session) -> GameEvent {
    let correct = session.current_question().correct_index;
    play(session, correct)
}

/// Any wrong option still selectable on the current question.
fn selectable_wrong(session: &Session) -> usize {
    let question = session.current_question();
    question
        .wrong_options()
        .find(|&o| !session.is_eliminated(o))
        .unwrap()
}

fn lifeline_order() -> impl Strategy<Value = Vec<Lifeline>> {
    Just(Lifeline::ALL.to_vec()).prop_shuffle()
}

/// Each lifeline paired with the question index at which it is called.
fn lifeline_schedule() -> impl Strategy<Value = Vec<(Lifeline, usize)>> {
    (lifeline_order(), prop::collection::vec(0..10usize, 3))
        .prop_map(|(order, at)| order.into_iter().zip(at).collect())
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn winnings_are_always_a_ladder_value(
        seed in any::<u64>(),
        wrong_at in prop::option::of(1..=10usize),
        schedule in lifeline_schedule(),
    ) {
        let ladder = PrizeLadder::default();
        let mut s = session(seed);
        while !s.is_over() {
            prop_assert!(ladder.is_valid_amount(s.winnings()));
            for &(lifeline, at) in &schedule {
                if at == s.position() {
                    s.use_lifeline(lifeline).unwrap();
                    prop_assert!(ladder.is_valid_amount(s.winnings()));
                }
            }
            let option = if wrong_at == Some(s.question_number()) {
                selectable_wrong(&s)
            } else {
                s.current_question().correct_index
            };
            play(&mut s, option);
        }
        prop_assert!(ladder.is_valid_amount(s.winnings()));
    }

    #[test]
    fn lifelines_are_single_use(seed in any::<u64>(), order in lifeline_order()) {
        let mut s = session(seed);
        for lifeline in order {
            s.use_lifeline(lifeline).unwrap();
            let deck = s.deck().to_vec();
            let eliminated = s.eliminated().clone();
            prop_assert_eq!(s.use_lifeline(lifeline), Err(SessionError::LifelineUsed(lifeline)));
            prop_assert_eq!(s.deck(), deck.as_slice());
            prop_assert_eq!(s.eliminated(), &eliminated);
            prop_assert_eq!(s.phase(), Phase::AwaitingAnswer);
        }
        prop_assert_eq!(s.lifelines().available().count(), 0);
    }

    #[test]
    fn fifty_fifty_leaves_correct_and_one_wrong(seed in any::<u64>(), answered in 0..10usize) {
        let mut s = session(seed);
        for _ in 0..answered {
            play_correct(&mut s);
        }
        let correct = s.current_question().correct_index;
        s.use_lifeline(Lifeline::FiftyFifty).unwrap();

        prop_assert_eq!(s.eliminated().len(), 2);
        prop_assert!(s.eliminated().iter().all(|&o| o != correct));
        let selectable: Vec<usize> = (0..4).filter(|&o| !s.is_eliminated(o)).collect();
        prop_assert_eq!(selectable.len(), 2);
        prop_assert!(selectable.contains(&correct));
    }

    #[test]
    fn flip_only_swaps_forward(seed in any::<u64>(), answered in 0..10usize) {
        let mut s = session(seed);
        for _ in 0..answered {
            play_correct(&mut s);
        }

        let before = s.deck().to_vec();
        let position = s.position();
        let event = s.use_lifeline(Lifeline::Flip).unwrap();
        match event {
            GameEvent::LifelineUsed(LifelineEffect::Flip { swapped_with: Some(target) }) => {
                prop_assert!(target > position);
                prop_assert_eq!(&s.deck()[..position], &before[..position]);
                prop_assert_eq!(&s.deck()[position], &before[target]);
                prop_assert_eq!(&s.deck()[target], &before[position]);
            }
            GameEvent::LifelineUsed(LifelineEffect::Flip { swapped_with: None }) => {
                prop_assert_eq!(position, before.len() - 1);
                prop_assert_eq!(s.deck(), before.as_slice());
            }
            other => prop_assert!(false, "unexpected event {:?}", other),
        }
    }

    #[test]
    fn perfect_run_takes_top_prize(seed in any::<u64>(), schedule in lifeline_schedule()) {
        let mut s = session(seed);
        let mut last = None;
        while !s.is_over() {
            for &(lifeline, at) in &schedule {
                if at == s.position() {
                    s.use_lifeline(lifeline).unwrap();
                }
            }
            last = Some(play_correct(&mut s));
        }
        prop_assert_eq!(
            last,
            Some(GameEvent::GameOver { outcome: Outcome::Completed, winnings: 10_000 })
        );
    }

    #[test]
    fn wrong_answer_pays_previous_rung(seed in any::<u64>(), number in 1..=10usize) {
        let ladder = PrizeLadder::default();
        let mut s = session(seed);
        while s.question_number() < number {
            play_correct(&mut s);
        }
        let wrong = selectable_wrong(&s);
        let expected = if number == 1 { 0 } else { ladder.prize(number - 1) };
        prop_assert_eq!(
            play(&mut s, wrong),
            GameEvent::GameOver { outcome: Outcome::WrongAnswer, winnings: expected }
        );
        prop_assert_eq!(s.winnings(), expected);
    }

    #[test]
    fn quitting_keeps_last_resolved_winnings(
        seed in any::<u64>(),
        answered in 0..10usize,
        order in lifeline_order(),
        lifelines_before_quit in 0..=3usize,
    ) {
        let mut s = session(seed);
        for _ in 0..answered {
            play_correct(&mut s);
        }
        for &lifeline in &order[..lifelines_before_quit] {
            s.use_lifeline(lifeline).unwrap();
        }
        let before = s.winnings();
        prop_assert_eq!(
            s.quit(),
            Ok(GameEvent::GameOver { outcome: Outcome::Quit, winnings: before })
        );
        prop_assert_eq!(s.winnings(), before);
        prop_assert_eq!(s.select(0), Err(SessionError::GameOver));
    }
}
