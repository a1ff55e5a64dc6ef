// Integration tests for the evaluator and the game session
// Exercises the public API the way a front end would

use word_game::core::{Mark, Word, evaluate};
use word_game::game::{
    GameConfig, InvalidInput, NoOp, Outcome, Rejection, Session, SessionState,
};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn marks(guess: &str, secret: &str) -> Vec<Mark> {
    evaluate(&word(guess), &word(secret)).marks().to_vec()
}

/// Every word of `length` letters over `alphabet`
fn all_words(alphabet: &[u8], length: usize) -> Vec<Word> {
    let mut words = vec![String::new()];
    for _ in 0..length {
        words = words
            .into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&b| {
                    let mut next = prefix.clone();
                    next.push(char::from(b));
                    next
                })
            })
            .collect();
    }
    words.iter().map(|w| word(w)).collect()
}

// ============================================================================
// Evaluator properties
// ============================================================================

#[test]
fn test_evaluate_exhaustive_small_alphabet() {
    // 3 letters, length 4: 81 x 81 pairs covers every duplicate layout
    let words = all_words(b"ABC", 4);

    for secret in &words {
        let secret_counts = secret.letter_counts();
        for guess in &words {
            let feedback = evaluate(guess, secret);

            // one mark per position
            assert_eq!(feedback.len(), 4);

            for (i, &mark) in feedback.marks().iter().enumerate() {
                // Correct exactly where letters agree
                assert_eq!(
                    mark == Mark::Correct,
                    guess.letter_at(i) == secret.letter_at(i),
                    "{guess} vs {secret} at {i}"
                );
            }

            // Correct + Present for a letter never exceeds its count in the secret
            for (&letter, &available) in &guess.letter_counts() {
                let hits = guess
                    .letters()
                    .iter()
                    .zip(feedback.marks())
                    .filter(|&(&l, &m)| l == letter && m != Mark::Absent)
                    .count();
                let in_secret = secret_counts.get(&letter).copied().unwrap_or(0);
                assert!(hits <= in_secret, "{guess} vs {secret}: {hits} > {in_secret}");
                // and reaches it whenever the guess has enough copies
                assert_eq!(hits, available.min(in_secret), "{guess} vs {secret}");
            }
        }
    }
}

#[test]
fn test_evaluate_is_repeatable() {
    let guess = word("speed");
    let secret = word("erase");
    let first = evaluate(&guess, &secret);
    for _ in 0..5 {
        assert_eq!(evaluate(&guess, &secret), first);
    }
}

#[test]
fn test_evaluate_identical_words_all_correct() {
    assert_eq!(marks("WORDS", "WORDS"), vec![Mark::Correct; 5]);
}

#[test]
fn test_evaluate_speed_erase_consumes_each_letter_once() {
    use Mark::{Absent, Present};
    // ERASE: E R A S E. S finds the S, each E of SPEED finds one E.
    assert_eq!(
        marks("SPEED", "ERASE"),
        vec![Present, Absent, Present, Present, Absent]
    );
}

#[test]
fn test_evaluate_surplus_copies_are_absent() {
    use Mark::{Absent, Correct, Present};
    assert_eq!(
        marks("EERIE", "ERASE"),
        vec![Correct, Absent, Present, Absent, Correct]
    );
    // PANEL has one L and one A, neither in place: the first L and the
    // first A each take one, the second copies are left Absent
    assert_eq!(
        marks("LLAMA", "PANEL"),
        vec![Present, Absent, Present, Absent, Absent]
    );
}

#[test]
fn test_evaluate_normalizes_case() {
    assert_eq!(marks("words", "WORDS"), vec![Mark::Correct; 5]);
}

// ============================================================================
// Session behaviour
// ============================================================================

fn classic(secret: &str) -> Session {
    Session::new(word(secret), GameConfig::default()).unwrap()
}

fn submit(session: &mut Session, guess: &str) -> Outcome {
    session.type_word(guess).unwrap();
    session.submit_guess().unwrap()
}

#[test]
fn test_full_attempt_submits_and_clears() {
    let mut session = classic("words");
    for ch in "crane".chars() {
        session.add_letter(ch).unwrap();
    }
    assert_eq!(session.attempt().len(), 5);

    let before = session.round();
    let outcome = session.submit_guess().unwrap();
    assert!(matches!(outcome, Outcome::GuessSubmitted { round: 1, .. }));
    assert!(session.attempt().is_empty());
    assert_eq!(session.round(), before + 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_correct_word_on_last_attempt_wins() {
    let mut session = classic("words");
    for guess in ["crane", "slate", "plumb", "fight", "jokey"] {
        submit(&mut session, guess);
        assert_eq!(session.state(), SessionState::InProgress);
    }
    let outcome = submit(&mut session, "words");
    assert!(matches!(
        outcome,
        Outcome::GuessSubmitted {
            round: 6,
            state: SessionState::Won,
            ..
        }
    ));
    assert_eq!(session.state(), SessionState::Won);
}

#[test]
fn test_wrong_word_on_last_attempt_loses() {
    let mut session = classic("words");
    for guess in ["crane", "slate", "plumb", "fight", "jokey", "sword"] {
        submit(&mut session, guess);
    }
    assert_eq!(session.state(), SessionState::Lost);
    assert_eq!(session.history().len(), 6);
    assert_eq!(session.remaining_attempts(), 0);
}

#[test]
fn test_mutators_after_terminal_state() {
    for (secret, guesses, end) in [
        ("words", vec!["words"], SessionState::Won),
        ("words", vec!["crane"; 6], SessionState::Lost),
    ] {
        let mut session = classic(secret);
        for guess in guesses {
            submit(&mut session, guess);
        }
        assert_eq!(session.state(), end);

        let history_before = session.history().to_vec();
        let violation = Err(Rejection::TerminalStateViolation(end));
        assert_eq!(session.add_letter('A'), violation);
        assert_eq!(session.delete_letter(), violation);
        assert_eq!(session.submit_guess(), violation);
        assert!(session.attempt().is_empty());
        assert_eq!(session.history(), history_before.as_slice());
        assert_eq!(session.state(), end);
    }
}

#[test]
fn test_noop_requests_leave_attempt_unchanged() {
    let mut session = classic("words");
    assert_eq!(
        session.delete_letter(),
        Err(Rejection::NoOpRequested(NoOp::AttemptEmpty))
    );
    assert!(session.attempt().is_empty());

    session.type_word("world").unwrap();
    assert_eq!(
        session.add_letter('S'),
        Err(Rejection::NoOpRequested(NoOp::AttemptFull))
    );
    assert_eq!(session.attempt_text(), "WORLD");
}

#[test]
fn test_invalid_input_rejected() {
    let mut session = classic("words");
    assert_eq!(
        session.add_letter('?'),
        Err(Rejection::InvalidInput(InvalidInput::NotALetter('?')))
    );
    session.type_word("word").unwrap();
    assert_eq!(
        session.submit_guess(),
        Err(Rejection::InvalidInput(InvalidInput::WrongLength {
            expected: 5,
            actual: 4
        }))
    );
    assert_eq!(session.round(), 0);
    assert_eq!(session.attempt_text(), "WORD");
}

#[test]
fn test_attempt_length_stays_in_bounds() {
    let mut session = classic("words");
    for ch in "abcdefghij".chars() {
        let _ = session.add_letter(ch);
        assert!(session.attempt().len() <= 5);
    }
    for _ in 0..10 {
        let _ = session.delete_letter();
    }
    assert!(session.attempt().is_empty());
}

#[test]
fn test_custom_length_and_attempts() {
    let mut session = Session::with_max_attempts(word("moon"), 2).unwrap();
    assert_eq!(session.config().word_length(), 4);
    let outcome = submit(&mut session, "noon");
    let Outcome::GuessSubmitted { feedback, .. } = outcome else {
        panic!("expected a submitted guess");
    };
    assert_eq!(feedback.to_string(), "-GGG");
    submit(&mut session, "moon");
    assert_eq!(session.state(), SessionState::Won);
}

#[test]
fn test_history_pairs_guess_with_feedback() {
    let mut session = classic("slate");
    submit(&mut session, "crane");
    submit(&mut session, "plate");
    let rounds = session.history();
    assert_eq!(rounds[0].guess.text(), "CRANE");
    assert_eq!(rounds[0].feedback.to_string(), "--G-G");
    assert_eq!(rounds[1].guess.text(), "PLATE");
    assert_eq!(rounds[1].feedback.to_string(), "-GGGG");
}
