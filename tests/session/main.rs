use keycalc::{HistoryError, Session, Validity, ERROR_SENTINEL};

fn press_all(session: &mut Session, keys: &[&str]) {
    for key in keys {
        session.press(key);
    }
}

#[test]
fn one_plus_two_equals_three() {
    let mut session = Session::new();
    press_all(&mut session, &["1", "+", "2", "="]);

    assert_eq!(session.display_text(), "3");
    assert_eq!(session.history_labels(), vec!["1+2", "=3"]);

    let snapshot = &session.history().snapshots()[0];
    assert_eq!(snapshot.equation(), "1+2");
    assert_eq!(snapshot.result(), "3");
    assert_eq!(snapshot.to_string(), "1+2 = 3");
}

#[test]
fn factorial_key_wraps_then_evaluates() {
    let mut session = Session::new();
    press_all(&mut session, &["5", "x!"]);
    assert_eq!(session.display_text(), "(5)!");

    session.press("=");
    assert_eq!(session.display_text(), "120");
    assert_eq!(session.history_labels(), vec!["(5)!", "=120"]);
}

#[test]
fn division_by_zero_shows_error_and_keeps_history_clean() {
    let mut session = Session::new();
    press_all(&mut session, &["5", "/", "0", "="]);

    assert_eq!(session.display_text(), ERROR_SENTINEL);
    assert!(session.history().is_empty());
    assert_eq!(session.validity(), Validity::Invalid);
}

#[test]
fn empty_evaluation_shows_error() {
    let mut session = Session::new();
    session.press("=");
    assert_eq!(session.display_text(), ERROR_SENTINEL);
    assert!(session.history().is_empty());
}

#[test]
fn result_undo_peels_one_character_at_a_time() {
    let mut session = Session::new();
    press_all(&mut session, &["5", "x!", "="]);
    assert_eq!(session.display_text(), "120");

    session.press("DEL");
    assert_eq!(session.display_text(), "12");
    session.press("DEL");
    assert_eq!(session.display_text(), "1");
    session.press("DEL");
    assert_eq!(session.display_text(), "");
    session.press("DEL");
    assert_eq!(session.display_text(), "");
}

#[test]
fn chaining_on_a_result_records_a_new_snapshot() {
    let mut session = Session::new();
    press_all(&mut session, &["1", "+", "2", "="]);
    press_all(&mut session, &["*", "4", "="]);

    assert_eq!(session.display_text(), "12");
    assert_eq!(
        session.history_labels(),
        vec!["3*4", "=12", "1+2", "=3"]
    );
}

#[test]
fn history_equation_row_round_trip() {
    let mut session = Session::new();
    press_all(&mut session, &["1", "+", "2"]);
    let captured: Vec<String> = session.undo_states().to_vec();

    session.press("=");
    session.select_history("1+2").unwrap();

    assert_eq!(session.display_text(), "1+2");
    assert_eq!(session.undo_states(), captured.as_slice());
    assert_eq!(session.validity(), Validity::Valid);

    // The restored stack still undoes step by step.
    session.press("DEL");
    assert_eq!(session.display_text(), "1+");
}

#[test]
fn history_result_row_restores_typed_prefixes() {
    let mut session = Session::new();
    press_all(&mut session, &["5", "x!", "="]);
    press_all(&mut session, &["CLR", "7", "="]);

    session.select_history("=120").unwrap();
    assert_eq!(session.display_text(), "120");
    assert_eq!(
        session.undo_states(),
        &["".to_string(), "1".to_string(), "12".to_string()]
    );
}

#[test]
fn unknown_history_label_fails() {
    let mut session = Session::new();
    press_all(&mut session, &["1", "+", "2", "="]);

    let err = session.select_history("=99").unwrap_err();
    assert_eq!(
        err,
        HistoryError::NotFound {
            label: "=99".to_string()
        }
    );
    // State untouched by the failed lookup.
    assert_eq!(session.display_text(), "3");
}

#[test]
fn error_sentinel_clears_before_next_key() {
    let mut session = Session::new();
    press_all(&mut session, &["5", "/", "0", "="]);
    assert_eq!(session.display_text(), ERROR_SENTINEL);

    session.press("9");
    assert_eq!(session.display_text(), "9");
    assert_eq!(session.validity(), Validity::Valid);
}

#[test]
fn clr_then_del_is_a_noop() {
    let mut session = Session::new();
    press_all(&mut session, &["1", "+", "2"]);
    session.press("CLR");
    let before: Vec<String> = session.undo_states().to_vec();

    session.press("DEL");
    assert_eq!(session.display_text(), "");
    assert_eq!(session.undo_states(), before.as_slice());
}

#[test]
fn operator_chaining_still_evaluates_when_well_formed() {
    let mut session = Session::new();
    press_all(&mut session, &["1", "/", "0", "5", "="]);
    assert_eq!(session.display_text(), "0.2");
    assert_eq!(session.history_labels(), vec!["1/05", "=0.2"]);
}

#[test]
fn every_keypad_key_is_accepted() {
    for key in keycalc::all_keys() {
        let mut session = Session::new();
        session.press(key);
        session.press(key);
    }
}

#[cfg(feature = "emitter")]
mod signals {
    use super::press_all;
    use keycalc::{Session, EVALUATION_FAILED, VALIDITY_CHANGED};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn failure_signal_carries_the_expression() {
        let mut session = Session::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        session.on(EVALUATION_FAILED, move |data| {
            sink.lock().unwrap().push(data);
        });

        press_all(&mut session, &["5", "/", "0", "="]);

        // EventEmitter delivers on its own thread, give it time
        thread::sleep(Duration::from_millis(50));
        assert_eq!(seen.lock().unwrap().as_slice(), &["5/0".to_string()]);
    }

    #[test]
    fn validity_signal_fires_on_flips_only() {
        let mut session = Session::new();
        let flips = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&flips);
        session.on(VALIDITY_CHANGED, move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        });

        press_all(&mut session, &["1", "2"]);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(flips.load(Ordering::SeqCst), 0);

        session.press("+");
        session.press("3");
        thread::sleep(Duration::from_millis(50));
        assert_eq!(flips.load(Ordering::SeqCst), 2);
    }
}
