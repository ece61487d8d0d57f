use super::{format_messages, parse_messages, Message, ParseMessageError, Violation, Watcher};

#[test]
fn watcher_returns_copy_of_first_message() {
    for message in Message::ALL {
        assert_eq!(Watcher::new().watch(message), Ok(message));
    }
}

#[test]
fn watcher_allows_repeated_end() {
    let mut watcher = Watcher::new();
    watcher.watch(Message::End).unwrap();
    assert_eq!(watcher.watch(Message::End), Ok(Message::End));
}

#[test]
fn watcher_rejects_non_final_end() {
    for message in Message::ALL {
        if message == Message::End {
            continue;
        }
        let mut watcher = Watcher::new();
        watcher.watch(Message::End).unwrap();
        let err = watcher.watch(message).expect_err("nothing may follow '0'");
        assert_eq!(err, Violation::NonFinalEnd);
    }
}

#[test]
fn watcher_rejects_end_after_amplify() {
    let mut watcher = Watcher::new();
    watcher.watch(Message::Amplify).unwrap();
    assert_eq!(watcher.watch(Message::End), Err(Violation::EndAfterAmplify));
    assert_eq!(Violation::EndAfterAmplify.to_string(), "forbidden '20' sequence");
}

#[test]
fn watcher_rejects_non_initial_messages() {
    let cases = [
        (Message::Turn, Violation::NonInitialTurn),
        (Message::Reflect, Violation::NonInitialReflect),
        (Message::Ground, Violation::NonInitialGround),
    ];
    for first in [
        Message::Amplify,
        Message::Uncover,
        Message::Turn,
        Message::Reflect,
        Message::Ground,
    ] {
        for (message, expected) in cases {
            let mut watcher = Watcher::new();
            watcher.watch(first).unwrap();
            assert_eq!(watcher.watch(message), Err(expected), "{first} then {message}");
        }
    }
}

#[test]
fn watcher_keeps_last_valid_message_after_rejection() {
    let mut watcher = Watcher::new();
    watcher.watch(Message::Uncover).unwrap();
    assert!(watcher.watch(Message::Turn).is_err());
    assert_eq!(watcher.previous(), Some(Message::Uncover));
    assert_eq!(watcher.watch(Message::End), Ok(Message::End));
}

#[test]
fn parses_reference_glyphs() {
    let messages = parse_messages("-/21112111221111210").expect("valid glyphs");
    assert_eq!(messages.len(), 18);
    assert_eq!(messages[0], Message::Ground);
    assert_eq!(messages[17], Message::End);
    assert_eq!(format_messages(&messages), "-/21112111221111210");

    assert_eq!(
        parse_messages("-10").unwrap(),
        vec![Message::Reflect, Message::Uncover, Message::End]
    );
    assert_eq!(parse_messages("").unwrap(), Vec::<Message>::new());
}

#[test]
fn rejects_unknown_glyph() {
    let err = parse_messages("21x0").expect_err("'x' is not a glyph");
    assert_eq!(err, ParseMessageError { offset: 2, found: 'x' });
    assert_eq!(
        err.to_string(),
        "unexpected character 'x' at byte 2 of message glyphs"
    );
}

#[test]
fn line_rank_orders_ranges_on_the_number_line() {
    let ranks: Vec<u8> = Message::ALL.iter().map(|m| m.line_rank()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
}
