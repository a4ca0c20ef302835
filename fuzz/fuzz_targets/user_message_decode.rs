//! Fuzz target for user message decoding and formatting
//!
//! # Strategy
//!
//! - Random payloads: arbitrary bytes decoded as each message kind
//! - Symbolic strings: payloads whose strings are `#` keys, some of which
//!   resolve to further keys or to multi-byte text
//!
//! # Invariants
//!
//! - Decoding never panics, whatever the payload length
//! - Decoded strings fit their wire buffers
//! - Formatted lines fit their display buffers
//! - NEVER panic on malformed payloads

#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use huddle_app::{
    ChatFormatter, HudAction, SYSTEM_LINE_CAPACITY, Sink, TEMPLATED_LINE_CAPACITY,
};
use huddle_proto::{
    CHAT_STRING_CAPACITY, MessageKind, TEXT_MSG_STRING_CAPACITY, UserMessage,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct Input {
    kind: u8,
    payload: Vec<u8>,
    show_text_messages: bool,
}

fn strings() -> HashMap<String, String> {
    [
        ("A", "#B"),
        ("B", "#A"),
        ("Wide", "ääää%s1ää%s2éé\r"),
        ("Fmt", "%s %d %% %s %s %s"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect()
}

fuzz_target!(|input: Input| {
    let kind = match input.kind % 3 {
        0 => MessageKind::SayText,
        1 => MessageKind::SayText2,
        _ => MessageKind::TextMsg,
    };

    let Ok(message) = UserMessage::decode(kind, &input.payload) else {
        return;
    };

    let formatter = ChatFormatter::new(strings());
    let actions = match &message {
        UserMessage::SayText(m) => {
            assert!(m.text.len() < CHAT_STRING_CAPACITY);
            vec![formatter.plain_chat(m)]
        }
        UserMessage::SayText2(m) => {
            for s in [&m.template, &m.name, &m.text, &m.extras[0], &m.extras[1]] {
                assert!(s.len() < CHAT_STRING_CAPACITY);
            }
            formatter.templated_chat(m)
        }
        UserMessage::TextMsg(m) => {
            assert!(m.template.len() < TEXT_MSG_STRING_CAPACITY);
            assert!(m.args.iter().all(|a| a.len() < TEXT_MSG_STRING_CAPACITY));
            formatter.system_message(m, input.show_text_messages).into_iter().collect()
        }
    };

    for action in actions {
        if let HudAction::Print { sink, text } = action {
            match (&message, sink) {
                (UserMessage::SayText2(_), Sink::Chat { .. }) => {
                    assert!(text.len() <= TEMPLATED_LINE_CAPACITY)
                }
                (UserMessage::TextMsg(_), _) => assert!(text.len() <= SYSTEM_LINE_CAPACITY),
                _ => {}
            }
        }
    }
});
