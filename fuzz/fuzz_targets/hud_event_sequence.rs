//! Fuzz target for HUD event sequences
//!
//! # Strategy
//!
//! - Lobby traffic: members join, leave, publish typing values (including
//!   values that are neither "y" nor "n"), post chat, in this lobby or others
//! - Local input: message mode opens and closes, composition toggles
//! - Session churn: enters, refused enters, kicks, local departures
//!
//! # Invariants
//!
//! - The standard HUD invariants hold after every event
//! - Typing publications only name the joined lobby
//! - NEVER panic on any event order

#![no_main]

use arbitrary::Arbitrary;
use huddle_app::{Hud, HudAction, HudEvent, MessageMode};
use huddle_core::{HudConfig, MemberId, MemberStateChange, SessionId, TYPING_KEY};
use huddle_harness::{
    SimLobby,
    invariants::{HudSnapshot, InvariantRegistry},
    standard_strings,
};
use libfuzzer_sys::fuzz_target;

const LOCAL: MemberId = MemberId(1);

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Enter { lobby: u8, success: bool },
    Join { lobby: u8, member: u8 },
    Leave { lobby: u8, member: u8, bits: u8 },
    Data { lobby: u8, member: u8, value: u8, success: bool },
    Chat { lobby: u8, member: u8, chat_id: u8 },
    Kicked { lobby: u8 },
    StartMessageMode { team: bool },
    StopMessageMode,
    Think { has_text: bool },
}

#[derive(Debug, Clone, Arbitrary)]
struct Input {
    legacy_typing_latch: bool,
    max_named_typists: u8,
    ops: Vec<Op>,
}

fn session(lobby: u8) -> SessionId {
    SessionId(100 + u64::from(lobby % 3))
}

fn member(member: u8) -> MemberId {
    // Includes the local member and the lobby identifiers
    MemberId(u64::from(member % 8) + if member % 16 < 8 { 0 } else { 99 })
}

fuzz_target!(|input: Input| {
    let lobby = SimLobby::new(LOCAL, "me");
    let config = HudConfig {
        legacy_typing_latch: input.legacy_typing_latch,
        max_named_typists: usize::from(input.max_named_typists % 6),
        ..HudConfig::default()
    };
    let mut hud = Hud::new(lobby.clone(), standard_strings(), config);
    let registry = InvariantRegistry::standard();

    for (step, op) in input.ops.into_iter().enumerate() {
        let event = match op {
            Op::Enter { lobby: l, success } => HudEvent::LobbyEntered { session: session(l), success },
            Op::Join { lobby: l, member: m } => lobby.join(session(l), member(m), "x"),
            Op::Leave { lobby: l, member: m, bits } => {
                lobby.leave(session(l), member(m), MemberStateChange::from_bits(u32::from(bits)))
            }
            Op::Data { lobby: l, member: m, value, success } => {
                let value = ["y", "n", "", "maybe"][usize::from(value % 4)];
                lobby.set_member_data(session(l), member(m), TYPING_KEY, value);
                HudEvent::LobbyDataUpdated { session: session(l), member: member(m), success }
            }
            Op::Chat { lobby: l, member: m, chat_id } => HudEvent::LobbyChatMessage {
                session: session(l),
                sender: member(m),
                chat_id: u32::from(chat_id),
            },
            Op::Kicked { lobby: l } => HudEvent::LobbyKicked { session: session(l) },
            Op::StartMessageMode { team } => HudEvent::StartMessageMode {
                mode: if team { MessageMode::SayTeam } else { MessageMode::Say },
            },
            Op::StopMessageMode => HudEvent::StopMessageMode,
            Op::Think { has_text } => HudEvent::Think { has_text },
        };

        let actions = hud.handle(event);
        for action in &actions {
            if let HudAction::PublishTyping { session, .. } = action {
                assert_eq!(Some(*session), hud.session().session());
            }
        }
        registry.assert_all(&HudSnapshot::from_hud(&hud), &format!("after op {step}"));
    }
});
