//! HUD behavior tests through the generic runtime.
//!
//! Events are injected into a `SimDriver` and processed by the same
//! `Runtime` the binary uses; recorded output is compared as a transcript.

use huddle_app::{
    Hud, HudEvent, MessageMode, Runtime, SettingsCommand, SettingsEdit, SettingsPage, Sink,
};
use huddle_core::{
    HudConfig, MemberId, MemberStateChange, Membership, SessionId, TYPING_KEY, TypingStatus,
};
use huddle_harness::{
    SimDriver, SimLobby, invariants::InvariantRegistry, standard_strings, user_message_event,
};
use huddle_proto::{Destination, SayText, SayText2, TextMsg, UserMessage};

const LOCAL: MemberId = MemberId(1);
const ALICE: MemberId = MemberId(2);
const BOB: MemberId = MemberId(3);
const LOBBY: SessionId = SessionId(100);

type SimRuntime = Runtime<SimDriver, SimLobby, std::collections::HashMap<String, String>>;

fn runtime(config: HudConfig) -> (SimRuntime, SimLobby) {
    let lobby = SimLobby::new(LOCAL, "me");
    let driver = SimDriver::new()
        .with_lobby(lobby.clone())
        .with_invariants(InvariantRegistry::standard());
    let hud = Hud::new(lobby.clone(), standard_strings(), config);
    (Runtime::new(driver, hud), lobby)
}

async fn drain(runtime: &mut SimRuntime) {
    let mut step = 0;
    while !runtime.process_cycle().await.unwrap() {
        runtime.driver().check_invariants(runtime.hud(), &format!("after step {step}"));
        step += 1;
    }
}

fn say_text2(client: u8, name: &str, text: &str) -> HudEvent {
    user_message_event(&UserMessage::SayText2(SayText2 {
        client,
        wants_to_chat: true,
        template: "#Chat_All".into(),
        name: name.into(),
        text: text.into(),
        extras: [String::new(), String::new()],
    }))
}

fn text_msg(destination: Destination, template: &str, arg: &str) -> HudEvent {
    user_message_event(&UserMessage::TextMsg(TextMsg {
        destination,
        template: template.into(),
        args: [arg.into(), String::new(), String::new(), String::new()],
    }))
}

#[tokio::test]
async fn lobby_session_transcript() {
    let (mut runtime, lobby) = runtime(HudConfig::default());
    let driver = runtime.driver();

    driver.inject_event(HudEvent::LobbyEntered { session: LOBBY, success: true });
    driver.inject_event(lobby.join(LOBBY, ALICE, "Alice"));
    driver.inject_event(say_text2(2, "Alice", "gg"));
    driver.inject_event(text_msg(Destination::Notify, "#Game_connected", "Bob"));
    driver.inject_event(lobby.join(LOBBY, BOB, "Bob"));
    driver.inject_event(lobby.post_chat(LOBBY, BOB, "hi all"));
    driver.inject_event(lobby.post_chat(LOBBY, LOCAL, "me too"));
    driver.inject_event(text_msg(Destination::Center, "#Game_over", ""));
    driver.inject_event(lobby.leave(LOBBY, ALICE, MemberStateChange::LEFT));
    driver.inject_event(HudEvent::Shutdown);

    drain(&mut runtime).await;

    insta::assert_snapshot!(runtime.driver().transcript(), @r#"
    chat[-] filter=0x09 "Alice has joined the lobby."
    chat[2] filter=0x00 "\u{3}Alice\u{1} :  gg\n"
    console "Alice :  gg\n\n"
    console "\u{1}Bob connected\n"
    chat[-] filter=0x09 "Bob has joined the lobby."
    chat[-] filter=0x00 "Bob: hi all"
    center "Run complete\n"
    chat[-] filter=0x09 "Alice has left the lobby."
    "#);
}

#[tokio::test]
async fn typing_indicator_follows_lobby_data() {
    let (mut runtime, lobby) = runtime(HudConfig::default());
    let driver = runtime.driver();

    driver.inject_event(HudEvent::LobbyEntered { session: LOBBY, success: true });
    driver.inject_event(lobby.join(LOBBY, ALICE, "Alice"));
    driver.inject_event(lobby.set_typing(LOBBY, ALICE, TypingStatus::Typing));
    driver.inject_event(HudEvent::StartMessageMode { mode: MessageMode::Say });
    drain(&mut runtime).await;

    let view = runtime.driver().last_render().unwrap();
    assert_eq!(view.typing_summary.as_deref(), Some("Alice typing..."));

    // Our own publication comes back as a data update and is not listed
    runtime.driver().inject_event(HudEvent::Think { has_text: true });
    drain(&mut runtime).await;
    assert_eq!(lobby.member_data(LOBBY, LOCAL, TYPING_KEY).as_deref(), Some("y"));
    assert_eq!(runtime.hud().typing().members(), &[ALICE]);
    assert_eq!(runtime.hud().typing_summary().as_deref(), Some("Alice typing..."));

    runtime.driver().inject_event(HudEvent::StopMessageMode);
    runtime.driver().inject_event(lobby.leave(LOBBY, ALICE, MemberStateChange::DISCONNECTED));
    drain(&mut runtime).await;

    assert!(runtime.hud().typing().is_empty());
    assert_eq!(runtime.driver().published(), vec![
        (LOBBY, TypingStatus::Typing),
        (LOBBY, TypingStatus::Idle),
    ]);
}

#[tokio::test]
async fn local_departure_stops_publication_until_next_enter() {
    let (mut runtime, lobby) = runtime(HudConfig::default());
    let driver = runtime.driver();

    driver.inject_event(HudEvent::LobbyEntered { session: LOBBY, success: true });
    driver.inject_event(lobby.join(LOBBY, ALICE, "Alice"));
    driver.inject_event(lobby.set_typing(LOBBY, ALICE, TypingStatus::Typing));
    driver.inject_event(lobby.leave(LOBBY, LOCAL, MemberStateChange::LEFT));
    driver.inject_event(HudEvent::StartMessageMode { mode: MessageMode::SayTeam });
    driver.inject_event(HudEvent::Think { has_text: true });
    driver.inject_event(HudEvent::StopMessageMode);
    drain(&mut runtime).await;

    assert!(runtime.driver().published().is_empty());
    assert!(runtime.hud().typing().is_empty());
    assert_eq!(runtime.hud().session().session(), None);
    // Leaving prints nothing
    assert_eq!(runtime.driver().printed().len(), 1);

    runtime.driver().inject_event(HudEvent::LobbyEntered { session: LOBBY, success: true });
    runtime.driver().inject_event(HudEvent::StartMessageMode { mode: MessageMode::Say });
    runtime.driver().inject_event(HudEvent::Think { has_text: true });
    drain(&mut runtime).await;

    assert_eq!(runtime.driver().published(), vec![(LOBBY, TypingStatus::Typing)]);
}

#[tokio::test]
async fn legacy_latch_republishes_idle() {
    let config = HudConfig { legacy_typing_latch: true, ..HudConfig::default() };
    let (mut runtime, _lobby) = runtime(config);
    let driver = runtime.driver();

    driver.inject_event(HudEvent::LobbyEntered { session: LOBBY, success: true });
    driver.inject_event(HudEvent::StartMessageMode { mode: MessageMode::Say });
    driver.inject_events([true, false, false, true].map(|has_text| HudEvent::Think { has_text }));
    drain(&mut runtime).await;

    assert_eq!(runtime.driver().published(), vec![
        (LOBBY, TypingStatus::Typing),
        (LOBBY, TypingStatus::Idle),
        (LOBBY, TypingStatus::Idle),
    ]);
}

#[tokio::test]
async fn hidden_text_messages_write_nothing() {
    let config = HudConfig { show_text_messages: false, ..HudConfig::default() };
    let (mut runtime, _lobby) = runtime(config);

    for destination in [Destination::Notify, Destination::Console, Destination::Talk, Destination::Center] {
        runtime.driver().inject_event(text_msg(destination, "#Game_connected", "Bob"));
    }
    // Chat is not affected by the toggle
    runtime.driver().inject_event(user_message_event(&UserMessage::SayText(SayText {
        client: 0,
        text: "plain".into(),
    })));
    drain(&mut runtime).await;

    assert_eq!(runtime.driver().printed(), vec![(Sink::CHAT, "plain".to_owned())]);
}

#[tokio::test]
async fn settings_apply_persists_and_takes_effect() {
    let (mut runtime, _lobby) = runtime(HudConfig::default());
    let driver = runtime.driver();

    driver.inject_events([
        HudEvent::Settings(SettingsCommand::Create),
        HudEvent::Settings(SettingsCommand::Activate),
        HudEvent::Settings(SettingsCommand::SelectPage(SettingsPage::Hud)),
    ]);
    drain(&mut runtime).await;

    let settings = runtime.driver().last_render().unwrap().settings.unwrap();
    assert_eq!(settings.active, SettingsPage::Hud);
    let titles: Vec<&str> = settings.tabs.iter().map(|(_, title)| title.as_str()).collect();
    assert_eq!(titles, ["Controls", "HUD", "Comparisons"]);

    runtime.driver().inject_events([
        HudEvent::Settings(SettingsCommand::Edit(SettingsEdit::ShowTextMessages(false))),
        HudEvent::Settings(SettingsCommand::Apply),
        HudEvent::Settings(SettingsCommand::Close),
        text_msg(Destination::Talk, "#Game_connected", "Bob"),
    ]);
    drain(&mut runtime).await;

    insta::assert_snapshot!(runtime.driver().transcript(), @"persist HudConfig { show_text_messages: false, legacy_typing_latch: false, max_named_typists: 3 }");
    assert!(runtime.driver().last_render().unwrap().settings.is_none());
}

#[tokio::test]
async fn run_stops_on_shutdown() {
    let (runtime, _lobby) = runtime(HudConfig::default());
    runtime.driver().inject_events([
        HudEvent::LobbyEntered { session: LOBBY, success: true },
        HudEvent::Shutdown,
        HudEvent::LobbyKicked { session: LOBBY },
    ]);

    runtime.run().await.unwrap();
}
