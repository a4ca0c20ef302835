//! Inbound message formatting.
//!
//! Every inbound chat or system message becomes one finished display line
//! routed to one sink (templated chat with console echo produces two). The
//! engine's fixed-size buffers are replaced by [`BoundedText`] with the same
//! capacities; cuts are logged at debug level.

use huddle_core::{
    ChatFilter, Localizer, resolve,
    text::{
        BoundedText, NOTIFY_SENTINEL, SubstitutionStyle, convert_cr_to_nl, remove_color_markup,
        strip_trailing_newline, substitute,
    },
};
use huddle_proto::{Destination, SayText, SayText2, TextMsg};

use crate::{HudAction, Sink};

/// Bytes of a player name (engine buffer of 32 with terminator).
pub const NAME_CAPACITY: usize = 31;

/// Bytes of one resolved substitution argument or template.
pub const ARG_CAPACITY: usize = 255;

/// Bytes of a finished templated chat line.
pub const TEMPLATED_LINE_CAPACITY: usize = 511;

/// Bytes of a finished system text line, notify sentinel included.
pub const SYSTEM_LINE_CAPACITY: usize = 255;

/// Bytes of a lobby chat log entry.
pub const LOBBY_ENTRY_CAPACITY: usize = 4095;

/// Name shown for a member the platform cannot resolve.
pub const UNKNOWN_NAME: &str = "[unknown]";

/// Cut a player name to [`NAME_CAPACITY`].
pub(crate) fn bounded_name(name: &str) -> String {
    fit(name, NAME_CAPACITY, "name")
}

fn fit(text: &str, capacity: usize, field: &'static str) -> String {
    let bounded = BoundedText::from_text(text, capacity);
    if bounded.is_truncated() {
        tracing::debug!(field, len = text.len(), capacity, "display text truncated");
    }
    bounded.into_string()
}

/// Turns inbound messages into display actions.
///
/// Owns the localisation collaborator used to resolve `#` keys.
#[derive(Debug, Clone)]
pub struct ChatFormatter<L> {
    localizer: L,
}

impl<L: Localizer> ChatFormatter<L> {
    /// Formatter resolving keys through `localizer`.
    pub fn new(localizer: L) -> Self {
        Self { localizer }
    }

    /// Resolve a possibly symbolic string to display text.
    pub fn resolve(&self, text: &str) -> String {
        resolve(&self.localizer, text)
    }

    /// Resolve and bound a substitution fragment, minus its line terminator.
    fn fragment(&self, text: &str) -> String {
        let mut fragment = fit(&self.resolve(text), ARG_CAPACITY, "argument");
        strip_trailing_newline(&mut fragment);
        fragment
    }

    /// Pre-formatted chat line: straight to the chat pane.
    pub fn plain_chat(&self, message: &SayText) -> HudAction {
        HudAction::print(Sink::CHAT, message.text.clone())
    }

    /// Localised chat line.
    ///
    /// The template is resolved, name and text are used literally, the extras
    /// are resolved fragments. When the sender wants the line announced it is
    /// echoed, without colour markup, to the console.
    pub fn templated_chat(&self, message: &SayText2) -> Vec<HudAction> {
        let template = fit(&self.resolve(&message.template), ARG_CAPACITY, "template");
        let name = fit(&message.name, ARG_CAPACITY, "name");
        let text = fit(&message.text, ARG_CAPACITY, "text");
        let extra1 = self.fragment(&message.extras[0]);
        let extra2 = self.fragment(&message.extras[1]);

        let line = substitute(
            &template,
            &[name.as_str(), text.as_str(), extra1.as_str(), extra2.as_str()],
            SubstitutionStyle::Localized,
        );
        let line = fit(&convert_cr_to_nl(&line), TEMPLATED_LINE_CAPACITY, "chat line");

        let chat = Sink::Chat { sender: Some(message.client), filter: ChatFilter::NONE };
        if message.wants_to_chat {
            let echo = format!("{}\n", remove_color_markup(&line));
            vec![HudAction::print(chat, line), HudAction::print(Sink::Console, echo)]
        } else {
            vec![HudAction::print(chat, line)]
        }
    }

    /// System text message, routed by destination.
    ///
    /// With `show` off this returns `None` before any lookup happens.
    pub fn system_message(&self, message: &TextMsg, show: bool) -> Option<HudAction> {
        if !show {
            return None;
        }

        let template = fit(&self.resolve(&message.template), ARG_CAPACITY, "template");
        let args = message.args.each_ref().map(|arg| self.fragment(arg));
        let body = substitute(&template, &args.each_ref().map(String::as_str), SubstitutionStyle::Printf);
        let body = convert_cr_to_nl(&body);

        let action = match message.destination {
            Destination::Center => {
                HudAction::print(Sink::Center, fit(&body, SYSTEM_LINE_CAPACITY, "center line"))
            },
            Destination::Notify => {
                let mut line = BoundedText::new(SYSTEM_LINE_CAPACITY);
                line.push(NOTIFY_SENTINEL);
                if !line.push_str(&body) {
                    tracing::debug!(len = body.len(), "notify line truncated");
                }
                HudAction::print(Sink::Console, line.into_string())
            },
            Destination::Talk => {
                HudAction::print(Sink::CHAT, fit(&body, SYSTEM_LINE_CAPACITY, "talk line"))
            },
            Destination::Console => {
                HudAction::print(Sink::Console, fit(&body, SYSTEM_LINE_CAPACITY, "console line"))
            },
        };
        Some(action)
    }

    /// Lobby chat log entry from another member.
    pub fn lobby_chat(&self, name: &str, text: &str) -> HudAction {
        let text = fit(text, LOBBY_ENTRY_CAPACITY, "lobby entry");
        HudAction::print(Sink::CHAT, format!("{}: {text}", bounded_name(name)))
    }

    /// Member entered the lobby.
    pub fn member_joined(&self, name: &str) -> HudAction {
        HudAction::print(membership_sink(), format!("{} has joined the lobby.", bounded_name(name)))
    }

    /// Member left the lobby.
    pub fn member_left(&self, name: &str) -> HudAction {
        HudAction::print(membership_sink(), format!("{} has left the lobby.", bounded_name(name)))
    }
}

fn membership_sink() -> Sink {
    Sink::Chat { sender: None, filter: ChatFilter::JOINLEAVE | ChatFilter::SERVERMSG }
}
