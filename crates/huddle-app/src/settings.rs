//! Tabbed settings dialog shell.
//!
//! The dialog composes three independently owned pages and exposes a
//! create / destroy / activate / close lifecycle to the console command
//! dispatcher. Edits are staged and only take effect on apply.

use huddle_core::HudConfig;

use crate::HudAction;

/// Console command that shows the dialog.
pub const SHOW_SETTINGS_COMMAND: &str = "mom_settings_show";

/// Settings pages, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsPage {
    /// Input bindings.
    Controls,
    /// HUD elements, including chat.
    Hud,
    /// Run comparisons.
    Comparisons,
}

impl SettingsPage {
    /// All pages in tab order.
    pub const ALL: [Self; 3] = [Self::Controls, Self::Hud, Self::Comparisons];

    /// Localisation key of the tab title.
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Controls => "#MOM_Settings_Tab_Controls",
            Self::Hud => "#MOM_Settings_Tab_HUD",
            Self::Comparisons => "#MOM_Settings_Tab_Comparisons",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Controls => 0,
            Self::Hud => 1,
            Self::Comparisons => 2,
        }
    }

    fn offset(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = (self.index() as isize + delta).rem_euclid(len);
        Self::ALL[index as usize]
    }
}

/// A staged edit on the HUD page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEdit {
    /// Show system text messages.
    ShowTextMessages(bool),
    /// Reproduce the stock stop-typing latch.
    LegacyTypingLatch(bool),
    /// Most typing members listed by name.
    MaxNamedTypists(usize),
}

/// Commands accepted by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommand {
    /// Build the dialog, hidden.
    Create,
    /// Tear the dialog down.
    Destroy,
    /// Show and focus the dialog.
    Activate,
    /// Hide the dialog, discarding staged edits.
    Close,
    /// Select the next tab.
    NextPage,
    /// Select the previous tab.
    PreviousPage,
    /// Select a tab.
    SelectPage(SettingsPage),
    /// Stage an edit.
    Edit(SettingsEdit),
    /// Commit staged edits.
    Apply,
}

impl SettingsCommand {
    /// Map a console command to a dialog command.
    pub fn from_console(command: &str) -> Option<Self> {
        (command == SHOW_SETTINGS_COMMAND).then_some(Self::Activate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Absent,
    Hidden,
    Visible,
}

/// Settings dialog state machine.
///
/// Commands on a dialog that does not exist are ignored, as the console
/// command dispatcher does for a panel that was never created.
#[derive(Debug, Clone)]
pub struct SettingsDialog {
    lifecycle: Lifecycle,
    active: SettingsPage,
    pending: HudConfig,
}

impl Default for SettingsDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDialog {
    /// A dialog that has not been created.
    pub fn new() -> Self {
        Self { lifecycle: Lifecycle::Absent, active: SettingsPage::Controls, pending: HudConfig::default() }
    }

    /// Process a command against the live configuration.
    pub fn handle(&mut self, command: SettingsCommand, config: &mut HudConfig) -> Vec<HudAction> {
        if self.lifecycle == Lifecycle::Absent {
            if command == SettingsCommand::Create {
                self.lifecycle = Lifecycle::Hidden;
                self.active = SettingsPage::Controls;
                self.pending = config.clone();
            } else {
                tracing::debug!(?command, "settings dialog not created");
            }
            return vec![];
        }

        match command {
            SettingsCommand::Create => {
                tracing::debug!("settings dialog already created");
                vec![]
            },
            SettingsCommand::Destroy => {
                self.lifecycle = Lifecycle::Absent;
                vec![HudAction::Render]
            },
            SettingsCommand::Activate => {
                if self.lifecycle == Lifecycle::Hidden {
                    self.pending = config.clone();
                    self.lifecycle = Lifecycle::Visible;
                }
                vec![HudAction::Render]
            },
            SettingsCommand::Close => {
                if self.lifecycle != Lifecycle::Visible {
                    return vec![];
                }
                self.lifecycle = Lifecycle::Hidden;
                self.pending = config.clone();
                vec![HudAction::SettingsClosed, HudAction::Render]
            },
            SettingsCommand::NextPage => self.select(self.active.offset(1)),
            SettingsCommand::PreviousPage => self.select(self.active.offset(-1)),
            SettingsCommand::SelectPage(page) => self.select(page),
            SettingsCommand::Edit(edit) => {
                match edit {
                    SettingsEdit::ShowTextMessages(show) => self.pending.show_text_messages = show,
                    SettingsEdit::LegacyTypingLatch(latch) => {
                        self.pending.legacy_typing_latch = latch;
                    },
                    SettingsEdit::MaxNamedTypists(max) => self.pending.max_named_typists = max,
                }
                vec![]
            },
            SettingsCommand::Apply => {
                if self.pending == *config {
                    return vec![];
                }
                *config = self.pending.clone();
                tracing::info!(?config, "settings applied");
                vec![HudAction::ConfigApplied(config.clone()), HudAction::Render]
            },
        }
    }

    fn select(&mut self, page: SettingsPage) -> Vec<HudAction> {
        self.active = page;
        vec![HudAction::Render]
    }

    /// Dialog exists.
    pub fn is_created(&self) -> bool {
        self.lifecycle != Lifecycle::Absent
    }

    /// Dialog is shown.
    pub fn is_visible(&self) -> bool {
        self.lifecycle == Lifecycle::Visible
    }

    /// Selected tab.
    pub fn active_page(&self) -> SettingsPage {
        self.active
    }

    /// Staged configuration.
    pub fn pending(&self) -> &HudConfig {
        &self.pending
    }
}
