//! Generic runtime for HUD orchestration.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`Hud`]: chat element state machine
//! - [`Driver`]: host-specific I/O

use huddle_core::{Localizer, Membership};

use crate::{Driver, Hud, HudAction};

/// Generic runtime that orchestrates Hud and Driver.
///
/// # Type Parameters
///
/// - `D`: Host I/O driver
/// - `M`: Membership collaborator
/// - `L`: Localisation collaborator
pub struct Runtime<D, M, L>
where
    D: Driver,
{
    driver: D,
    hud: Hud<M, L>,
}

impl<D, M, L> Runtime<D, M, L>
where
    D: Driver,
    M: Membership,
    L: Localizer,
{
    /// Create a new runtime.
    pub fn new(driver: D, hud: Hud<M, L>) -> Self {
        Self { driver, hud }
    }

    /// Run the main event loop until the driver runs dry or the HUD quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.hud.view())?;

        while !self.process_cycle().await? {}

        self.driver.stop();
        Ok(())
    }

    /// Process one event.
    ///
    /// Returns `true` if the runtime should stop.
    pub async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let Some(event) = self.driver.poll_event().await? else {
            return Ok(true);
        };

        let actions = self.hud.handle(event);
        self.execute(actions)
    }

    /// Execute actions returned by the Hud.
    ///
    /// Returns `true` if should quit.
    fn execute(&mut self, actions: Vec<HudAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                HudAction::Render => self.driver.render(&self.hud.view())?,
                HudAction::Quit => return Ok(true),
                HudAction::Print { sink, text } => self.driver.print(sink, &text)?,
                HudAction::PublishTyping { session, status } => {
                    self.driver.publish_typing(session, status)?;
                },
                HudAction::ConfigApplied(config) => self.driver.persist_config(&config)?,
                HudAction::SettingsClosed => {
                    tracing::debug!("settings dialog closed");
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the Hud
    pub fn hud(&self) -> &Hud<M, L> {
        &self.hud
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
