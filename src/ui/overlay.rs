// SPDX-License-Identifier: MPL-2.0
//! Overlay open/close coordination.
//!
//! Each overlay (cart panel, lightbox, navigation menu) is one instance
//! of the same two-state machine delegating to a host panel surface
//! behind the [`PanelHost`] trait. Host failures are logged and do not
//! propagate; the in-memory flag still flips, so logical and visible
//! state can diverge if the host misbehaves. An `expanded` flag mirrors
//! the state for the trigger control, matching what assistive technology
//! expects from a disclosure trigger.
//!
//! Overlays are independent: nothing here enforces mutual exclusion
//! between them.

use crate::error::{PanelError, Result};
use std::fmt;

/// The two states of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Host surface backing an overlay panel.
///
/// `show` is expected to make the panel visible and modal, `hide` to
/// dismiss it. Implementations may fail; the coordinator treats failures
/// as diagnostics, never as user-facing errors.
pub trait PanelHost {
    /// Whether the host surface exists at all. A missing surface means
    /// the overlay cannot be driven and open/close requests are skipped.
    fn is_present(&self) -> bool {
        true
    }

    fn show(&mut self) -> Result<()>;

    fn hide(&mut self) -> Result<()>;
}

/// In-process host surface: a visibility flag the view layer renders from.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceHost {
    visible: bool,
}

impl SurfaceHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the surface is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl PanelHost for SurfaceHost {
    fn show(&mut self) -> Result<()> {
        self.visible = true;
        Ok(())
    }

    fn hide(&mut self) -> Result<()> {
        self.visible = false;
        Ok(())
    }
}

/// One overlay's state machine plus its host surface.
pub struct OverlayController {
    /// Stable name used in diagnostics.
    label: &'static str,
    state: OverlayState,
    trigger_expanded: bool,
    host: Box<dyn PanelHost>,
}

impl fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayController")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("trigger_expanded", &self.trigger_expanded)
            .finish()
    }
}

impl OverlayController {
    /// Creates a closed controller over the given host surface.
    #[must_use]
    pub fn new(label: &'static str, host: Box<dyn PanelHost>) -> Self {
        Self {
            label,
            state: OverlayState::Closed,
            trigger_expanded: false,
            host,
        }
    }

    /// Creates a closed controller over an in-process [`SurfaceHost`].
    #[must_use]
    pub fn with_surface(label: &'static str) -> Self {
        Self::new(label, Box::new(SurfaceHost::new()))
    }

    /// Returns true while the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Returns the mirrored expanded flag of the trigger control.
    #[must_use]
    pub fn trigger_expanded(&self) -> bool {
        self.trigger_expanded
    }

    /// Opens the overlay.
    ///
    /// The state flips before the host call and stays flipped even when
    /// the host fails; only a missing host surface skips the request
    /// entirely.
    pub fn open(&mut self) {
        if !self.host.is_present() {
            log_panel_error(self.label, &PanelError::Missing.into());
            return;
        }

        self.state = OverlayState::Open;
        if let Err(error) = self.host.show() {
            log_panel_error(self.label, &error);
        }
        self.trigger_expanded = true;
    }

    /// Closes the overlay. Same failure policy as [`Self::open`].
    pub fn close(&mut self) {
        if !self.host.is_present() {
            log_panel_error(self.label, &PanelError::Missing.into());
            return;
        }

        self.state = OverlayState::Closed;
        if let Err(error) = self.host.hide() {
            log_panel_error(self.label, &error);
        }
        self.trigger_expanded = false;
    }

    /// Flips the state and dispatches to whichever of open/close matches.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}

fn log_panel_error(label: &str, error: &crate::error::Error) {
    eprintln!("[{}] overlay host error: {}", label, error);
}

/// The page's three overlays.
#[derive(Debug)]
pub struct Overlays {
    pub cart: OverlayController,
    pub lightbox: OverlayController,
    pub menu: OverlayController,
}

impl Overlays {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cart: OverlayController::with_surface("cart"),
            lightbox: OverlayController::with_surface("lightbox"),
            menu: OverlayController::with_surface("menu"),
        }
    }
}

impl Default for Overlays {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Host whose show/hide calls always fail but whose surface exists.
    struct FailingHost;

    impl PanelHost for FailingHost {
        fn show(&mut self) -> Result<()> {
            Err(Error::Panel(PanelError::ShowFailed("refused".into())))
        }

        fn hide(&mut self) -> Result<()> {
            Err(Error::Panel(PanelError::HideFailed("refused".into())))
        }
    }

    /// Host whose surface does not exist at all.
    struct MissingHost;

    impl PanelHost for MissingHost {
        fn is_present(&self) -> bool {
            false
        }

        fn show(&mut self) -> Result<()> {
            unreachable!("show must not be called on a missing surface")
        }

        fn hide(&mut self) -> Result<()> {
            unreachable!("hide must not be called on a missing surface")
        }
    }

    #[test]
    fn controller_starts_closed() {
        let controller = OverlayController::with_surface("test");
        assert!(!controller.is_open());
        assert!(!controller.trigger_expanded());
    }

    #[test]
    fn open_then_close_restores_initial_state() {
        let mut controller = OverlayController::with_surface("test");

        controller.open();
        assert!(controller.is_open());
        assert!(controller.trigger_expanded());

        controller.close();
        assert!(!controller.is_open());
        assert!(!controller.trigger_expanded());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut controller = OverlayController::with_surface("test");

        controller.toggle();
        assert!(controller.is_open());
        controller.toggle();
        assert!(!controller.is_open());
        assert!(!controller.trigger_expanded());
    }

    #[test]
    fn open_is_idempotent() {
        let mut controller = OverlayController::with_surface("test");
        controller.open();
        controller.open();
        assert!(controller.is_open());
    }

    #[test]
    fn host_failure_still_flips_state() {
        let mut controller = OverlayController::new("test", Box::new(FailingHost));

        controller.open();
        assert!(controller.is_open());
        assert!(controller.trigger_expanded());

        controller.close();
        assert!(!controller.is_open());
        assert!(!controller.trigger_expanded());
    }

    #[test]
    fn missing_host_skips_state_change() {
        let mut controller = OverlayController::new("test", Box::new(MissingHost));

        controller.open();
        assert!(!controller.is_open());
        assert!(!controller.trigger_expanded());

        controller.close();
        assert!(!controller.is_open());
    }

    #[test]
    fn overlays_are_independent() {
        let mut overlays = Overlays::new();

        overlays.cart.open();
        overlays.lightbox.open();
        assert!(overlays.cart.is_open());
        assert!(overlays.lightbox.is_open());
        assert!(!overlays.menu.is_open());

        overlays.cart.close();
        assert!(!overlays.cart.is_open());
        assert!(overlays.lightbox.is_open());
    }

    #[test]
    fn surface_host_tracks_visibility() {
        let mut host = SurfaceHost::new();
        assert!(!host.is_visible());
        host.show().expect("show");
        assert!(host.is_visible());
        host.hide().expect("hide");
        assert!(!host.is_visible());
    }
}
