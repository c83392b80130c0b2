// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Gallery Transition Defaults
// ==========================================================================

/// Settle delay before a directional gallery move commits (milliseconds).
pub const TRANSITION_SETTLE_MS: u64 = 300;

/// Tick interval driving crossfade re-renders while a transition is
/// in flight (milliseconds).
pub const TRANSITION_TICK_MS: u64 = 16;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Whether directional gallery moves skip the crossfade by default.
pub const DEFAULT_REDUCE_MOTION: bool = false;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // The tick must be able to observe the settle boundary.
    assert!(TRANSITION_TICK_MS > 0);
    assert!(TRANSITION_TICK_MS < TRANSITION_SETTLE_MS);

    // Window bounds
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
