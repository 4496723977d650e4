// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document contract: element identifiers and CSS class names.
//!
//! The core only consumes this contract; markup and styling that satisfy it
//! are owned by the page. Timing is not part of the
//! configuration, see [`sequencer`](crate::sequencer) and
//! [`counter`](crate::counter) for the fixed delays.

/// Element identifiers and class names the landing page binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingConfig {
    /// Id of the control that starts the reveal.
    pub reveal_control_id: &'static str,
    /// Id of the intro region.
    pub intro_region_id: &'static str,
    /// Id of the video region.
    pub video_region_id: &'static str,
    /// Id of the media element inside the video region.
    pub media_id: &'static str,
    /// Id of the control that closes the video.
    pub close_control_id: &'static str,
    /// Class that starts the intro fade-out.
    pub fade_out_class: &'static str,
    /// Class that marks the video region active.
    pub active_class: &'static str,
    /// Class of the injected fallback overlay.
    pub fallback_overlay_class: &'static str,
    /// Class of the play button inside the fallback overlay.
    pub fallback_button_class: &'static str,
    /// Class of the decorative background orbs.
    pub orb_class: &'static str,
    /// Class of the cursor glow indicator.
    pub glow_class: &'static str,
    /// Class of a statistic container (hover target).
    pub stat_item_class: &'static str,
    /// Class of the number inside a statistic container.
    pub stat_number_class: &'static str,
    /// Attribute holding a statistic's target value.
    pub target_attribute: &'static str,
    /// CSS `display` value restored on the intro region.
    pub intro_display: &'static str,
}

impl LandingConfig {
    /// The contract used by the Astra inauguration page.
    #[must_use]
    pub const fn astra() -> Self {
        Self {
            reveal_control_id: "inauguration-btn",
            intro_region_id: "inauguration-section",
            video_region_id: "video-section",
            media_id: "inauguration-video",
            close_control_id: "close-video-btn",
            fade_out_class: "fade-out",
            active_class: "active",
            fallback_overlay_class: "play-overlay",
            fallback_button_class: "play-btn",
            orb_class: "gradient-orb",
            glow_class: "cursor-glow",
            stat_item_class: "stat-item",
            stat_number_class: "stat-number",
            target_attribute: "data-target",
            intro_display: "flex",
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self::astra()
    }
}
