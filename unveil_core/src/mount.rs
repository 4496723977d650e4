// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup validation of the required document elements.
//!
//! Hosts resolve the five required elements through [`locate`] before
//! registering any listener. If one is missing the whole interactive layer
//! stays inert: the host reports the [`MountError`] once and stops.

use core::fmt;

use crate::config::LandingConfig;
use crate::error::MountError;

/// The elements the landing page cannot work without.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// The control that starts the reveal.
    RevealControl,
    /// The intro region that fades out.
    IntroRegion,
    /// The video region that becomes active.
    VideoRegion,
    /// The media element inside the video region.
    Media,
    /// The control that closes the video.
    CloseControl,
}

impl ElementRole {
    /// Every role, in lookup order.
    pub const ALL: [Self; 5] = [
        Self::RevealControl,
        Self::IntroRegion,
        Self::VideoRegion,
        Self::Media,
        Self::CloseControl,
    ];

    /// Returns the element id `config` assigns to this role.
    #[must_use]
    pub const fn id(self, config: &LandingConfig) -> &'static str {
        match self {
            Self::RevealControl => config.reveal_control_id,
            Self::IntroRegion => config.intro_region_id,
            Self::VideoRegion => config.video_region_id,
            Self::Media => config.media_id,
            Self::CloseControl => config.close_control_id,
        }
    }

    /// Returns a short human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RevealControl => "reveal control",
            Self::IntroRegion => "intro region",
            Self::VideoRegion => "video region",
            Self::Media => "media element",
            Self::CloseControl => "close control",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finds elements by id in a host document.
pub trait ElementLookup {
    /// The host's element handle.
    type Element;

    /// Returns the element with the given id, if present.
    fn find(&self, id: &str) -> Option<Self::Element>;
}

/// The five required elements, resolved.
#[derive(Clone, Debug)]
pub struct RequiredElements<E> {
    /// The control that starts the reveal.
    pub reveal_control: E,
    /// The intro region.
    pub intro_region: E,
    /// The video region.
    pub video_region: E,
    /// The media element.
    pub media: E,
    /// The close control.
    pub close_control: E,
}

/// Resolves every required element, failing on the first one missing.
pub fn locate<L: ElementLookup>(
    lookup: &L,
    config: &LandingConfig,
) -> Result<RequiredElements<L::Element>, MountError> {
    let find = |role: ElementRole| {
        let id = role.id(config);
        lookup
            .find(id)
            .ok_or(MountError::MissingElement { role, id })
    };
    Ok(RequiredElements {
        reveal_control: find(ElementRole::RevealControl)?,
        intro_region: find(ElementRole::IntroRegion)?,
        video_region: find(ElementRole::VideoRegion)?,
        media: find(ElementRole::Media)?,
        close_control: find(ElementRole::CloseControl)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;

    struct Ids(Vec<&'static str>);

    impl ElementLookup for Ids {
        type Element = &'static str;

        fn find(&self, id: &str) -> Option<&'static str> {
            self.0.iter().copied().find(|&known| known == id)
        }
    }

    fn all_ids(config: &LandingConfig) -> Vec<&'static str> {
        ElementRole::ALL.iter().map(|role| role.id(config)).collect()
    }

    #[test]
    fn locates_every_role() {
        let config = LandingConfig::astra();
        let found = locate(&Ids(all_ids(&config)), &config).unwrap();
        assert_eq!(found.reveal_control, "inauguration-btn");
        assert_eq!(found.media, "inauguration-video");
        assert_eq!(found.close_control, "close-video-btn");
    }

    #[test]
    fn reports_first_missing_role() {
        let config = LandingConfig::astra();
        let mut ids = all_ids(&config);
        ids.retain(|&id| id != "video-section" && id != "close-video-btn");

        let err = locate(&Ids(ids), &config).unwrap_err();
        assert_eq!(
            err,
            MountError::MissingElement {
                role: ElementRole::VideoRegion,
                id: "video-section",
            }
        );
        assert_eq!(
            err.to_string(),
            "required element `#video-section` (video region) not found"
        );
    }

    #[test]
    fn empty_document_fails_on_reveal_control() {
        let config = LandingConfig::astra();
        let err = locate(&Ids(Vec::new()), &config).unwrap_err();
        assert!(matches!(
            err,
            MountError::MissingElement {
                role: ElementRole::RevealControl,
                ..
            }
        ));
    }
}
