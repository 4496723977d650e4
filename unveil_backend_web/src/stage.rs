// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM stage.
//!
//! Applies [`Stage`] calls to the live document: class toggles on the intro
//! and video regions, `<video>` playback, the fallback play overlay, and
//! inline `transform`/`left`/`top` styles for the cosmetic effects.
//!
//! Failed DOM writes are dropped; the core has already committed the state
//! change. The fallback overlay is the exception: a failure to build it is
//! logged and reported back so the core does not track a missing control.
//!
//! Orbs are looked up again on each pointer move and statistic targets when
//! the counters start, so markup changed after mounting is honored.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use js_sys::Function;
use kurbo::{Point, Size, Vec2};
use unveil_core::config::LandingConfig;
use unveil_core::mount::RequiredElements;
use unveil_core::stage::{PlayIntent, Stage};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlElement, HtmlVideoElement, Window, console};

/// Called, from a microtask, when the platform rejects a playback request.
pub type RejectionHook = Rc<dyn Fn(PlayIntent)>;

/// [`Stage`] over the browser DOM.
pub struct DomStage {
    window: Window,
    document: Document,
    config: LandingConfig,
    intro: HtmlElement,
    video_region: HtmlElement,
    media: HtmlVideoElement,
    glow: HtmlElement,
    orbs: Vec<HtmlElement>,
    stat_numbers: Vec<HtmlElement>,
    /// `data-target` of each statistic number, read when counting starts.
    stat_targets: Vec<Option<String>>,
    overlay: Option<HtmlElement>,
    fallback_listener: Option<Function>,
    on_rejected: Option<RejectionHook>,
}

impl core::fmt::Debug for DomStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomStage")
            .field("orbs", &self.orbs.len())
            .field("stats", &self.stat_numbers.len())
            .field("overlay", &self.overlay.is_some())
            .field("on_rejected", &self.on_rejected.is_some())
            .finish_non_exhaustive()
    }
}

impl DomStage {
    /// Builds a stage over located elements.
    ///
    /// Appends the cursor glow element to `body` and looks up the orb and
    /// statistic elements by class.
    pub fn new(
        document: Document,
        elements: RequiredElements<Element>,
        config: LandingConfig,
    ) -> Result<Self, JsValue> {
        let window = document
            .default_view()
            .ok_or_else(|| JsValue::from_str("document has no window"))?;
        let intro = elements.intro_region.dyn_into::<HtmlElement>()?;
        let video_region = elements.video_region.dyn_into::<HtmlElement>()?;
        let media = elements.media.dyn_into::<HtmlVideoElement>()?;

        let glow: HtmlElement = document.create_element("div")?.unchecked_into();
        glow.set_class_name(config.glow_class);
        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&glow)?;

        let orbs = elements_by_class(&document, config.orb_class);
        let stat_numbers = elements_by_class(&document, config.stat_number_class);

        Ok(Self {
            window,
            document,
            config,
            intro,
            video_region,
            media,
            glow,
            orbs,
            stat_numbers,
            stat_targets: Vec::new(),
            overlay: None,
            fallback_listener: None,
            on_rejected: None,
        })
    }

    /// Sets the hook told about rejected playback requests.
    pub fn set_rejection_hook(&mut self, hook: RejectionHook) {
        self.on_rejected = Some(hook);
    }

    /// Sets the click listener attached to every fallback play button.
    pub fn set_fallback_listener(&mut self, listener: Function) {
        self.fallback_listener = Some(listener);
    }

    /// Statistic containers paired with the index of the number they hold.
    ///
    /// Containers without a known statistic number are left out.
    #[must_use]
    pub fn hover_targets(&self) -> Vec<(HtmlElement, usize)> {
        elements_by_class(&self.document, self.config.stat_item_class)
            .into_iter()
            .filter_map(|item| {
                let number = item
                    .get_elements_by_class_name(self.config.stat_number_class)
                    .item(0)?;
                let index = self
                    .stat_numbers
                    .iter()
                    .position(|el| AsRef::<Element>::as_ref(el) == &number)?;
                Some((item, index))
            })
            .collect()
    }

    fn build_overlay(&self) -> Result<HtmlElement, JsValue> {
        let overlay: HtmlElement = self.document.create_element("div")?.unchecked_into();
        overlay.set_class_name(self.config.fallback_overlay_class);
        overlay.set_inner_html(&format!(
            concat!(
                r#"<button class="{}" aria-label="Play Video">"#,
                r#"<svg width="64" height="64" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<path d="M8 5v14l11-7L8 5z" fill="currentColor"/>"#,
                "</svg></button>"
            ),
            self.config.fallback_button_class
        ));
        if let Some(listener) = &self.fallback_listener
            && let Some(button) = overlay
                .get_elements_by_class_name(self.config.fallback_button_class)
                .item(0)
        {
            button.add_event_listener_with_callback("click", listener)?;
        }
        self.video_region.append_child(&overlay)?;
        Ok(overlay)
    }
}

fn elements_by_class(root: &Document, class: &str) -> Vec<HtmlElement> {
    let list = root.get_elements_by_class_name(class);
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn set_class(el: &HtmlElement, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

impl Stage for DomStage {
    fn set_intro_fading(&mut self, fading: bool) {
        set_class(&self.intro, self.config.fade_out_class, fading);
    }

    fn set_intro_visible(&mut self, visible: bool) {
        let display = if visible {
            self.config.intro_display
        } else {
            "none"
        };
        let _ = self.intro.style().set_property("display", display);
    }

    fn set_video_active(&mut self, active: bool) {
        set_class(&self.video_region, self.config.active_class, active);
    }

    fn play(&mut self, intent: PlayIntent) {
        let attempt = self.media.play();
        let hook = self.on_rejected.clone();
        // Reported from a microtask even when `play()` throws synchronously,
        // so the hook never runs inside the call that requested playback.
        spawn_local(async move {
            let rejected = match attempt {
                Ok(promise) => JsFuture::from(promise).await.is_err(),
                Err(_) => true,
            };
            if rejected && let Some(hook) = hook {
                hook(intent);
            }
        });
    }

    fn pause(&mut self) {
        let _ = self.media.pause();
    }

    fn rewind(&mut self) {
        self.media.set_current_time(0.0);
    }

    fn show_fallback(&mut self) -> bool {
        if self.overlay.is_some() {
            return true;
        }
        match self.build_overlay() {
            Ok(overlay) => {
                self.overlay = Some(overlay);
                true
            }
            Err(err) => {
                console::error_2(
                    &JsValue::from_str("could not create the play button:"),
                    &err,
                );
                false
            }
        }
    }

    fn remove_fallback(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }
    }

    fn refresh_stats(&mut self) {
        self.stat_numbers = elements_by_class(&self.document, self.config.stat_number_class);
        self.stat_targets = self
            .stat_numbers
            .iter()
            .map(|el| el.get_attribute(self.config.target_attribute))
            .collect();
    }

    fn stat_count(&self) -> usize {
        self.stat_numbers.len()
    }

    fn stat_target(&self, index: usize) -> Option<&str> {
        self.stat_targets.get(index)?.as_deref()
    }

    fn set_stat_text(&mut self, index: usize, text: &str) {
        if let Some(el) = self.stat_numbers.get(index) {
            el.set_text_content(Some(text));
        }
    }

    fn set_stat_scale(&mut self, index: usize, scale: f64) {
        if let Some(el) = self.stat_numbers.get(index) {
            let _ = el
                .style()
                .set_property("transform", &format!("scale({scale})"));
        }
    }

    fn viewport(&self) -> Size {
        let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(read(self.window.inner_width()), read(self.window.inner_height()))
    }

    fn refresh_orbs(&mut self) {
        self.orbs = elements_by_class(&self.document, self.config.orb_class);
    }

    fn orb_count(&self) -> usize {
        self.orbs.len()
    }

    fn set_orb_offset(&mut self, index: usize, offset: Vec2) {
        if let Some(el) = self.orbs.get(index) {
            let _ = el.style().set_property(
                "transform",
                &format!("translate({}px, {}px)", offset.x, offset.y),
            );
        }
    }

    fn move_glow(&mut self, position: Point) {
        let style = self.glow.style();
        let _ = style.set_property("left", &format!("{}px", position.x));
        let _ = style.set_property("top", &format!("{}px", position.y));
    }
}
