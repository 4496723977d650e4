// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Astra 2.0 inauguration landing page.
//!
//! Locates the required elements, builds a [`DomStage`], translates DOM
//! events into [`Input`]s and pumps due timers from a [`RafLoop`]. If any
//! required element is missing, one error is logged and nothing is bound.
//!
//! Build with: `wasm-pack build --target web demos/unveil_landing`
//! Then serve `demos/unveil_landing/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use js_sys::Function;
use kurbo::Point;
use unveil_backend_web::{ConsoleSink, DocumentLookup, DomStage, RafLoop, RejectionHook, now};
use unveil_core::config::LandingConfig;
use unveil_core::input::{Input, Key};
use unveil_core::landing::Landing;
use unveil_core::mount::locate;
use unveil_core::stage::PlayIntent;
use unveil_core::time::HostTime;
use unveil_core::trace::{Diagnostic, TraceSink as _, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, MouseEvent, console};

struct App {
    landing: Landing,
    stage: DomStage,
    sink: ConsoleSink,
}

type Shared = Rc<RefCell<App>>;

/// Mounts the page, or logs why it cannot.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    let config = LandingConfig::astra();

    let elements = match locate(&DocumentLookup(&document), &config) {
        Ok(elements) => elements,
        Err(err) => {
            ConsoleSink.on_diagnostic(&Diagnostic::MountFailed(err));
            return Ok(());
        }
    };
    let reveal = elements.reveal_control.clone();
    let close = elements.close_control.clone();

    let app: Shared = Rc::new(RefCell::new(App {
        landing: Landing::new(),
        stage: DomStage::new(document.clone(), elements, config)?,
        sink: ConsoleSink,
    }));

    let weak = Rc::downgrade(&app);
    let hook: RejectionHook = Rc::new(move |intent: PlayIntent| {
        if let Some(app) = weak.upgrade() {
            dispatch(&app, Input::PlaybackRejected(intent));
        }
    });
    app.borrow_mut().stage.set_rejection_hook(hook);

    let fallback_app = Rc::clone(&app);
    let fallback_cb = Closure::wrap(Box::new(move |_event: Event| {
        dispatch(&fallback_app, Input::FallbackActivated);
    }) as Box<dyn FnMut(_)>);
    app.borrow_mut()
        .stage
        .set_fallback_listener(fallback_cb.as_ref().unchecked_ref::<Function>().clone());
    fallback_cb.forget();

    bind_controls(&app, &document, &reveal, &close)?;
    bind_stats(&app)?;

    app.borrow_mut().landing.start(now());

    let pump_app = Rc::clone(&app);
    let raf = RafLoop::new(move |now| pump(&pump_app, now));
    raf.start();
    core::mem::forget(raf);

    console::log_2(
        &"%c🚀 Astra 2.0 Bootcamp Inauguration".into(),
        &"font-size: 20px; font-weight: bold; color: #6366f1;".into(),
    );
    Ok(())
}

/// Hands one input to the page. Returns whether to suppress the default action.
fn dispatch(app: &Shared, input: Input) -> bool {
    let Ok(mut app) = app.try_borrow_mut() else {
        return false;
    };
    let App {
        landing,
        stage,
        sink,
    } = &mut *app;
    let mut tracer = Tracer::new(sink);
    landing.handle(stage, &mut tracer, input, now())
}

fn pump(app: &Shared, now: HostTime) {
    let Ok(mut app) = app.try_borrow_mut() else {
        return;
    };
    let App {
        landing,
        stage,
        sink,
    } = &mut *app;
    let mut tracer = Tracer::new(sink);
    landing.advance(stage, &mut tracer, now);
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn bind_controls(
    app: &Shared,
    document: &Document,
    reveal: &Element,
    close: &Element,
) -> Result<(), JsValue> {
    let reveal_app = Rc::clone(app);
    listen(reveal, "click", move |_event: Event| {
        dispatch(&reveal_app, Input::RevealActivated);
    })?;

    let close_app = Rc::clone(app);
    listen(close, "click", move |_event: Event| {
        dispatch(&close_app, Input::CloseActivated);
    })?;

    let key_app = Rc::clone(app);
    let key_doc = document.clone();
    let key_reveal = reveal.clone();
    listen(document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let input = Input::KeyDown {
            key: Key::from_dom(&event.key()),
            on_reveal_control: key_doc.active_element().as_ref() == Some(&key_reveal),
        };
        if dispatch(&key_app, input) {
            event.prevent_default();
        }
    })?;

    let move_app = Rc::clone(app);
    listen(document, "mousemove", move |event: Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let position = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        dispatch(&move_app, Input::PointerMoved(position));
    })?;

    Ok(())
}

fn bind_stats(app: &Shared) -> Result<(), JsValue> {
    let targets = app.borrow().stage.hover_targets();
    for (item, index) in targets {
        for (kind, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let hover_app = Rc::clone(app);
            listen(&item, kind, move |_event: Event| {
                dispatch(&hover_app, Input::StatHover { index, entered });
            })?;
        }
    }
    Ok(())
}
