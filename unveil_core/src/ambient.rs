// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cosmetic pointer feedback: orb parallax, cursor glow and hover scaling.
//!
//! These are stateless per-event transforms. The only state kept is the
//! latest pointer position in a [`PointerCell`], overwritten on every move.

use kurbo::{Point, Size, Vec2};

use crate::stage::Stage;

/// Parallax distance per orb index, in pixels at the viewport edge.
pub const PARALLAX_STEP: f64 = 40.0;

/// Scale of a hovered statistic number.
pub const HOVER_SCALE: f64 = 1.1;

/// Scale of a statistic number at rest.
pub const REST_SCALE: f64 = 1.0;

/// Latest pointer position, viewport-relative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerCell(Option<Point>);

impl PointerCell {
    /// Replaces the stored position.
    pub fn set(&mut self, position: Point) {
        self.0 = Some(position);
    }

    /// The last position seen, if the pointer has moved at all.
    #[must_use]
    pub fn get(&self) -> Option<Point> {
        self.0
    }
}

/// Offset for orb `index` with the pointer at `pointer`.
///
/// The pointer's offset from the viewport center, as a fraction of the
/// viewport, scaled by `(index + 1) × PARALLAX_STEP`. Returns `None` for a
/// viewport with no area.
#[must_use]
pub fn parallax_offset(pointer: Point, viewport: Size, index: usize) -> Option<Vec2> {
    if !(viewport.width > 0.0 && viewport.height > 0.0) {
        return None;
    }
    let fraction = Vec2::new(pointer.x / viewport.width, pointer.y / viewport.height);
    let speed = (index + 1) as f64 * PARALLAX_STEP;
    Some((fraction - Vec2::new(0.5, 0.5)) * speed)
}

/// Scale for a statistic number given its hover state.
#[must_use]
pub const fn hover_scale(entered: bool) -> f64 {
    if entered { HOVER_SCALE } else { REST_SCALE }
}

/// Applies a pointer move: records it, offsets every orb, moves the glow.
pub fn pointer_moved<S: Stage + ?Sized>(cell: &mut PointerCell, stage: &mut S, position: Point) {
    cell.set(position);
    stage.refresh_orbs();
    let viewport = stage.viewport();
    for index in 0..stage.orb_count() {
        if let Some(offset) = parallax_offset(position, viewport, index) {
            stage.set_orb_offset(index, offset);
        }
    }
    stage.move_glow(position);
}
