//! Gesture reducer for the crop editor.
//!
//! Pointer and wheel events fold into [`CropState`] through a pure reducer,
//! keeping the geometry independent of any event wiring. Events are applied
//! one at a time in arrival order; each produces the next state synchronously.
//!
//! Drag offsets are anchored: the offset is always the drag-start offset plus
//! the total pointer displacement since drag start, never an accumulation of
//! per-frame deltas, so long drags don't drift.

use super::WHEEL_ZOOM_STEP;
use super::geometry::CropState;

/// An input event, with coordinates in viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PointerDown { id: u32, x: f64, y: f64 },
    PointerMove { id: u32, x: f64, y: f64 },
    PointerUp { id: u32 },
    /// Negative `delta_y` zooms in, positive zooms out.
    Wheel { delta_y: f64 },
}

/// The gesture currently being tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tracking {
    None,
    Drag {
        pointer: u32,
        start: (f64, f64),
        last: (f64, f64),
        /// Offset at drag start; the anchor all moves are relative to.
        origin: (f64, f64),
    },
    Pinch {
        first: (u32, (f64, f64)),
        second: (u32, (f64, f64)),
        start_distance: f64,
        /// Scale at pinch start.
        origin: f64,
    },
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// Crop transform plus in-flight gesture bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorState {
    pub crop: CropState,
    tracking: Tracking,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            crop: CropState::identity(),
            tracking: Tracking::None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.tracking, Tracking::Drag { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.tracking, Tracking::Pinch { .. })
    }

    /// Fold one event into the state.
    pub fn apply(self, event: GestureEvent) -> Self {
        match event {
            GestureEvent::PointerDown { id, x, y } => self.pointer_down(id, (x, y)),
            GestureEvent::PointerMove { id, x, y } => self.pointer_move(id, (x, y)),
            GestureEvent::PointerUp { id } => self.pointer_up(id),
            GestureEvent::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    fn pointer_down(self, id: u32, position: (f64, f64)) -> Self {
        match self.tracking {
            Tracking::None => Self {
                tracking: Tracking::Drag {
                    pointer: id,
                    start: position,
                    last: position,
                    origin: self.crop.offset,
                },
                ..self
            },
            // A second pointer cancels the drag and starts a pinch. The
            // offset keeps whatever value the drag last produced.
            Tracking::Drag { pointer, last, .. } if pointer != id => Self {
                tracking: Tracking::Pinch {
                    first: (pointer, last),
                    second: (id, position),
                    start_distance: distance(last, position).max(1e-6),
                    origin: self.crop.scale,
                },
                ..self
            },
            // Re-down of the same pointer or a third pointer: no change.
            _ => self,
        }
    }

    fn pointer_move(self, id: u32, position: (f64, f64)) -> Self {
        match self.tracking {
            Tracking::Drag {
                pointer,
                start,
                origin,
                ..
            } if pointer == id => {
                let offset = (
                    origin.0 + (position.0 - start.0),
                    origin.1 + (position.1 - start.1),
                );
                Self {
                    crop: self.crop.panned_to(offset),
                    tracking: Tracking::Drag {
                        pointer,
                        start,
                        last: position,
                        origin,
                    },
                }
            }
            Tracking::Pinch {
                first,
                second,
                start_distance,
                origin,
            } if first.0 == id || second.0 == id => {
                let first = if first.0 == id { (id, position) } else { first };
                let second = if second.0 == id { (id, position) } else { second };
                let scale = origin * (distance(first.1, second.1) / start_distance);
                Self {
                    crop: self.crop.with_scale(scale),
                    tracking: Tracking::Pinch {
                        first,
                        second,
                        start_distance,
                        origin,
                    },
                }
            }
            _ => self,
        }
    }

    fn pointer_up(self, id: u32) -> Self {
        match self.tracking {
            Tracking::Drag { pointer, .. } if pointer == id => Self {
                tracking: Tracking::None,
                ..self
            },
            Tracking::Pinch { first, second, .. } if first.0 == id || second.0 == id => Self {
                tracking: Tracking::None,
                ..self
            },
            _ => self,
        }
    }

    fn wheel(self, delta_y: f64) -> Self {
        let factor = if delta_y < 0.0 {
            WHEEL_ZOOM_STEP
        } else if delta_y > 0.0 {
            1.0 / WHEEL_ZOOM_STEP
        } else {
            return self;
        };
        Self {
            crop: self.crop.zoomed(factor),
            ..self
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{SCALE_MAX, SCALE_MIN};

    fn down(id: u32, x: f64, y: f64) -> GestureEvent {
        GestureEvent::PointerDown { id, x, y }
    }

    fn mv(id: u32, x: f64, y: f64) -> GestureEvent {
        GestureEvent::PointerMove { id, x, y }
    }

    fn up(id: u32) -> GestureEvent {
        GestureEvent::PointerUp { id }
    }

    fn run(events: &[GestureEvent]) -> EditorState {
        events
            .iter()
            .fold(EditorState::new(), |state, &event| state.apply(event))
    }

    #[test]
    fn drag_offsets_are_anchored_to_drag_start() {
        let state = run(&[down(1, 100.0, 100.0), mv(1, 130.0, 90.0)]);
        assert_eq!(state.crop.offset, (30.0, -10.0));

        // Many intermediate moves land exactly where a single move would.
        let mut jittered = EditorState::new().apply(down(1, 100.0, 100.0));
        for i in 0..1000 {
            let wobble = (i % 7) as f64;
            jittered = jittered.apply(mv(1, 100.0 + wobble, 100.0 - wobble));
        }
        jittered = jittered.apply(mv(1, 130.0, 90.0));
        assert_eq!(jittered.crop.offset, (30.0, -10.0));
    }

    #[test]
    fn second_drag_continues_from_previous_offset() {
        let state = run(&[
            down(1, 0.0, 0.0),
            mv(1, 10.0, 0.0),
            up(1),
            down(1, 50.0, 50.0),
            mv(1, 55.0, 52.0),
        ]);
        assert_eq!(state.crop.offset, (15.0, 2.0));
    }

    #[test]
    fn moves_without_a_pointer_down_are_ignored() {
        let state = run(&[mv(1, 40.0, 40.0)]);
        assert_eq!(state.crop.offset, (0.0, 0.0));

        // An unrelated pointer moving during a drag changes nothing.
        let state = run(&[down(1, 0.0, 0.0), mv(2, 99.0, 99.0)]);
        assert_eq!(state.crop.offset, (0.0, 0.0));
    }

    #[test]
    fn wheel_zooms_in_and_out() {
        let zoomed_in = run(&[GestureEvent::Wheel { delta_y: -120.0 }]);
        assert!((zoomed_in.crop.scale - 1.1).abs() < 1e-12);

        let zoomed_out = run(&[GestureEvent::Wheel { delta_y: 53.0 }]);
        assert!((zoomed_out.crop.scale - 1.0 / 1.1).abs() < 1e-12);

        let unchanged = run(&[GestureEvent::Wheel { delta_y: 0.0 }]);
        assert_eq!(unchanged.crop.scale, 1.0);
    }

    #[test]
    fn any_wheel_sequence_stays_within_the_clamp() {
        let mut state = EditorState::new();
        for i in 0..500 {
            let delta = if i % 3 == 0 { 100.0 } else { -100.0 };
            state = state.apply(GestureEvent::Wheel { delta_y: delta });
            assert!(state.crop.scale >= SCALE_MIN && state.crop.scale <= SCALE_MAX);
        }
        for _ in 0..100 {
            state = state.apply(GestureEvent::Wheel { delta_y: -1.0 });
        }
        assert_eq!(state.crop.scale, SCALE_MAX);
    }

    #[test]
    fn second_pointer_cancels_drag_and_starts_pinch() {
        let state = run(&[down(1, 0.0, 0.0), mv(1, 20.0, 0.0), down(2, 100.0, 0.0)]);
        assert!(state.is_pinching());
        assert!(!state.is_dragging());
        // The drag's work is kept.
        assert_eq!(state.crop.offset, (20.0, 0.0));
    }

    #[test]
    fn pinch_scale_is_the_distance_ratio() {
        // Pointers start 100 apart, spread to 200: scale doubles.
        let state = run(&[
            down(1, 0.0, 0.0),
            down(2, 100.0, 0.0),
            mv(2, 200.0, 0.0),
        ]);
        assert!((state.crop.scale - 2.0).abs() < 1e-9);

        // Narrowing back to 50 halves from the gesture origin, not from 2.0.
        let state = state.apply(mv(2, 50.0, 0.0));
        assert!((state.crop.scale - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pinch_clamps_at_the_zoom_limits() {
        let state = run(&[
            down(1, 0.0, 0.0),
            down(2, 1.0, 0.0),
            mv(2, 1000.0, 0.0),
        ]);
        assert_eq!(state.crop.scale, SCALE_MAX);
    }

    #[test]
    fn lifting_either_pinch_pointer_ends_the_gesture() {
        let state = run(&[down(1, 0.0, 0.0), down(2, 100.0, 0.0), up(1)]);
        assert!(!state.is_pinching());
        assert!(!state.is_dragging());
    }

    #[test]
    fn third_pointer_is_ignored() {
        let state = run(&[
            down(1, 0.0, 0.0),
            down(2, 100.0, 0.0),
            down(3, 50.0, 50.0),
            mv(3, 60.0, 60.0),
        ]);
        assert!(state.is_pinching());
        assert_eq!(state.crop.scale, 1.0);
    }
}
