use super::angle::{normalize, point_angle};
use glam::Vec2;

/// Gesture lifecycle. `Locked` is the precision-lock phase: pointer travel
/// has not yet exceeded the unlock distance, so no value changes are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Locked,
    Active,
}

/// Render-facing view of the gesture, recomputed on every pointer sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSnapshot {
    pub dragging: bool,
    /// Pointer distance from the container center, in pixels.
    pub drag_distance: f32,
    /// Raw pointer position in client coordinates.
    pub pointer_pos: Vec2,
    /// Angle the dial should show, degrees in `[0, 360)` while dragging.
    pub value_angle: f32,
}

/// Result of feeding one pointer sample to an in-flight gesture.
#[derive(Clone, Copy, Debug)]
pub struct MoveOutcome {
    /// The normalized dial angle, once the gesture is emitting.
    /// `None` while precision-locked.
    pub angle: Option<f32>,
    pub distance: f32,
}

/// One pointer-down/move/up gesture over the dial.
///
/// Angles are always recomputed from the absolute pointer offset, so missed
/// move samples need no recovery. Out-of-order events (a sample or finish
/// with no gesture in flight) are no-ops.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    phase: Phase,
    /// Container center in client coordinates, captured at gesture start.
    center: Vec2,
    /// Dial angle when the gesture started.
    initial_angle: f32,
    /// Zero point for the angular delta. Re-anchored exactly once per
    /// gesture, when the precision lock releases.
    reference_angle: f32,
    unlock_distance: f32,
}

impl DragSession {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            center: Vec2::ZERO,
            initial_angle: 0.0,
            reference_angle: 0.0,
            unlock_distance: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn initial_angle(&self) -> f32 {
        self.initial_angle
    }

    /// Begin a gesture. `pointer` is in the same coordinate space as
    /// `center`. With `precise` off the very next sample already emits.
    pub fn begin(
        &mut self,
        center: Vec2,
        pointer: Vec2,
        initial_angle: f32,
        precise: bool,
        unlock_distance: f32,
    ) {
        self.center = center;
        self.initial_angle = initial_angle;
        self.reference_angle = point_angle(pointer - center);
        self.unlock_distance = unlock_distance;
        self.phase = if precise { Phase::Locked } else { Phase::Active };
    }

    /// Feed one pointer sample. Returns `None` when no gesture is in flight.
    pub fn sample(&mut self, pointer: Vec2) -> Option<MoveOutcome> {
        if self.phase == Phase::Idle {
            return None;
        }
        let offset = pointer - self.center;
        let distance = offset.length();

        if self.phase == Phase::Locked {
            if distance < self.unlock_distance {
                return Some(MoveOutcome {
                    angle: None,
                    distance,
                });
            }
            // Unlock: re-anchor the reference so this first emitting sample
            // lands exactly on the angle the dial already shows. Never
            // re-triggers; moving back inside the threshold stays Active.
            self.reference_angle = point_angle(offset);
            self.phase = Phase::Active;
        }

        let delta = point_angle(offset) - self.reference_angle;
        Some(MoveOutcome {
            angle: Some(normalize(self.initial_angle + delta)),
            distance,
        })
    }

    /// Finish the gesture. Returns true when one was actually in flight.
    pub fn finish(&mut self) -> bool {
        let was_dragging = self.phase != Phase::Idle;
        self.phase = Phase::Idle;
        was_dragging
    }
}
