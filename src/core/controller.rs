use super::angle::Scale;
use super::constants::{
    DEFAULT_MAX, DEFAULT_MIN, DEFAULT_PRECISE_MODE, DEFAULT_UNLOCK_DISTANCE, DEFAULT_VALUE,
};
use super::session::{DragSession, DragSnapshot};
use super::value::{Ownership, ValueStore};
use glam::Vec2;

/// Construction-time configuration for the interaction core.
#[derive(Clone, Copy, Debug)]
pub struct KnobConfig {
    /// Explicit value; supplying one fixes the control in controlled mode.
    pub value: Option<f32>,
    pub default_value: f32,
    pub min: f32,
    pub max: f32,
    pub precise_mode: bool,
    pub unlock_distance: f32,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            value: None,
            default_value: DEFAULT_VALUE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            precise_mode: DEFAULT_PRECISE_MODE,
            unlock_distance: DEFAULT_UNLOCK_DISTANCE,
        }
    }
}

/// Wires pointer samples to the drag session, the angle scale and the value
/// store, and exposes the render-facing snapshot.
///
/// The current value and the current angle are two views of one source of
/// truth: the live normalized angle while a drag is emitting, the stored
/// domain value otherwise.
pub struct KnobController {
    scale: Scale,
    store: ValueStore,
    session: DragSession,
    snapshot: DragSnapshot,
    precise_mode: bool,
    unlock_distance: f32,
}

impl KnobController {
    pub fn new(cfg: KnobConfig) -> anyhow::Result<Self> {
        let scale = Scale::new(cfg.min, cfg.max)?;
        Ok(Self {
            scale,
            store: ValueStore::new(cfg.value, cfg.default_value),
            session: DragSession::idle(),
            snapshot: DragSnapshot::default(),
            precise_mode: cfg.precise_mode,
            unlock_distance: cfg.unlock_distance,
        })
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.store.read()
    }

    #[inline]
    pub fn ownership(&self) -> Ownership {
        self.store.ownership()
    }

    #[inline]
    pub fn snapshot(&self) -> DragSnapshot {
        self.snapshot
    }

    #[inline]
    pub fn precise_mode(&self) -> bool {
        self.precise_mode
    }

    #[inline]
    pub fn unlock_distance(&self) -> f32 {
        self.unlock_distance
    }

    /// Dial angle to render: the live gesture angle while dragging,
    /// otherwise the scaled current value. An out-of-domain controlled
    /// value is clamped before scaling so the graphic never over-rotates.
    pub fn angle(&self) -> f32 {
        if self.snapshot.dragging {
            self.snapshot.value_angle
        } else {
            self.resting_angle()
        }
    }

    fn resting_angle(&self) -> f32 {
        self.scale.to_angle(self.scale.clamp(self.store.read()))
    }

    /// Rebuild the scale when the domain bounds change.
    pub fn set_bounds(&mut self, min: f32, max: f32) -> anyhow::Result<()> {
        self.scale = Scale::new(min, max)?;
        Ok(())
    }

    /// Start a gesture. `center` is the container center read from its
    /// bounding box at gesture start; both arguments are client coordinates.
    pub fn pointer_down(&mut self, center: Vec2, pointer: Vec2) {
        let initial_angle = self.resting_angle();
        self.session.begin(
            center,
            pointer,
            initial_angle,
            self.precise_mode,
            self.unlock_distance,
        );
        self.snapshot = DragSnapshot {
            dragging: true,
            drag_distance: 0.0,
            pointer_pos: pointer,
            value_angle: initial_angle,
        };
    }

    /// Feed a move sample; returns the newly emitted domain value, or `None`
    /// while precision-locked. A move with no gesture in flight is a no-op.
    pub fn pointer_move(&mut self, pointer: Vec2) -> Option<f32> {
        let outcome = self.session.sample(pointer)?;
        self.snapshot.pointer_pos = pointer;
        self.snapshot.drag_distance = outcome.distance;
        match outcome.angle {
            Some(angle) => {
                self.snapshot.value_angle = angle;
                Some(self.store.write(self.scale.to_value(angle)))
            }
            None => {
                // Locked: the displayed angle stays pinned at the start angle.
                self.snapshot.value_angle = self.session.initial_angle();
                None
            }
        }
    }

    /// Finish the gesture. Returns true when a drag was in flight; the
    /// caller then moves keyboard focus to the companion input.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.session.finish();
        self.snapshot.dragging = false;
        was_dragging
    }

    /// Direct set from the companion input; bypasses the drag path entirely.
    /// Returns the value to forward to the change notification.
    pub fn set_value(&mut self, value: f32) -> f32 {
        self.store.write(value)
    }

    /// Programmatic set from the control's owner. In controlled mode this is
    /// the external feedback path; in uncontrolled mode it replaces the
    /// local value. Fires no change notification.
    pub fn set_external(&mut self, value: f32) {
        match self.store.ownership() {
            Ownership::Controlled => self.store.sync_external(value),
            Ownership::Uncontrolled => {
                self.store.write(value);
            }
        }
    }
}
