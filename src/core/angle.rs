use glam::Vec2;

/// One full revolution in degrees.
pub const FULL_TURN_DEG: f32 = 360.0;

/// Angle of the vector from the dial center to `offset`, measured clockwise
/// from the upward axis in screen coordinates (y grows downward).
///
/// Total: the zero vector maps to 0 degrees.
#[inline]
pub fn point_angle(offset: Vec2) -> f32 {
    if offset == Vec2::ZERO {
        return 0.0;
    }
    normalize(offset.x.atan2(-offset.y).to_degrees())
}

/// Wrap any angle into `[0, 360)`.
///
/// Modulo reduction, so inputs that are many revolutions out of range (from
/// accumulated deltas) come back in range in one step.
#[inline]
pub fn normalize(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid of a tiny negative can round back up to exactly 360.0
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Invertible affine map between the closed value domain `[min, max]` and
/// the rotation range `[0, 360]`.
///
/// The same range is used at construction and after a bounds change.
/// `to_angle`/`to_value` never clamp; domain policy lives with the caller.
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    min: f32,
    max: f32,
}

impl Scale {
    /// Build the map. `min >= max` is rejected since inversion would be
    /// undefined.
    pub fn new(min: f32, max: f32) -> anyhow::Result<Self> {
        anyhow::ensure!(
            min < max,
            "invalid domain: min ({min}) must be less than max ({max})"
        );
        Ok(Self { min, max })
    }

    #[inline]
    pub fn to_angle(&self, value: f32) -> f32 {
        (value - self.min) / (self.max - self.min) * FULL_TURN_DEG
    }

    #[inline]
    pub fn to_value(&self, angle: f32) -> f32 {
        self.min + angle / FULL_TURN_DEG * (self.max - self.min)
    }

    /// Clamp a value into the domain.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}
