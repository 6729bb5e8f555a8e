// Default construction-time options. Each mirrors a recognized public
// option on `KnobOptions`.

// Domain bounds
pub const DEFAULT_MIN: f32 = 0.0;
pub const DEFAULT_MAX: f32 = 100.0;

// Seed for uncontrolled mode
pub const DEFAULT_VALUE: f32 = 0.0;

// Increment granularity exposed to the companion numeric input
pub const DEFAULT_STEP: f32 = 1.0;

// Precision lock
pub const DEFAULT_PRECISE_MODE: bool = true;
pub const DEFAULT_UNLOCK_DISTANCE: f32 = 100.0; // pixels from the center
