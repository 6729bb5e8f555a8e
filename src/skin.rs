//! Dial skins: an SVG body plus the rotation center of its knob element.
//!
//! A skin's markup is expected to contain an element with id `knob` (the
//! part that rotates) and optionally a `tspan` that receives the formatted
//! value. `knob_x`/`knob_y` are in the SVG's own coordinate space.

// Built-in skin, bundled at compile time
pub static DEFAULT_SKIN_SVG: &str = include_str!("../assets/default-skin.svg");

#[derive(Clone, Debug)]
pub struct Skin {
    pub svg: String,
    pub knob_x: f32,
    pub knob_y: f32,
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            svg: DEFAULT_SKIN_SVG.to_string(),
            knob_x: 50.0,
            knob_y: 50.0,
        }
    }
}
