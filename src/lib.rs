#![cfg(target_arch = "wasm32")]
//! Rotatable dial control for the browser.
//!
//! Renders an SVG knob inside a host element and converts pointer-drag
//! gestures into a bounded numeric value. The interaction core (angle
//! geometry, gesture state machine, value ownership) is pure Rust under
//! `core/` and is exercised by host-side tests; this module is the DOM
//! wiring and the `wasm_bindgen` surface.

use crate::core::constants::{
    DEFAULT_MAX, DEFAULT_MIN, DEFAULT_PRECISE_MODE, DEFAULT_STEP, DEFAULT_UNLOCK_DISTANCE,
    DEFAULT_VALUE,
};
use crate::core::{KnobConfig, KnobController, Ownership};
use crate::skin::Skin;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod core;
mod dom;
mod events;
mod field;
mod overlay;
mod render;
mod skin;

// Container defaults from the control's stylesheet-free layout; an
// author-supplied style attribute is appended and wins on conflicts.
const CONTAINER_STYLE: &str = "width:50px;height:50px;overflow:hidden;position:relative";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("knob-web loaded");
    Ok(())
}

/// Construction-time options. The plain numeric fields are public with
/// their defaults; the optional pieces (explicit value, callbacks, skin)
/// are set through methods.
#[wasm_bindgen]
#[derive(Clone)]
pub struct KnobOptions {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default_value: f32,
    pub precise_mode: bool,
    pub unlock_distance: f32,
    value: Option<f32>,
    format: Option<js_sys::Function>,
    on_change: Option<js_sys::Function>,
    skin: Option<Skin>,
}

#[wasm_bindgen]
impl KnobOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> KnobOptions {
        KnobOptions {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            default_value: DEFAULT_VALUE,
            precise_mode: DEFAULT_PRECISE_MODE,
            unlock_distance: DEFAULT_UNLOCK_DISTANCE,
            value: None,
            format: None,
            on_change: None,
            skin: None,
        }
    }

    /// Supply an explicit value. This fixes the control in controlled mode
    /// for its whole lifetime: the caller owns the value and feeds it back
    /// through `Knob::set_value`.
    pub fn set_value(&mut self, value: f32) {
        self.value = Some(value);
    }

    /// Value-to-display-text function. Defaults to rounding to an integer.
    pub fn set_format(&mut self, format: js_sys::Function) {
        self.format = Some(format);
    }

    /// Value-change notification, fired on every emitted drag sample and on
    /// companion-input edits.
    pub fn set_on_change(&mut self, on_change: js_sys::Function) {
        self.on_change = Some(on_change);
    }

    /// Replace the built-in skin. `knob_x`/`knob_y` is the rotation center
    /// of the skin's `#knob` element, in the SVG's own coordinates.
    pub fn set_skin(&mut self, svg: String, knob_x: f32, knob_y: f32) {
        self.skin = Some(Skin { svg, knob_x, knob_y });
    }
}

impl Default for KnobOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A mounted dial control. Keeps the DOM wiring alive for as long as the
/// handle exists.
#[wasm_bindgen]
pub struct Knob {
    wiring: events::KnobWiring,
}

#[wasm_bindgen]
impl Knob {
    /// Mount a knob inside the element with the given id.
    pub fn attach(container_id: &str, options: KnobOptions) -> Result<Knob, JsValue> {
        attach_impl(container_id, options).map_err(|e| JsValue::from_str(&format!("{e:?}")))
    }

    /// Current domain value.
    pub fn value(&self) -> f32 {
        self.wiring.controller.borrow().value()
    }

    /// Owner-facing setter. In controlled mode this is how the external
    /// value is fed back in; in uncontrolled mode it replaces the local
    /// value. Repaints, fires no change notification.
    pub fn set_value(&mut self, value: f32) {
        self.wiring.controller.borrow_mut().set_external(value);
        events::pointer::redraw(&self.wiring);
    }

    /// Change the domain bounds. Rebuilds the angle scale; rejects
    /// `min >= max`.
    pub fn set_bounds(&mut self, min: f32, max: f32) -> Result<(), JsValue> {
        self.wiring
            .controller
            .borrow_mut()
            .set_bounds(min, max)
            .map_err(|e| JsValue::from_str(&format!("{e:?}")))?;
        self.wiring.field.set_bounds(min, max);
        events::pointer::redraw(&self.wiring);
        Ok(())
    }
}

fn attach_impl(container_id: &str, options: KnobOptions) -> anyhow::Result<Knob> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::HtmlElement = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{container_id}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let author_style = container.get_attribute("style").unwrap_or_default();
    _ = container.set_attribute("style", &format!("{CONTAINER_STYLE};{author_style}"));

    let skin = options.skin.unwrap_or_default();
    let view = Rc::new(render::KnobView::mount(&container, &skin)?);

    let controller = Rc::new(RefCell::new(KnobController::new(KnobConfig {
        value: options.value,
        default_value: options.default_value,
        min: options.min,
        max: options.max,
        precise_mode: options.precise_mode,
        unlock_distance: options.unlock_distance,
    })?));

    let initial_value = controller.borrow().value();
    let field = Rc::new(field::ValueField::mount(
        &document,
        &container,
        options.min,
        options.max,
        options.step,
        initial_value,
    )?);

    let format: Rc<dyn Fn(f32) -> String> = match options.format {
        Some(f) => Rc::new(
            move |v: f32| match f.call1(&JsValue::NULL, &JsValue::from_f64(v as f64)) {
                Ok(out) => out.as_string().unwrap_or_else(|| format!("{v:.0}")),
                Err(e) => {
                    log::error!("[knob] format callback threw: {e:?}");
                    format!("{v:.0}")
                }
            },
        ),
        None => Rc::new(|v: f32| format!("{v:.0}")),
    };

    let on_change: Rc<dyn Fn(f32)> = match options.on_change {
        Some(f) => Rc::new(move |v: f32| {
            if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_f64(v as f64)) {
                log::error!("[knob] on_change callback threw: {e:?}");
            }
        }),
        None => Rc::new(|_| {}),
    };

    let wiring = events::KnobWiring {
        container,
        controller,
        view,
        field,
        format,
        on_change,
    };
    events::pointer::redraw(&wiring);
    events::wire_pointer_handlers(wiring.clone());
    events::wire_field_change(wiring.clone());

    let mode = match wiring.controller.borrow().ownership() {
        Ownership::Controlled => "controlled",
        Ownership::Uncontrolled => "uncontrolled",
    };
    log::info!("[knob] attached to #{container_id} ({mode} mode)");

    Ok(Knob { wiring })
}
