//! Companion numeric input. Mirrors the dial value, accepts typed and
//! arrow-key edits, and receives keyboard focus when a drag ends.

use wasm_bindgen::JsCast;
use web_sys as web;

// Kept out of view but still focusable, so arrow keys keep working
const FIELD_STYLE: &str = "width:50%;position:absolute;top:0;left:-100%";

pub struct ValueField {
    input: web::HtmlInputElement,
}

impl ValueField {
    pub fn mount(
        document: &web::Document,
        container: &web::HtmlElement,
        min: f32,
        max: f32,
        step: f32,
        value: f32,
    ) -> anyhow::Result<Self> {
        let input: web::HtmlInputElement = document
            .create_element("input")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        input.set_type("number");
        input.set_min(&min.to_string());
        input.set_max(&max.to_string());
        input.set_step(&step.to_string());
        input.set_value(&value.to_string());
        _ = input.set_attribute("style", FIELD_STYLE);
        container
            .append_child(&input)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        Ok(Self { input })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlInputElement {
        &self.input
    }

    /// Mirror the current value. Skips the write when the text already
    /// matches, so the caret is not disturbed while the user types.
    pub fn show(&self, value: f32) {
        let text = value.to_string();
        if self.input.value() != text {
            self.input.set_value(&text);
        }
    }

    pub fn focus(&self) {
        _ = self.input.focus();
    }

    pub fn set_bounds(&self, min: f32, max: f32) {
        self.input.set_min(&min.to_string());
        self.input.set_max(&max.to_string());
    }
}
