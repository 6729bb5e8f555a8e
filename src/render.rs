//! SVG-facing rendering: inject the skin and keep the knob element's
//! rotation and value label in sync with the controller.

use crate::skin::Skin;
use web_sys as web;

/// Handles to the skin's moving parts, resolved once at mount.
pub struct KnobView {
    knob_el: Option<web::Element>,
    text_el: Option<web::Element>,
    /// The knob element's authored transform, preserved in front of the
    /// rotation we append.
    base_transform: String,
    knob_x: f32,
    knob_y: f32,
}

impl KnobView {
    /// Inject the skin's SVG into the container and look up the moving
    /// parts. Skins without a `#knob` element or a `tspan` still render,
    /// statically.
    pub fn mount(container: &web::HtmlElement, skin: &Skin) -> anyhow::Result<Self> {
        container.set_inner_html(&skin.svg);
        let knob_el = container
            .query_selector("#knob")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        let text_el = container
            .query_selector("tspan")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        if knob_el.is_none() {
            log::warn!("[knob] skin has no #knob element; the graphic will not rotate");
        }
        let base_transform = knob_el
            .as_ref()
            .and_then(|el| el.get_attribute("transform"))
            .unwrap_or_default();
        Ok(Self {
            knob_el,
            text_el,
            base_transform,
            knob_x: skin.knob_x,
            knob_y: skin.knob_y,
        })
    }

    /// Rotate the knob element around the skin's center and refresh the
    /// value label.
    pub fn render(&self, angle: f32, label: &str) {
        if let Some(el) = &self.knob_el {
            let transform = format!(
                "{} rotate({:.2}, {}, {})",
                self.base_transform, angle, self.knob_x, self.knob_y
            );
            _ = el.set_attribute("transform", transform.trim());
        }
        if let Some(el) = &self.text_el {
            el.set_text_content(Some(label));
        }
    }
}
