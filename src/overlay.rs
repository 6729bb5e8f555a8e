//! Drag visual helpers: a dashed threshold ring, the current drag-distance
//! ring and a marker at the live angle, shown while a precise-mode drag is
//! in flight.

use crate::core::DragSnapshot;
use glam::Vec2;
use web_sys as web;

const OVERLAY_ID: &str = "knob-drag-helpers";

const THRESHOLD_STROKE: &str = "rgba(80, 110, 150, 0.6)";
const DISTANCE_STROKE: &str = "rgba(207, 231, 255, 0.85)";
const MARKER_STROKE: &str = "#cfe7ff";

fn ensure_layer(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(OVERLAY_ID);
    _ = el.set_attribute(
        "style",
        "position:fixed;left:0;top:0;width:100%;height:100%;pointer-events:none;z-index:9999",
    );
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Redraw the helper rings around `center` (client coordinates).
pub fn update(document: &web::Document, center: Vec2, unlock_distance: f32, snap: &DragSnapshot) {
    let Some(layer) = ensure_layer(document) else {
        return;
    };
    // Marker endpoint on the threshold ring: up = 0 degrees, clockwise.
    let rad = snap.value_angle.to_radians();
    let tip = center + Vec2::new(rad.sin(), -rad.cos()) * unlock_distance;
    let marker_width = if snap.drag_distance < unlock_distance {
        1.0
    } else {
        3.0
    };
    let svg = format!(
        concat!(
            r#"<svg width="100%" height="100%">"#,
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{unlock:.1}" fill="none" "#,
            r#"stroke="{threshold}" stroke-dasharray="4 4"/>"#,
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{dist:.1}" fill="none" stroke="{distance}"/>"#,
            r#"<line x1="{cx:.1}" y1="{cy:.1}" x2="{tx:.1}" y2="{ty:.1}" "#,
            r#"stroke="{marker}" stroke-width="{width}"/>"#,
            "</svg>"
        ),
        cx = center.x,
        cy = center.y,
        unlock = unlock_distance,
        dist = snap.drag_distance,
        tx = tip.x,
        ty = tip.y,
        width = marker_width,
        threshold = THRESHOLD_STROKE,
        distance = DISTANCE_STROKE,
        marker = MARKER_STROKE,
    );
    layer.set_inner_html(&svg);
}

/// Remove the helper layer when the gesture ends.
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        el.remove();
    }
}
