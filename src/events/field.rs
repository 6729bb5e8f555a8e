use super::pointer::{redraw, KnobWiring};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Typed input goes straight to the value store; precision-lock semantics
/// never apply to the companion field.
pub fn wire_field_change(w: KnobWiring) {
    let input = w.field.element().clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let typed = w.field.element().value_as_number();
        if !typed.is_finite() {
            // Mid-edit text like "-" or an empty field
            return;
        }
        let value = w.controller.borrow_mut().set_value(typed as f32);
        (w.on_change)(value);
        redraw(&w);
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
