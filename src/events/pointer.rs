use crate::core::KnobController;
use crate::field::ValueField;
use crate::render::KnobView;
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a handler needs, cloned into each closure.
#[derive(Clone)]
pub struct KnobWiring {
    pub container: web::HtmlElement,
    pub controller: Rc<RefCell<KnobController>>,
    pub view: Rc<KnobView>,
    pub field: Rc<ValueField>,
    pub format: Rc<dyn Fn(f32) -> String>,
    pub on_change: Rc<dyn Fn(f32)>,
}

pub fn wire_pointer_handlers(w: KnobWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

/// Republish the controller's state to the rendering collaborators.
pub(crate) fn redraw(w: &KnobWiring) {
    let (angle, value, snap, precise, unlock) = {
        let c = w.controller.borrow();
        (
            c.angle(),
            c.value(),
            c.snapshot(),
            c.precise_mode(),
            c.unlock_distance(),
        )
    };
    w.view.render(angle, &(w.format)(value));
    w.field.show(value);
    if snap.dragging && precise {
        if let Some(document) = dom::window_document() {
            overlay::update(&document, dom::client_center(&w.container), unlock, &snap);
        }
    }
}

fn wire_pointerdown(w: &KnobWiring) {
    let w = w.clone();
    let container = w.container.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Center comes from the bounding box at gesture start, so layout
        // changes between gestures are picked up.
        let center = dom::client_center(&w.container);
        let pointer = dom::pointer_client_pos(&ev);
        w.controller.borrow_mut().pointer_down(center, pointer);
        log::info!(
            "[knob] begin drag at ({:.0}, {:.0}), center ({:.0}, {:.0})",
            pointer.x,
            pointer.y,
            center.x,
            center.y
        );
        _ = w.container.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        redraw(&w);
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &KnobWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let emitted = {
            let mut c = w.controller.borrow_mut();
            if !c.snapshot().dragging {
                // Stray move with no gesture in flight
                return;
            }
            c.pointer_move(dom::pointer_client_pos(&ev))
        };
        if let Some(value) = emitted {
            (w.on_change)(value);
        }
        redraw(&w);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &KnobWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let was_dragging = w.controller.borrow_mut().pointer_up();
        if !was_dragging {
            return;
        }
        if let Some(document) = dom::window_document() {
            overlay::hide(&document);
        }
        // Hand keyboard focus to the companion input for arrow-key editing
        w.field.focus();
        redraw(&w);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
