use crate::input::PointerTracker;
use glam::DVec2;
use picker_core::PickerController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub picker: Rc<RefCell<PickerController>>,
    pub tracker: Rc<RefCell<PointerTracker>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.tracker.borrow().is_active() || !ev.is_primary() {
            return;
        }
        w.tracker
            .borrow_mut()
            .begin(ev.pointer_id(), client_pos(&ev), ev.time_stamp());
        w.picker.borrow_mut().gesture_start();
        log::debug!("[pointer] down id={}", ev.pointer_id());
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let sample =
            w.tracker
                .borrow_mut()
                .track(ev.pointer_id(), client_pos(&ev), ev.time_stamp());
        if let Some(sample) = sample {
            w.picker.borrow_mut().gesture_move(sample);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let sample = w
            .tracker
            .borrow_mut()
            .end(ev.pointer_id(), client_pos(&ev), ev.time_stamp());
        if let Some(sample) = sample {
            log::debug!(
                "[pointer] up id={} v=({:.3},{:.3})",
                ev.pointer_id(),
                sample.velocity.x,
                sample.velocity.y
            );
            w.picker.borrow_mut().gesture_end(sample);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointercancel(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(sample) = w.tracker.borrow_mut().cancel(ev.pointer_id()) {
            log::debug!("[pointer] cancel id={}", ev.pointer_id());
            w.picker.borrow_mut().gesture_end(sample);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
