use super::keys::{action_for_key, KeyAction};
use picker_core::{PickerConfig, PickerController, PickerEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Translates a key action into the event the controller understands.
/// Quick slots past the configured list map to nothing.
pub fn event_for_action(action: KeyAction, config: &PickerConfig) -> Option<PickerEvent> {
    let domain = &config.domain;
    match action {
        KeyAction::Steps(n) => Some(PickerEvent::Nudge(n * domain.step())),
        KeyAction::ToMin => Some(PickerEvent::Select(domain.min())),
        KeyAction::ToMax => Some(PickerEvent::Select(domain.max())),
        KeyAction::Quick(slot) => config.quick_values.get(slot).copied().map(PickerEvent::Select),
    }
}

pub fn handle_keydown(ev: &web::KeyboardEvent, picker: &Rc<RefCell<PickerController>>) {
    let key = ev.key();
    let Some(action) = action_for_key(&key, ev.shift_key()) else {
        return;
    };
    let mut picker = picker.borrow_mut();
    let Some(event) = event_for_action(action, picker.config()) else {
        return;
    };
    log::debug!("[keys] {} -> {:?}", key, event);
    picker.handle(event);
    ev.prevent_default();
}

pub fn wire_keydown(picker: Rc<RefCell<PickerController>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keydown(&ev, &picker);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
