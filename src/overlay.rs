use crate::constants::{IMPERIAL_ID, QUICK_STEPS_ID, QUICK_VALUES_ID, VALUE_ID};
use crate::dom;
use picker_core::{format_feet_inches, format_value, Commit, PickerController, ValueListener, ValueLabel};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keeps the value readout in step with every commit.
pub struct Readout {
    document: web::Document,
    unit: String,
    decimal_places: u32,
}

impl Readout {
    pub fn new(document: web::Document, unit: &str, decimal_places: u32) -> Self {
        Self {
            document,
            unit: unit.to_string(),
            decimal_places,
        }
    }

    pub fn show(&self, value: f64) {
        let label = ValueLabel {
            value,
            decimal_places: self.decimal_places,
            unit: &self.unit,
        };
        dom::set_text(&self.document, VALUE_ID, &label.to_string());
        if self.unit == "cm" {
            dom::set_text(&self.document, IMPERIAL_ID, &format_feet_inches(value));
        }
    }
}

impl ValueListener for Readout {
    fn on_commit(&mut self, commit: &Commit) {
        log::debug!("[picker] commit {:?} {}", commit.kind, commit.value);
        self.show(commit.value);
    }
}

/// Fills the quick-adjust and quick-select containers with one button per
/// configured entry.
pub fn build_quick_buttons(document: &web::Document, picker: &Rc<RefCell<PickerController>>) {
    let (steps, values, places) = {
        let p = picker.borrow();
        let config = p.config();
        (
            config.quick_steps.clone(),
            config.quick_values.clone(),
            config.domain.decimal_places(),
        )
    };

    for delta in steps {
        let text = if delta > 0.0 {
            format!("+{}", format_value(delta, places))
        } else {
            format_value(delta, places)
        };
        let picker = picker.clone();
        append_button(document, QUICK_STEPS_ID, &text, move || {
            picker.borrow_mut().nudge(delta);
        });
    }
    for value in values {
        let picker = picker.clone();
        append_button(document, QUICK_VALUES_ID, &format_value(value, places), move || {
            picker.borrow_mut().select_value(value);
        });
    }
}

fn append_button(
    document: &web::Document,
    container_id: &str,
    text: &str,
    handler: impl FnMut() + 'static,
) {
    let Some(container) = document.get_element_by_id(container_id) else {
        return;
    };
    let Ok(button) = document.create_element("button") else {
        return;
    };
    button.set_text_content(Some(text));
    _ = button.class_list().add_1("quick");
    dom::add_click_listener(&button, handler);
    if let Err(e) = container.append_child(&button) {
        log::warn!("[picker] could not add button {}: {:?}", text, e);
    }
}
