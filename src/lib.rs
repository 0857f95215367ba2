#![cfg(target_arch = "wasm32")]
use instant::Instant;
use picker_core::{PickerConfig, PickerController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod haptics;
mod input;
mod overlay;
mod render;

use constants::{CANVAS_ID, DEFAULT_PRESET, PRESET_ATTRIBUTE};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("picker-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let preset = canvas
        .get_attribute(PRESET_ATTRIBUTE)
        .unwrap_or_else(|| DEFAULT_PRESET.to_string());
    let config = PickerConfig::preset(&preset)?;
    log::info!(
        "[picker] preset {} ({}..={} step {})",
        preset,
        config.domain.min(),
        config.domain.max(),
        config.domain.step()
    );

    let readout = overlay::Readout::new(
        document.clone(),
        &config.unit_label,
        config.domain.decimal_places(),
    );
    readout.show(config.initial_value);
    let picker = Rc::new(RefCell::new(PickerController::new(
        config,
        readout,
        haptics::VibrateHaptics::from_window(&window),
    )?));

    let dpr = Rc::new(RefCell::new(1.0));
    frame::wire_canvas_resize(&canvas, dpr.clone());
    overlay::build_quick_buttons(&document, &picker);
    events::wire_keydown(picker.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        picker: picker.clone(),
        tracker: Rc::new(RefCell::new(input::PointerTracker::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        picker,
        ruler: render::Ruler::new(&canvas)?,
        dpr,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
