use crate::constants::*;
use picker_core::{HapticChannel, HapticError, HapticTier};
use wasm_bindgen::JsValue;
use web_sys as web;

/// `navigator.vibrate`, where the browser has it.
pub struct VibrateHaptics {
    navigator: Option<web::Navigator>,
}

impl VibrateHaptics {
    pub fn from_window(window: &web::Window) -> Self {
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
        if !supported {
            log::info!("[haptics] navigator.vibrate unavailable; feedback disabled");
        }
        Self {
            navigator: supported.then_some(navigator),
        }
    }
}

impl HapticChannel for VibrateHaptics {
    fn emit(&mut self, tier: HapticTier) -> Result<(), HapticError> {
        let navigator = self.navigator.as_ref().ok_or(HapticError::Unavailable)?;
        let accepted = match tier {
            HapticTier::Light => navigator.vibrate_with_duration(VIBRATE_LIGHT_MS),
            HapticTier::Medium => navigator.vibrate_with_duration(VIBRATE_MEDIUM_MS),
            HapticTier::Strong => navigator.vibrate_with_duration(VIBRATE_STRONG_MS),
            HapticTier::Success => {
                let pattern: js_sys::Array = VIBRATE_SUCCESS_PATTERN
                    .iter()
                    .map(|ms| JsValue::from(*ms))
                    .collect();
                navigator.vibrate_with_pattern(&pattern)
            }
        };
        if accepted {
            Ok(())
        } else {
            // Browsers refuse vibration before the first user activation.
            Err(HapticError::Rejected(format!("vibrate({:?}) refused", tier)))
        }
    }
}
