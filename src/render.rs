//! 2D canvas drawing of the ruler or dial around its indicator.

use crate::constants::*;
use picker_core::{format_value, visible_ticks, Mark, Orientation, PickerController, Tick};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Ruler {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
}

impl Ruler {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            canvas: canvas.clone(),
        })
    }

    pub fn draw(&self, picker: &PickerController, dpr: f64) {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64 / dpr;
        let h = self.canvas.height() as f64 / dpr;
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, w, h);

        let config = picker.config();
        let places = config.domain.decimal_places();
        let offset = picker.display_offset();
        match config.orientation {
            Orientation::Vertical | Orientation::Horizontal => {
                let vertical = config.orientation == Orientation::Vertical;
                let ticks = visible_ticks(offset, config.unit_extent, &config.domain, VISIBLE_RADIUS_ITEMS);
                for tick in &ticks {
                    self.draw_straight_tick(tick, vertical, w, h, places);
                }
                self.draw_straight_indicator(vertical, w, h);
            }
            Orientation::Dial { .. } => {
                let radius_items = DIAL_VISIBLE_DEGREES / config.unit_extent;
                let ticks = visible_ticks(offset, config.unit_extent, &config.domain, radius_items);
                let radius = w.min(h) * DIAL_RADIUS_FRACTION;
                let (cx, cy) = (w * 0.5, h * 0.5 + radius * 0.5);
                for tick in &ticks {
                    self.draw_dial_tick(tick, cx, cy, radius, places);
                }
                self.draw_dial_indicator(cx, cy, radius);
            }
        }
        ctx.set_global_alpha(1.0);
    }

    // Ticks hang off the left (vertical) or top (horizontal) edge; falloff
    // shift pulls distant ones back towards that edge.
    fn draw_straight_tick(&self, tick: &Tick, vertical: bool, w: f64, h: f64, places: u32) {
        let ctx = &self.ctx;
        let len = tick_length(tick.mark) * tick.scale;
        let base = 0.3 * if vertical { w } else { h } + tick.shift;
        ctx.set_global_alpha(tick.opacity);
        ctx.set_stroke_style_str(TICK_COLOR);
        ctx.set_line_width(TICK_WIDTH * tick.scale);
        ctx.begin_path();
        if vertical {
            let y = h * 0.5 + tick.position;
            ctx.move_to(base, y);
            ctx.line_to(base + len, y);
        } else {
            let x = w * 0.5 + tick.position;
            ctx.move_to(x, base);
            ctx.line_to(x, base + len);
        }
        ctx.stroke();

        if tick.mark.is_labelled() {
            ctx.set_fill_style_str(TICK_COLOR);
            ctx.set_font(LABEL_FONT);
            let text = format_value(tick.value, places);
            if vertical {
                ctx.set_text_align("left");
                ctx.set_text_baseline("middle");
                _ = ctx.fill_text(&text, base + len + LABEL_GAP, h * 0.5 + tick.position);
            } else {
                ctx.set_text_align("center");
                ctx.set_text_baseline("top");
                _ = ctx.fill_text(&text, w * 0.5 + tick.position, base + len + LABEL_GAP);
            }
        }
    }

    fn draw_straight_indicator(&self, vertical: bool, w: f64, h: f64) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style_str(INDICATOR_COLOR);
        ctx.set_line_width(TICK_WIDTH * 1.5);
        ctx.begin_path();
        if vertical {
            ctx.move_to(0.2 * w, h * 0.5);
            ctx.line_to(0.3 * w + TICK_LEN_MAJOR * 1.4, h * 0.5);
        } else {
            ctx.move_to(w * 0.5, 0.2 * h);
            ctx.line_to(w * 0.5, 0.3 * h + TICK_LEN_MAJOR * 1.4);
        }
        ctx.stroke();
    }

    // Position is in degrees; 0 sits at twelve o'clock.
    fn draw_dial_tick(&self, tick: &Tick, cx: f64, cy: f64, radius: f64, places: u32) {
        let ctx = &self.ctx;
        let len = tick_length(tick.mark) * tick.scale;
        let angle = tick.position.to_radians();
        let (sin, cos) = angle.sin_cos();
        let (outer_x, outer_y) = (cx + radius * sin, cy - radius * cos);
        let inner = radius - len;
        ctx.set_global_alpha(tick.opacity);
        ctx.set_stroke_style_str(TICK_COLOR);
        ctx.set_line_width(TICK_WIDTH * tick.scale);
        ctx.begin_path();
        ctx.move_to(outer_x, outer_y);
        ctx.line_to(cx + inner * sin, cy - inner * cos);
        ctx.stroke();

        if tick.mark.is_labelled() {
            let r = inner - LABEL_GAP;
            ctx.set_fill_style_str(TICK_COLOR);
            ctx.set_font(LABEL_FONT);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            _ = ctx.fill_text(&format_value(tick.value, places), cx + r * sin, cy - r * cos);
        }
    }

    fn draw_dial_indicator(&self, cx: f64, cy: f64, radius: f64) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style_str(INDICATOR_COLOR);
        ctx.set_line_width(TICK_WIDTH * 1.5);
        ctx.begin_path();
        ctx.move_to(cx, cy - radius - LABEL_GAP);
        ctx.line_to(cx, cy - radius + TICK_LEN_MAJOR * 1.2);
        ctx.stroke();
    }
}

#[inline]
fn tick_length(mark: Mark) -> f64 {
    match mark {
        Mark::Major => TICK_LEN_MAJOR,
        Mark::Medium => TICK_LEN_MEDIUM,
        Mark::Minor => TICK_LEN_MINOR,
    }
}
