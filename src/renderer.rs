//! Canvas 2D rendering
//!
//! One full repaint per executed tick: black background, fading intro
//! caption, then a stroked circle per bubble in store order.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::hsv_to_rgb;
use crate::consts::*;
use crate::sim::SimState;

const INTRO_LINE_1: &str = "Welcome to bubble fun!";
const INTRO_LINE_2: &str = "Tap around to make bubbles :)";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Resync the backing store to the viewport. Assigning canvas dimensions
    /// also blanks the surface, which the full repaint tolerates.
    pub fn resize(&self, width: u32, height: u32) {
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
    }

    /// Repaint the frame. Mutable access is only for burning the intro
    /// counter; the bubble store is read untouched.
    pub fn render(&self, state: &mut SimState) {
        let width = state.viewport.x as f64;
        let height = state.viewport.y as f64;

        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, width, height);

        if let Some(alpha) = state.intro_alpha() {
            self.draw_intro(width, height, alpha);
            state.advance_intro();
        }

        self.ctx.set_line_width(CIRCLE_WIDTH);
        for bubble in &state.bubbles {
            let color = hsv_to_rgb(bubble.hue, 1.0, 1.0);
            let alpha = bubble.fade_alpha();
            let style = if alpha < 1.0 {
                color.to_css_alpha(alpha)
            } else {
                color.to_css()
            };

            self.ctx.set_stroke_style_str(&style);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                bubble.pos.x as f64,
                bubble.pos.y as f64,
                bubble.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.stroke();
        }
    }

    fn draw_intro(&self, width: f64, height: f64, alpha: f32) {
        // Scale with the viewport but never above the cap
        let font_px = (width / 16.0).min(INTRO_FONT_MAX);

        self.ctx.set_font(&format!("{font_px:.0}px sans-serif"));
        self.ctx.set_text_align("center");
        self.ctx
            .set_fill_style_str(&format!("rgba(255, 255, 255, {alpha})"));

        let _ = self.ctx.fill_text(INTRO_LINE_1, width / 2.0, height / 2.0);
        let _ = self
            .ctx
            .fill_text(INTRO_LINE_2, width / 2.0, height / 2.0 + font_px * 1.4);
    }
}
