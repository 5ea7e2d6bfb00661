use crate::constants::{FALLBACK_BACKGROUND, FALLBACK_TRAIL_FILL};
use crate::core::fallback::FallbackSim;
use crate::core::{FrameUniforms, Rgb};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D renderer driving [`FallbackSim`].
pub struct FallbackRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sim: FallbackSim,
}

impl FallbackRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, particles: usize) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        let sim = FallbackSim::new(
            particles,
            canvas.width() as f32,
            canvas.height() as f32,
            &mut rand::thread_rng(),
        );
        ctx.set_fill_style_str(FALLBACK_BACKGROUND);
        ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        log::info!("[fallback] {} particles", particles);
        Ok(Self { canvas, ctx, sim })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn trigger(&mut self, pulse: f32) {
        self.sim.trigger(pulse);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let (w, h) = (width as f32, height as f32);
        if width > 0 && height > 0 && (w, h) != self.sim.size() {
            self.sim.resize(w, h);
        }
    }

    pub fn draw(&mut self, dt_sec: f32, frame: &FrameUniforms) {
        let tension = frame.tension;
        self.sim.step(dt_sec, tension);

        let (w, h) = self.sim.size();
        self.ctx.set_fill_style_str(FALLBACK_TRAIL_FILL);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        let color = Rgb(frame.color);
        for f in &self.sim.flakes {
            self.ctx
                .set_fill_style_str(&color.css_rgba(f.draw_alpha(tension)));
            self.ctx.begin_path();
            _ = self.ctx.arc(
                f.pos.x as f64,
                f.pos.y as f64,
                f.draw_radius(tension) as f64,
                0.0,
                TAU,
            );
            self.ctx.fill();
        }
    }
}
