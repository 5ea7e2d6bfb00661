#![cfg(target_arch = "wasm32")]
use crate::core::{
    landmarks_from_flat, tension_from_landmarks, Capability, RenderMode, Rgb, Shape, ViewConfig,
};
use crate::frame::{FrameContext, RafLoop, Renderer};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod fallback;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("zen-particles starting");
    Ok(())
}

/// Handle to a mounted particle view.
///
/// The host pushes hand readings, shape and color changes into it; the view
/// renders on its own animation-frame loop until `destroy` is called.
#[wasm_bindgen]
pub struct ParticleView {
    ctx: Rc<RefCell<FrameContext>>,
    render_loop: Option<RafLoop>,
    gesture_loop: Option<RafLoop>,
    listeners: Vec<dom::EventListener>,
}

#[wasm_bindgen]
impl ParticleView {
    /// Mount on the `<canvas>` with id `canvas_id` and start rendering.
    pub async fn mount(canvas_id: String) -> Result<ParticleView, JsValue> {
        mount(&canvas_id)
            .await
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    pub fn set_shape(&self, name: &str) {
        let shape = Shape::from_name(name);
        self.ctx.borrow_mut().set_shape(shape);
    }

    pub fn shape(&self) -> String {
        self.ctx.borrow().shape.name().to_string()
    }

    pub fn set_color(&self, hex: &str) -> Result<(), JsValue> {
        self.ctx.borrow_mut().set_color(hex).map_err(|e| {
            log::warn!("[color] {}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    /// One reading from an external gesture source. When `detected` is false
    /// the last known tension is kept.
    pub fn push_hand(&self, tension: f32, detected: bool) {
        self.ctx.borrow_mut().observe_hand(detected.then_some(tension));
    }

    /// 21 hand landmarks packed as `[x0, y0, z0, x1, ...]`; an empty array
    /// means no hand.
    pub fn push_landmarks(&self, landmarks: &[f32]) {
        let tension = tension_from_landmarks(&landmarks_from_flat(landmarks));
        self.ctx.borrow_mut().observe_hand(tension);
    }

    pub fn trigger_explosion(&self, pulse: f32) {
        self.ctx.borrow_mut().trigger_explosion(pulse);
    }

    /// Poll `detect` once per animation frame. It returns `undefined` while
    /// the video is not ready, `null` (or an empty array) when no hand is in
    /// view, and packed landmarks otherwise.
    pub fn track_hands(&mut self, detect: js_sys::Function) {
        if let Some(old) = self.gesture_loop.take() {
            old.cancel();
        }
        if !self.ctx.borrow().capability.is_live() {
            log::warn!("[gesture] view destroyed; not tracking");
            return;
        }
        let ctx = self.ctx.clone();
        self.gesture_loop = Some(RafLoop::start(move || {
            match detect.call0(&JsValue::NULL) {
                Ok(v) => {
                    if let Some(tension) = read_detection(&v) {
                        ctx.borrow_mut().observe_hand(tension);
                    }
                }
                Err(e) => log::warn!("[gesture] detector threw: {:?}", e),
            }
        }));
    }

    pub fn is_fallback(&self) -> bool {
        self.ctx.borrow().capability.mode() == RenderMode::Fallback
    }

    /// Compatibility notice shown after falling back, if any.
    pub fn notice(&self) -> Option<String> {
        self.ctx.borrow().capability.notice().map(str::to_string)
    }

    /// Stop both loops, detach listeners and release GPU resources.
    pub fn destroy(&mut self) {
        if let Some(l) = self.gesture_loop.take() {
            l.cancel();
        }
        if let Some(l) = self.render_loop.take() {
            l.cancel();
        }
        self.listeners.clear();
        self.ctx.borrow_mut().teardown();
        if let Some(document) = dom::window_document() {
            overlay::hide_notice(&document);
        }
        log::info!("view destroyed");
    }
}

/// `None` = detector not ready; `Some(None)` = no hand; `Some(Some(t))` = hand.
fn read_detection(v: &JsValue) -> Option<Option<f32>> {
    if v.is_undefined() {
        return None;
    }
    let flat: Vec<f32> = if let Some(arr) = v.dyn_ref::<js_sys::Float32Array>() {
        arr.to_vec()
    } else if js_sys::Array::is_array(v) {
        js_sys::Array::from(v)
            .iter()
            .filter_map(|x| x.as_f64())
            .map(|x| x as f32)
            .collect()
    } else {
        Vec::new()
    };
    Some(tension_from_landmarks(&landmarks_from_flat(&flat)))
}

async fn mount(canvas_id: &str) -> anyhow::Result<ParticleView> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = ViewConfig::from_attributes(|name| canvas.get_attribute(&format!("data-{}", name)));
    let color = Rgb::from_hex(&config.color)?;
    log::info!(
        "[mount] #{} particles={} trail={} vertices={} shape={}",
        canvas_id,
        config.particle_count,
        config.trail_length,
        config.vertex_count(),
        config.shape.name()
    );

    dom::sync_canvas_backing_size(&canvas);

    let context_lost = Arc::new(AtomicBool::new(false));
    let mut capability = Capability::default();
    let renderer = match frame::init_renderer(&document, &mut canvas, context_lost.clone()).await {
        Ok(gpu) => Renderer::Gpu(gpu),
        Err(err) => {
            log::warn!("[gpu] {}", err);
            capability.degrade(&err);
            if let Some(notice) = capability.notice() {
                overlay::show_notice(&document, notice);
            }
            // wgpu may have claimed the canvas before failing
            let fresh = dom::replace_canvas(&canvas)?;
            Renderer::Fallback(fallback::FallbackRenderer::new(
                fresh,
                config.fallback_particles,
            )?)
        }
    };
    let gpu_canvas = match &renderer {
        Renderer::Gpu(g) => Some(g.canvas().clone()),
        _ => None,
    };

    let ctx = Rc::new(RefCell::new(FrameContext::new(
        config,
        color,
        renderer,
        capability,
        context_lost.clone(),
    )));
    {
        let mut c = ctx.borrow_mut();
        let shape = c.shape;
        c.set_shape(shape);
    }

    let mut listeners = Vec::new();
    if let Some(window) = web::window() {
        let pending = ctx.borrow().resize_pending.clone();
        listeners.extend(dom::EventListener::new(&window, "resize", move |_| {
            pending.set(true)
        }));
    }
    if let Some(gpu_canvas) = &gpu_canvas {
        let lost = context_lost.clone();
        listeners.extend(dom::EventListener::new(gpu_canvas, "webglcontextlost", move |_| {
            lost.store(true, Ordering::SeqCst)
        }));
    }
    listeners.extend(events::keyboard::wire_global_keydown(ctx.clone()));

    let ctx_tick = ctx.clone();
    let render_loop = RafLoop::start(move || ctx_tick.borrow_mut().frame());

    Ok(ParticleView {
        ctx,
        render_loop: Some(render_loop),
        gesture_loop: None,
        listeners,
    })
}
