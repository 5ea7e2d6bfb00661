use crate::core::{
    acquire_context, backend_order, AnimationState, Capability, ClapDetector, HandSignal,
    ParticleBuffer, RenderError, Rgb, Shape, ViewConfig,
};
use crate::{dom, fallback, overlay, render};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub enum Renderer {
    Gpu(render::GpuState),
    Fallback(fallback::FallbackRenderer),
    // Transient while swapping renderers, or after teardown
    Detached,
}

pub struct FrameContext {
    pub config: ViewConfig,
    pub state: AnimationState,
    pub capability: Capability,
    pub renderer: Renderer,
    pub shape: Shape,
    pub color_hex: String,
    pub hand: HandSignal,
    pub clap: ClapDetector,
    hand_visible: bool,
    // Set by the window resize listener, consumed by the next frame
    pub resize_pending: Rc<Cell<bool>>,
    // Set by the device-lost callback or a `webglcontextlost` event
    pub context_lost: Arc<AtomicBool>,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        config: ViewConfig,
        color: Rgb,
        renderer: Renderer,
        capability: Capability,
        context_lost: Arc<AtomicBool>,
    ) -> Self {
        Self {
            shape: config.shape,
            color_hex: config.color.clone(),
            state: AnimationState::new(color),
            config,
            capability,
            renderer,
            hand: HandSignal::default(),
            clap: ClapDetector::default(),
            hand_visible: false,
            resize_pending: Rc::new(Cell::new(true)),
            context_lost,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.state.tick(dt_sec);

        if self.context_lost.swap(false, Ordering::SeqCst) {
            self.degrade(RenderError::ContextLost("context lost event".to_string()));
        }
        if self.resize_pending.replace(false) {
            self.resize();
        }

        let uniforms = self.state.uniforms();
        let mut failure = None;
        match &mut self.renderer {
            Renderer::Gpu(g) if self.capability.allows_gpu_draw() => match g.render(&uniforms) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::OutOfMemory)) => {
                    failure = Some(RenderError::ContextLost(format!("{:?}", e)));
                }
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            },
            Renderer::Fallback(f) => f.draw(dt_sec, &uniforms),
            _ => {}
        }
        if let Some(err) = failure {
            self.degrade(err);
        }
    }

    fn resize(&mut self) {
        match &mut self.renderer {
            Renderer::Gpu(g) => {
                dom::sync_canvas_backing_size(g.canvas());
                let (w, h) = (g.canvas().width(), g.canvas().height());
                g.resize_if_needed(w, h);
            }
            Renderer::Fallback(f) => {
                dom::sync_canvas_backing_size(f.canvas());
                let (w, h) = (f.canvas().width(), f.canvas().height());
                f.resize_if_needed(w, h);
            }
            Renderer::Detached => {}
        }
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        if let Renderer::Gpu(g) = &mut self.renderer {
            let particles = ParticleBuffer::build(
                shape,
                self.config.particle_count,
                self.config.trail_length,
                &mut rand::thread_rng(),
            );
            g.rebuild(&particles);
        }
    }

    pub fn set_color(&mut self, hex: &str) -> Result<(), crate::core::ColorError> {
        let color = Rgb::from_hex(hex)?;
        self.state.set_color(color);
        self.color_hex = hex.trim().to_string();
        Ok(())
    }

    pub fn trigger_explosion(&mut self, pulse: f32) {
        self.state.trigger_explosion(pulse);
        if let Renderer::Fallback(f) = &mut self.renderer {
            f.trigger(pulse);
        }
    }

    /// Feed one gesture reading; `None` means no hand in view.
    pub fn observe_hand(&mut self, tension: Option<f32>) {
        let reading = self.hand.observe(tension);
        if reading.detected != self.hand_visible {
            self.hand_visible = reading.detected;
            log::info!(
                "[gesture] hand {}",
                if reading.detected { "detected" } else { "lost" }
            );
        }
        self.state.set_raw_tension(reading.tension);
        if let Some(pulse) = self.clap.observe(reading.tension) {
            log::info!("[gesture] clap");
            self.trigger_explosion(pulse);
        }
    }

    /// Switch to the 2D fallback. Happens at most once per view.
    pub fn degrade(&mut self, err: RenderError) {
        if !self.capability.degrade(&err) {
            return;
        }
        log::warn!("[fallback] {}", err);
        if let Some(document) = dom::window_document() {
            if let Some(notice) = self.capability.notice() {
                overlay::show_notice(&document, notice);
            }
        }
        let canvas = match std::mem::replace(&mut self.renderer, Renderer::Detached) {
            Renderer::Gpu(g) => {
                let canvas = g.canvas().clone();
                g.release();
                match dom::replace_canvas(&canvas) {
                    Ok(fresh) => fresh,
                    Err(e) => {
                        log::error!("[fallback] {:?}", e);
                        return;
                    }
                }
            }
            Renderer::Fallback(f) => {
                self.renderer = Renderer::Fallback(f);
                return;
            }
            Renderer::Detached => return,
        };
        match fallback::FallbackRenderer::new(canvas, self.config.fallback_particles) {
            Ok(f) => self.renderer = Renderer::Fallback(f),
            Err(e) => log::error!("[fallback] {:?}", e),
        }
    }

    pub fn teardown(&mut self) {
        self.capability.detach();
        if let Renderer::Gpu(g) = std::mem::replace(&mut self.renderer, Renderer::Detached) {
            g.release();
        }
    }
}

/// GPU renderer for `canvas`, trying each backend of [`backend_order`] in turn.
///
/// A failed attempt may already have claimed the canvas, so every retry runs
/// on a fresh replacement. `canvas` always ends up holding the element that is
/// currently in the document.
pub async fn init_renderer(
    document: &web::Document,
    canvas: &mut web::HtmlCanvasElement,
    context_lost: Arc<AtomicBool>,
) -> Result<render::GpuState, RenderError> {
    let kind = acquire_context(|kind| dom::try_context(document, kind))?;
    log::info!("[gpu] context ladder picked {}", kind.context_id());
    let mut last = RenderError::GpuInit(format!("{} cannot drive wgpu", kind.context_id()));
    for (attempt, backend) in backend_order(dom::has_webgpu(), kind)
        .into_iter()
        .enumerate()
    {
        if attempt > 0 {
            *canvas = dom::replace_canvas(canvas)
                .map_err(|e| RenderError::GpuInit(format!("{:#}", e)))?;
        }
        match render::GpuState::new(canvas.clone(), backend, context_lost.clone()).await {
            Ok(gpu) => return Ok(gpu),
            Err(err) => {
                log::warn!("[gpu] {:?} backend failed: {}", backend, err);
                last = err;
            }
        }
    }
    Err(last)
}

struct LoopInner {
    alive: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// A requestAnimationFrame loop that can be cancelled; once cancelled the
/// step callback never runs again.
pub struct RafLoop {
    inner: Rc<LoopInner>,
}

impl RafLoop {
    pub fn start(mut step: impl FnMut() + 'static) -> RafLoop {
        let inner = Rc::new(LoopInner {
            alive: Cell::new(true),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.alive.get() {
                return;
            }
            step();
            if inner.alive.get() {
                schedule(&inner);
            }
        }) as Box<dyn FnMut()>));
        schedule(&inner);
        RafLoop { inner }
    }

    pub fn cancel(&self) {
        self.inner.alive.set(false);
        if let Some(id) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.inner.tick.borrow_mut().take();
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(inner: &LoopInner) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = inner.tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => inner.handle.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame: {:?}", e),
        }
    }
}
