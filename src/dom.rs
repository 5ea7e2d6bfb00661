use crate::constants::MAX_PIXEL_RATIO;
use crate::core::ContextKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times the (capped) DPR.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// `navigator.gpu` is present.
pub fn has_webgpu() -> bool {
    web::window()
        .map(|w| {
            let nav = w.navigator();
            js_sys::Reflect::get(&nav, &"gpu".into())
                .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Try to open `kind` on a throwaway canvas so the real canvas stays unclaimed.
pub fn try_context(document: &web::Document, kind: ContextKind) -> bool {
    let Ok(el) = document.create_element("canvas") else {
        return false;
    };
    let Ok(scratch) = el.dyn_into::<web::HtmlCanvasElement>() else {
        return false;
    };
    match scratch.get_context(kind.context_id()) {
        Ok(Some(ctx)) => {
            lose_context(&ctx);
            true
        }
        Ok(None) => false,
        Err(e) => {
            log::warn!("[gpu] {} context request threw: {:?}", kind.context_id(), e);
            false
        }
    }
}

/// Free a WebGL context through `WEBGL_lose_context` instead of waiting for GC;
/// browsers cap the number of live contexts per page.
fn lose_context(ctx: &js_sys::Object) {
    let Ok(get_extension) = js_sys::Reflect::get(ctx, &"getExtension".into()) else {
        return;
    };
    let Some(get_extension) = get_extension.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let Ok(ext) = get_extension.call1(ctx, &"WEBGL_lose_context".into()) else {
        return;
    };
    if ext.is_null() || ext.is_undefined() {
        return;
    }
    if let Ok(lose) = js_sys::Reflect::get(&ext, &"loseContext".into()) {
        if let Some(lose) = lose.dyn_ref::<js_sys::Function>() {
            _ = lose.call0(&ext);
        }
    }
}

/// A canvas that already holds a GPU context cannot hand out a 2D one, so
/// swap in a fresh clone (same id, classes and style) in its place.
pub fn replace_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let fresh = canvas
        .clone_node()
        .map_err(|e| anyhow::anyhow!("clone canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("cloned node is not a canvas: {:?}", e))?;
    if canvas.parent_node().is_some() {
        canvas
            .replace_with_with_node_1(&fresh)
            .map_err(|e| anyhow::anyhow!("replace canvas: {:?}", e))?;
    }
    sync_canvas_backing_size(&fresh);
    Ok(fresh)
}

/// Event listener that detaches itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("add {} listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
