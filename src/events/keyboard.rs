use crate::constants::EXPLOSION_KEY_PULSE;
use crate::core::{action_for_key, next_palette_color, KeyAction};
use crate::dom::EventListener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ctx: &Rc<RefCell<FrameContext>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let mut ctx = ctx.borrow_mut();
    match action {
        KeyAction::SelectShape(shape) => {
            log::info!("[keys] shape={}", shape.name());
            ctx.set_shape(shape);
        }
        KeyAction::CycleColor => {
            let next = next_palette_color(&ctx.color_hex);
            if let Err(e) = ctx.set_color(next) {
                log::warn!("[keys] {}", e);
            }
        }
        KeyAction::Explode => {
            ctx.trigger_explosion(EXPLOSION_KEY_PULSE);
            ev.prevent_default();
        }
    }
}

/// Window keydown shortcuts; dropping the returned listener detaches them.
pub fn wire_global_keydown(ctx: Rc<RefCell<FrameContext>>) -> Option<EventListener> {
    let window = web::window()?;
    EventListener::new(&window, "keydown", move |ev: web::Event| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(kev, &ctx);
        }
    })
}
