// Host-side tests for context acquisition and the GPU -> 2D fallback switch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod capability {
    include!("../src/core/capability.rs");
}

use capability::*;

#[test]
fn ladder_tries_webgl2_first() {
    let ids: Vec<&str> = ContextKind::LADDER.iter().map(|k| k.context_id()).collect();
    assert_eq!(ids, ["webgl2", "webgl", "experimental-webgl"]);
}

#[test]
fn first_accepted_context_wins_and_stops_the_walk() {
    let mut tried = Vec::new();
    let got = acquire_context(|k| {
        tried.push(k);
        k == ContextKind::WebGl
    });
    assert_eq!(got, Ok(ContextKind::WebGl));
    assert_eq!(tried, [ContextKind::WebGl2, ContextKind::WebGl]);
}

#[test]
fn all_contexts_failing_selects_fallback_with_no_gpu_draw() {
    let mut tried = 0;
    let got = acquire_context(|_| {
        tried += 1;
        false
    });
    assert_eq!(tried, 3);
    let err = got.err().unwrap_or(RenderError::GpuInit("unexpected".into()));
    assert_eq!(err, RenderError::NoContext);

    let mut cap = Capability::default();
    assert!(cap.allows_gpu_draw());
    assert!(cap.degrade(&err));
    assert_eq!(cap.mode(), RenderMode::Fallback);
    assert!(!cap.allows_gpu_draw());
    assert!(cap.notice().is_some_and(|n| n.contains("2D")));
}

#[test]
fn degrade_is_one_way_and_reports_only_the_first_switch() {
    let mut cap = Capability::default();
    assert_eq!(cap.notice(), None);
    assert!(cap.degrade(&RenderError::ContextLost("device lost".into())));
    let first = cap.notice().map(str::to_string);
    assert!(first.as_deref().is_some_and(|n| n.contains("lost")));

    assert!(!cap.degrade(&RenderError::NoContext));
    assert!(!cap.degrade(&RenderError::GpuInit("adapter".into())));
    assert_eq!(cap.mode(), RenderMode::Fallback);
    assert_eq!(cap.notice().map(str::to_string), first);
}

#[test]
fn webgpu_is_tried_before_gl_when_webgl2_is_available() {
    assert_eq!(
        backend_order(true, ContextKind::WebGl2),
        [GpuBackend::WebGpu, GpuBackend::Gl]
    );
    assert_eq!(backend_order(false, ContextKind::WebGl2), [GpuBackend::Gl]);
}

#[test]
fn gl_is_skipped_below_webgl2() {
    assert_eq!(backend_order(true, ContextKind::WebGl), [GpuBackend::WebGpu]);
    assert!(backend_order(false, ContextKind::WebGl).is_empty());
    assert!(backend_order(false, ContextKind::ExperimentalWebGl).is_empty());
}

#[test]
fn failed_webgpu_adapter_still_reaches_gl() {
    // Walk the plan the way the renderer does; only GL comes up
    let kind = acquire_context(|k| k == ContextKind::WebGl2).unwrap_or(ContextKind::WebGl);
    let mut tried = Vec::new();
    let chosen = backend_order(true, kind).into_iter().find(|&b| {
        tried.push(b);
        b == GpuBackend::Gl
    });
    assert_eq!(chosen, Some(GpuBackend::Gl));
    assert_eq!(tried, [GpuBackend::WebGpu, GpuBackend::Gl]);
}

#[test]
fn detached_view_never_degrades_or_draws() {
    let mut cap = Capability::default();
    assert!(cap.is_live());
    cap.detach();
    assert!(!cap.is_live());
    assert_eq!(cap.mode(), RenderMode::Detached);
    assert!(!cap.allows_gpu_draw());
    assert!(!cap.degrade(&RenderError::ContextLost("late event".into())));
    assert_eq!(cap.notice(), None);

    let mut fallen = Capability::default();
    fallen.degrade(&RenderError::NoContext);
    fallen.detach();
    assert!(!fallen.is_live());
    assert!(fallen.notice().is_some());
}

#[test]
fn errors_describe_themselves() {
    assert!(RenderError::NoContext.to_string().contains("webgl2"));
    assert!(RenderError::GpuInit("no adapter".into())
        .to_string()
        .contains("no adapter"));
}
