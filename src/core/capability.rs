use thiserror::Error;

/// Canvas context ids tried, in order, before giving up on the GPU path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextKind {
    WebGl2,
    WebGl,
    ExperimentalWebGl,
}

impl ContextKind {
    pub const LADDER: [ContextKind; 3] = [
        ContextKind::WebGl2,
        ContextKind::WebGl,
        ContextKind::ExperimentalWebGl,
    ];

    pub fn context_id(self) -> &'static str {
        match self {
            ContextKind::WebGl2 => "webgl2",
            ContextKind::WebGl => "webgl",
            ContextKind::ExperimentalWebGl => "experimental-webgl",
        }
    }
}

/// wgpu backend family to request an adapter from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpuBackend {
    WebGpu,
    Gl,
}

/// Backends worth trying, in order. WebGPU goes first when the browser exposes
/// it; GL follows only when the ladder found WebGL2, the lowest context wgpu's
/// GL backend can drive. An empty plan means the 2D fallback.
pub fn backend_order(webgpu_available: bool, context: ContextKind) -> Vec<GpuBackend> {
    let mut order = Vec::with_capacity(2);
    if webgpu_available {
        order.push(GpuBackend::WebGpu);
    }
    if context == ContextKind::WebGl2 {
        order.push(GpuBackend::Gl);
    }
    order
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no usable graphics context (tried webgl2, webgl, experimental-webgl)")]
    NoContext,
    #[error("GPU initialisation failed: {0}")]
    GpuInit(String),
    #[error("graphics context lost: {0}")]
    ContextLost(String),
}

/// Walk [`ContextKind::LADDER`]; the first kind `try_kind` accepts wins.
pub fn acquire_context(
    mut try_kind: impl FnMut(ContextKind) -> bool,
) -> Result<ContextKind, RenderError> {
    ContextKind::LADDER
        .into_iter()
        .find(|&kind| try_kind(kind))
        .ok_or(RenderError::NoContext)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Gpu,
    Fallback,
    // Torn down; nothing renders or restarts
    Detached,
}

/// One-way switch from the GPU renderer to the 2D fallback, and from either
/// to detached on teardown.
#[derive(Clone, Debug)]
pub struct Capability {
    mode: RenderMode,
    notice: Option<String>,
}

impl Default for Capability {
    fn default() -> Self {
        Self {
            mode: RenderMode::Gpu,
            notice: None,
        }
    }
}

impl Capability {
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn allows_gpu_draw(&self) -> bool {
        self.mode == RenderMode::Gpu
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Still mounted: neither renderer has been torn down.
    pub fn is_live(&self) -> bool {
        self.mode != RenderMode::Detached
    }

    pub fn detach(&mut self) {
        self.mode = RenderMode::Detached;
    }

    /// Record a capability or resource failure. Returns `true` only for the
    /// call that actually switched modes.
    pub fn degrade(&mut self, err: &RenderError) -> bool {
        if self.mode != RenderMode::Gpu {
            return false;
        }
        self.mode = RenderMode::Fallback;
        self.notice = Some(notice_for(err).to_string());
        true
    }
}

fn notice_for(err: &RenderError) -> &'static str {
    match err {
        RenderError::NoContext | RenderError::GpuInit(_) => {
            "Hardware-accelerated graphics are unavailable. Showing a simplified 2D particle view."
        }
        RenderError::ContextLost(_) => {
            "The graphics context was lost. Continuing with a simplified 2D particle view."
        }
    }
}
