/// Browser-side rendering constants.
///
/// Camera framing, clear colors and DOM ids used by the GPU renderer and the
/// 2D fallback. Animation and geometry tuning lives in `core::constants`.

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Canvas backing store never exceeds this many device pixels per CSS pixel
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// GPU clear color (near-black)
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.025,
    a: 1.0,
};

// Fallback canvas: translucent fill leaves motion trails instead of a hard clear
pub const FALLBACK_TRAIL_FILL: &str = "rgba(0, 0, 0, 0.18)";
pub const FALLBACK_BACKGROUND: &str = "#000000";

// DOM
pub const NOTICE_ELEMENT_ID: &str = "compat-notice";
pub const EXPLOSION_KEY_PULSE: f32 = 1.0;
