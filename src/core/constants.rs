// Shared animation, geometry and gesture tuning constants.

// Particle layout
pub const DEFAULT_PARTICLE_COUNT: usize = 8000;
pub const DEFAULT_TRAIL_LENGTH: usize = 5;
pub const DEFAULT_FALLBACK_PARTICLES: usize = 600;
pub const MAX_PARTICLE_COUNT: usize = 100_000;
pub const MAX_TRAIL_LENGTH: usize = 10;
pub const MAX_FALLBACK_PARTICLES: usize = 5000;

// Random start cloud is a cube of this edge length centred on the origin
pub const START_CLOUD_EXTENT: f32 = 10.0;
// Per-point size scale is drawn from [MIN, MIN + SPAN)
pub const POINT_SCALE_MIN: f32 = 0.5;
pub const POINT_SCALE_SPAN: f32 = 1.0;

// Trail copies lag behind the lead copy by this much per trail step
pub const TRAIL_LAG_STEP: f32 = 0.15;
pub const TRAIL_LAG_WEIGHT: f32 = 0.3;
// The last trail copy keeps (1 - TRAIL_FADE_SPAN) of the lead alpha
pub const TRAIL_FADE_SPAN: f32 = 0.7;

// Per-frame filters
pub const TENSION_SMOOTHING: f32 = 0.1; // smoothed += (target - smoothed) * k
pub const EXPLOSION_DECAY: f32 = 0.92; // energy *= k every frame
pub const EXPLOSION_FLOOR: f32 = 1e-3; // energy below this snaps to zero

// Geometry
pub const SPHERE_RADIUS: f32 = 2.0;
pub const HEART_SCALE: f32 = 2.0;
pub const HEART_JITTER_MIN: f32 = 0.1;
pub const HEART_JITTER_SPAN: f32 = 0.3;
pub const FLOWER_RADIUS: f32 = 2.0;
pub const FLOWER_PETALS: f32 = 8.0;
pub const FLOWER_PETAL_HEIGHT: f32 = 0.3;
pub const FLOWER_CUP_RAMP: f32 = 0.5;
pub const SATURN_RING_SHARE: f32 = 0.4;
pub const SATURN_CORE_RADIUS: f32 = 1.2;
pub const SATURN_RING_INNER: f32 = 1.8;
pub const SATURN_RING_WIDTH: f32 = 0.8;
pub const SATURN_RING_THICKNESS: f32 = 0.1; // total, i.e. +/-0.05
pub const BUDDHA_HEAD_SHARE: f32 = 0.25;
pub const BUDDHA_BODY_SHARE: f32 = 0.5;
pub const FIREWORKS_RADIUS: f32 = 3.0;
pub const FIREWORKS_SHELL_BIAS: f32 = 0.3;

// Gesture
pub const CLAP_LOW: f32 = 0.35; // previous reading must be below this
pub const CLAP_HIGH: f32 = 0.8; // current reading must be above this
pub const CLAP_PULSE: f32 = 1.0;
pub const HAND_LANDMARKS: usize = 21;
pub const WRIST: usize = 0;
pub const MIDDLE_MCP: usize = 9;
pub const FINGERTIPS: [usize; 5] = [4, 8, 12, 16, 20];
