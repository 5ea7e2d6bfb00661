use super::color::Rgb;
use super::constants::*;
use super::shapes::Shape;

/// Per-view settings, read once at mount time.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub particle_count: usize,
    pub trail_length: usize,
    pub fallback_particles: usize,
    pub shape: Shape,
    pub color: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            trail_length: DEFAULT_TRAIL_LENGTH,
            fallback_particles: DEFAULT_FALLBACK_PARTICLES,
            shape: Shape::Heart,
            color: "#00ffff".to_string(),
        }
    }
}

impl ViewConfig {
    /// Build from `data-*` style attributes. `attr` returns the raw value for
    /// a name such as `"particles"`; missing or invalid values keep defaults.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = ViewConfig::default();
        if let Some(n) = parse_count(attr("particles"), 1, MAX_PARTICLE_COUNT) {
            cfg.particle_count = n;
        }
        if let Some(n) = parse_count(attr("trail"), 1, MAX_TRAIL_LENGTH) {
            cfg.trail_length = n;
        }
        if let Some(n) = parse_count(attr("fallback-particles"), 1, MAX_FALLBACK_PARTICLES) {
            cfg.fallback_particles = n;
        }
        if let Some(name) = attr("shape") {
            cfg.shape = Shape::from_name(&name);
        }
        if let Some(hex) = attr("color") {
            match Rgb::from_hex(&hex) {
                Ok(_) => cfg.color = hex.trim().to_string(),
                Err(e) => log::warn!("[config] ignoring color: {}", e),
            }
        }
        cfg
    }

    /// Vertices uploaded per shape generation.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.particle_count * self.trail_length
    }
}

fn parse_count(raw: Option<String>, min: usize, max: usize) -> Option<usize> {
    let raw = raw?;
    match raw.trim().parse::<usize>() {
        Ok(n) => Some(n.clamp(min, max)),
        Err(_) => {
            log::warn!("[config] ignoring non-numeric value `{}`", raw);
            None
        }
    }
}
