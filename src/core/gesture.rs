use super::constants::*;
use glam::Vec3;

/// One reading delivered to the animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandReading {
    pub tension: f32,
    pub detected: bool,
}

/// Fist closure from 21 hand landmarks: 0 = fully open, 1 = closed.
///
/// Fingertip reach is measured from the wrist and normalised by palm length
/// (wrist to middle-finger knuckle). Returns `None` when there are too few
/// points or the palm is degenerate.
pub fn tension_from_landmarks(points: &[Vec3]) -> Option<f32> {
    if points.len() < HAND_LANDMARKS {
        return None;
    }
    let wrist = points[WRIST];
    let palm = points[MIDDLE_MCP].distance(wrist);
    if !palm.is_finite() || palm <= f32::EPSILON {
        return None;
    }
    let reach: f32 = FINGERTIPS
        .iter()
        .map(|&tip| points[tip].distance(wrist))
        .sum::<f32>()
        / FINGERTIPS.len() as f32;
    let openness = ((reach - palm * 0.5) / (palm * 1.5)).clamp(0.0, 1.0);
    let tension = 1.0 - openness;
    tension.is_finite().then_some(tension)
}

/// Landmarks packed as `[x0, y0, z0, x1, ...]`.
pub fn landmarks_from_flat(flat: &[f32]) -> Vec<Vec3> {
    flat.chunks_exact(3).map(Vec3::from_slice).collect()
}

/// Holds the last detected tension so a lost hand does not snap to zero.
#[derive(Clone, Debug, Default)]
pub struct HandSignal {
    last: f32,
}

impl HandSignal {
    pub fn observe(&mut self, tension: Option<f32>) -> HandReading {
        match tension {
            Some(t) if t.is_finite() => {
                self.last = t.clamp(0.0, 1.0);
                HandReading {
                    tension: self.last,
                    detected: true,
                }
            }
            _ => HandReading {
                tension: self.last,
                detected: false,
            },
        }
    }
}

/// Edge trigger for a "clap": open hand snapping shut between readings.
#[derive(Clone, Debug, Default)]
pub struct ClapDetector {
    prev: f32,
}

impl ClapDetector {
    pub fn observe(&mut self, tension: f32) -> Option<f32> {
        let fired = self.prev < CLAP_LOW && tension > CLAP_HIGH;
        self.prev = tension;
        fired.then_some(CLAP_PULSE)
    }
}
