//! Randomly placed twinkling stars.
//!
//! Positions are fractions of the drawing area so the same field works
//! for any canvas size.

use rand::RngExt;

#[derive(Debug, Clone)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Twinkle period in ticks.
    pub period: u64,
    pub phase: u64,
}

impl Star {
    pub fn is_bright(&self, tick: u64) -> bool {
        (tick.wrapping_add(self.phase)) % self.period < self.period / 2
    }
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn random(count: usize) -> Self {
        let mut rng = rand::rng();
        let stars = (0..count)
            .map(|_| {
                let period = rng.random_range(40..100);
                Star {
                    x: rng.random_range(0.0..1.0),
                    y: rng.random_range(0.0..1.0),
                    period,
                    phase: rng.random_range(0..period),
                }
            })
            .collect();
        Self { stars }
    }

    #[cfg(test)]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Star coordinates scaled to `width` x `height`, split into bright and dim.
    pub fn points_at(&self, tick: u64, width: f64, height: f64) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let mut bright = Vec::new();
        let mut dim = Vec::new();
        for star in &self.stars {
            let p = (star.x * width, star.y * height);
            if star.is_bright(tick) {
                bright.push(p);
            } else {
                dim.push(p);
            }
        }
        (bright, dim)
    }
}
