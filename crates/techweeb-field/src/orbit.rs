//! Rotating particle spiral shown behind the intro greetings (stateful).

use rand::Rng;

/// Innermost track radius, just outside the greeting text.
const INNER_RADIUS: f32 = 200.0;

/// Total angular spread of the spiral, in turns.
const SPIRAL_TURNS: f32 = 10.0;

/// One particle on a circular track around the screen center.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitParticle {
    /// Track radius in pixels, fixed at creation.
    pub radius: f32,
    /// Current angle in radians.
    pub angle: f32,
    /// Angular speed seed; the angle advances by `speed / 100` per frame.
    pub speed: f32,
    /// Render diameter in pixels.
    pub size: f32,
    /// Phase offset of the opacity twinkle, in `0.0..1.0`.
    pub twinkle_phase: f32,
    /// Twinkle period in milliseconds.
    pub twinkle_period_ms: u64,
}

/// A spiral of particles slowly rotating around the screen center.
#[derive(Debug)]
pub struct OrbitField {
    particles: Vec<OrbitParticle>,
}

impl OrbitField {
    /// Lay `count` particles along a spiral reaching from [`INNER_RADIUS`]
    /// out past `screen_extent` (the larger of the two screen dimensions).
    pub fn new(count: usize, screen_extent: f32, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|i| {
                let t = i as f32 / count.max(1) as f32;
                OrbitParticle {
                    radius: INNER_RADIUS + t * screen_extent,
                    angle: t * SPIRAL_TURNS * 2.0 * std::f32::consts::PI,
                    speed: 0.2 + rng.gen_range(0.0..0.3),
                    size: 2.0 + rng.gen_range(0.0..2.0),
                    twinkle_phase: rng.gen_range(0.0..1.0),
                    twinkle_period_ms: rng.gen_range(2000..4000),
                }
            })
            .collect();
        Self { particles }
    }

    /// Rotate every particle by one frame.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.angle += particle.speed / 100.0;
        }
    }

    /// Current particle state, for rendering.
    pub fn particles(&self) -> &[OrbitParticle] {
        &self.particles
    }
}

impl OrbitParticle {
    /// Cartesian offset from the screen center, in pixels.
    pub fn offset(&self) -> (f32, f32) {
        (
            self.angle.cos() * self.radius,
            self.angle.sin() * self.radius,
        )
    }

    /// Twinkling opacity between 0.3 and 0.5.
    pub fn opacity(&self, elapsed_ms: u64) -> f32 {
        let phase = elapsed_ms as f32 / self.twinkle_period_ms as f32 + self.twinkle_phase;
        0.4 + 0.1 * (phase * 2.0 * std::f32::consts::PI).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_advance_rotates_on_fixed_tracks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut orbit = OrbitField::new(100, 1920.0, &mut rng);
        let before: Vec<OrbitParticle> = orbit.particles().to_vec();

        orbit.advance();

        for (particle, old) in orbit.particles().iter().zip(before) {
            assert_eq!(particle.radius, old.radius);
            assert!((particle.angle - (old.angle + old.speed / 100.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_radius_ramps_outward() {
        let mut rng = StdRng::seed_from_u64(7);
        let orbit = OrbitField::new(10, 1000.0, &mut rng);
        let radii: Vec<f32> = orbit.particles().iter().map(|p| p.radius).collect();
        assert_eq!(radii[0], INNER_RADIUS);
        assert!(radii.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_opacity_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let orbit = OrbitField::new(10, 1000.0, &mut rng);
        for particle in orbit.particles() {
            for elapsed in (0..8000).step_by(100) {
                let opacity = particle.opacity(elapsed);
                assert!((0.299..=0.501).contains(&opacity));
            }
        }
    }
}
