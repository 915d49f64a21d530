//! Pointer-repulsion particle field (stateful).

use rand::Rng;
use techweeb_core::{Pointer, Viewport};

use crate::config::{BoundaryPolicy, DepthProfile, FieldConfig};

/// Below this pointer distance the repulsion direction is undefined
/// (the pointer sits on the particle), so repulsion is skipped.
const MIN_REPULSION_DISTANCE: f32 = 1e-4;

/// One simulated point.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Stable identity, unique within a field; render key.
    pub id: u32,
    /// Current position in viewport pixel space.
    pub x: f32,
    pub y: f32,
    /// Rest position pulled toward by fields with a return speed.
    pub home_x: f32,
    pub home_y: f32,
    /// Constant ambient drift, zero when the config has no drift.
    pub vx: f32,
    pub vy: f32,
    /// Render diameter in pixels, fixed at creation.
    pub size: f32,
    /// Render opacity in `0.0..=1.0`, fixed at creation.
    pub opacity: f32,
}

/// A fixed-size set of particles advanced once per animation frame.
#[derive(Debug)]
pub struct Field {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl Field {
    /// Create a field with `config.count` particles placed uniformly at
    /// random across the viewport. Home positions are an independent draw.
    pub fn new(config: FieldConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let particles = (0..config.count)
            .map(|i| {
                let (size, opacity) = match config.depth {
                    DepthProfile::Uniform {
                        size_base,
                        size_span,
                        opacity,
                    } => (size_base + uniform(rng, size_span), opacity),
                    DepthProfile::Layered => layered_depth(i, rng),
                };
                let (vx, vy) = if config.drift_span > 0.0 {
                    (
                        rng.gen_range(-0.5..0.5) * config.drift_span,
                        rng.gen_range(-0.5..0.5) * config.drift_span,
                    )
                } else {
                    (0.0, 0.0)
                };
                Particle {
                    id: i as u32,
                    x: uniform(rng, viewport.width),
                    y: uniform(rng, viewport.height),
                    home_x: uniform(rng, viewport.width),
                    home_y: uniform(rng, viewport.height),
                    vx,
                    vy,
                    size,
                    opacity,
                }
            })
            .collect();

        Self {
            config,
            viewport,
            particles,
        }
    }

    /// Current particle state, for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The configuration this field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Viewport used for boundary enforcement.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize notification; subsequent boundary checks use the new extents.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance every particle by one frame against the given pointer.
    ///
    /// Each particle updates independently: ambient drift, then repulsion
    /// inside the configured radius (force decays linearly to zero at the
    /// radius), otherwise an ease back toward home when the config has a
    /// return speed, then the boundary policy.
    pub fn advance(&mut self, pointer: Pointer) {
        let config = &self.config;
        let viewport = self.viewport;

        for particle in &mut self.particles {
            let mut new_x = particle.x + particle.vx;
            let mut new_y = particle.y + particle.vy;

            // Distance is measured from the pre-drift position.
            let dx = particle.x - pointer.x;
            let dy = particle.y - pointer.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < config.repulsion_radius {
                if distance > MIN_REPULSION_DISTANCE {
                    let force =
                        (1.0 - distance / config.repulsion_radius) * config.repulsion_strength;
                    new_x += dx / distance * force;
                    new_y += dy / distance * force;
                }
            } else if let Some(return_speed) = config.return_speed {
                new_x += (particle.home_x - new_x) * return_speed;
                new_y += (particle.home_y - new_y) * return_speed;
            }

            // A degenerate axis (zero extent) gets no enforcement at all;
            // positions stay finite either way.
            match config.boundary {
                BoundaryPolicy::Wrap => {
                    if viewport.width > 0.0 {
                        if new_x < 0.0 {
                            new_x = viewport.width;
                        } else if new_x > viewport.width {
                            new_x = 0.0;
                        }
                    }
                    if viewport.height > 0.0 {
                        if new_y < 0.0 {
                            new_y = viewport.height;
                        } else if new_y > viewport.height {
                            new_y = 0.0;
                        }
                    }
                }
                BoundaryPolicy::Clamp => {
                    if viewport.width > 0.0 {
                        new_x = new_x.clamp(0.0, viewport.width);
                    }
                    if viewport.height > 0.0 {
                        new_y = new_y.clamp(0.0, viewport.height);
                    }
                }
            }

            particle.x = new_x;
            particle.y = new_y;
        }
    }
}

/// Uniform draw over `0.0..extent`; degenerate extents collapse to zero.
fn uniform(rng: &mut impl Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

/// Tiered size/opacity draw: every 8th particle gets the largest size bump,
/// every 4th a medium one; every 5th particle the brightest opacity floor,
/// every 3rd a medium one.
fn layered_depth(index: usize, rng: &mut impl Rng) -> (f32, f32) {
    let size_bump = if index % 8 == 0 {
        2.5
    } else if index % 4 == 0 {
        2.0
    } else {
        1.0
    };
    let opacity_floor = if index % 5 == 0 {
        0.4
    } else if index % 3 == 0 {
        0.3
    } else {
        0.1
    };
    (
        rng.gen_range(0.0..3.0) + size_bump,
        rng.gen_range(0.0..0.5) + opacity_floor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(61)
    }

    fn assert_in_bounds(field: &Field) {
        let viewport = field.viewport();
        for particle in field.particles() {
            assert!(
                (0.0..=viewport.width).contains(&particle.x),
                "x out of range: {}",
                particle.x
            );
            assert!(
                (0.0..=viewport.height).contains(&particle.y),
                "y out of range: {}",
                particle.y
            );
        }
    }

    #[test]
    fn test_construction_count_and_unique_ids() {
        let field = Field::new(
            FieldConfig::repel_and_wrap(800),
            Viewport::new(1280.0, 720.0),
            &mut rng(),
        );
        assert_eq!(field.particles().len(), 800);
        let ids: HashSet<u32> = field.particles().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 800);
        assert!(field.particles().iter().all(|p| p.id < 800));
        assert_in_bounds(&field);
    }

    #[test]
    fn test_wrap_stays_in_bounds() {
        let mut field = Field::new(
            FieldConfig::repel_and_wrap(200),
            Viewport::new(640.0, 480.0),
            &mut rng(),
        );
        // Sweep the pointer across the field to exercise repulsion pushes
        // in every direction.
        for frame in 0..240 {
            let pointer = Pointer::new((frame * 7 % 640) as f32, (frame * 3 % 480) as f32);
            field.advance(pointer);
            assert_in_bounds(&field);
        }
    }

    #[test]
    fn test_clamp_stays_in_bounds() {
        let mut field = Field::new(
            FieldConfig::repel_and_return(200),
            Viewport::new(640.0, 480.0),
            &mut rng(),
        );
        for frame in 0..240 {
            let pointer = Pointer::new((frame * 11 % 640) as f32, (frame * 5 % 480) as f32);
            field.advance(pointer);
            assert_in_bounds(&field);
        }
    }

    #[test]
    fn test_far_pointer_reduces_to_home_return() {
        let mut field = Field::new(
            FieldConfig::repel_and_return(50),
            Viewport::new(800.0, 600.0),
            &mut rng(),
        );
        let before: Vec<(f32, f32, f32, f32)> = field
            .particles()
            .iter()
            .map(|p| (p.x, p.y, p.home_x, p.home_y))
            .collect();

        field.advance(Pointer::new(100_000.0, 100_000.0));

        for (particle, (x, y, home_x, home_y)) in field.particles().iter().zip(before) {
            let expected_x = (x + (home_x - x) * 0.05).clamp(0.0, 800.0);
            let expected_y = (y + (home_y - y) * 0.05).clamp(0.0, 600.0);
            assert!((particle.x - expected_x).abs() < 1e-4);
            assert!((particle.y - expected_y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pointer_on_particle_produces_finite_positions() {
        let mut field = Field::new(
            FieldConfig::repel_and_return(10),
            Viewport::new(400.0, 300.0),
            &mut rng(),
        );
        let on_particle = {
            let p = &field.particles()[0];
            Pointer::new(p.x, p.y)
        };
        field.advance(on_particle);
        for particle in field.particles() {
            assert!(particle.x.is_finite() && particle.y.is_finite());
        }
        assert_in_bounds(&field);
    }

    #[test]
    fn test_zero_viewport_produces_finite_positions() {
        for config in [
            FieldConfig::repel_and_wrap(10),
            FieldConfig::repel_and_return(10),
        ] {
            let mut field = Field::new(config, Viewport::new(0.0, 0.0), &mut rng());
            for _ in 0..10 {
                field.advance(Pointer::new(0.0, 0.0));
            }
            for particle in field.particles() {
                assert!(particle.x.is_finite() && particle.y.is_finite());
            }
        }
    }

    #[test]
    fn test_drift_advances_and_wraps() {
        let mut field = Field::new(
            FieldConfig::repel_and_wrap(10),
            Viewport::new(100.0, 100.0),
            &mut rng(),
        );
        // Pin every particle to a unit drift along x.
        for particle in &mut field.particles {
            particle.vx = 1.0;
            particle.vy = 0.0;
        }
        let before: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

        field.advance(Pointer::new(10_000.0, 10_000.0));

        for (particle, (x, y)) in field.particles().iter().zip(before) {
            let expected = if x + 1.0 > 100.0 { 0.0 } else { x + 1.0 };
            assert!((particle.x - expected).abs() < 1e-5);
            assert_eq!(particle.y, y);
        }
    }

    #[test]
    fn test_sizes_and_opacities_fixed_across_frames() {
        let mut field = Field::new(
            FieldConfig::repel_and_wrap(100),
            Viewport::new(640.0, 480.0),
            &mut rng(),
        );
        let before: Vec<(u32, f32, f32)> = field
            .particles()
            .iter()
            .map(|p| (p.id, p.size, p.opacity))
            .collect();
        for _ in 0..30 {
            field.advance(Pointer::new(320.0, 240.0));
        }
        let after: Vec<(u32, f32, f32)> = field
            .particles()
            .iter()
            .map(|p| (p.id, p.size, p.opacity))
            .collect();
        assert_eq!(before, after);
    }
}
