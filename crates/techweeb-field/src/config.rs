//! Field configuration and the two page presets.

/// What happens when a particle leaves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Re-enter from the opposite edge.
    Wrap,
    /// Hard stop at the edge.
    Clamp,
}

/// Size and opacity distribution drawn at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepthProfile {
    /// One size span, one opacity for every particle.
    Uniform {
        size_base: f32,
        size_span: f32,
        opacity: f32,
    },
    /// Tiered sizes and opacities; a minority of particles comes out larger
    /// and brighter, which reads as depth layers.
    Layered,
}

/// Parameters of one particle field instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Number of particles, fixed for the lifetime of the field.
    pub count: usize,
    /// Pointer distance below which repulsion applies, in pixels.
    pub repulsion_radius: f32,
    /// Peak repulsion displacement per frame, in pixels.
    pub repulsion_strength: f32,
    /// Ease factor pulling particles back to their home position when the
    /// pointer is out of range. `None` disables home return.
    pub return_speed: Option<f32>,
    /// Edge behavior.
    pub boundary: BoundaryPolicy,
    /// Full span of the per-axis ambient drift velocity, in pixels per
    /// frame. Zero disables drift.
    pub drift_span: f32,
    /// Size and opacity distribution.
    pub depth: DepthProfile,
}

impl FieldConfig {
    /// Drifting field that wraps at the edges and has no home pull; used
    /// behind the about and contact pages.
    pub fn repel_and_wrap(count: usize) -> Self {
        Self {
            count,
            repulsion_radius: 200.0,
            repulsion_strength: 8.0,
            return_speed: None,
            boundary: BoundaryPolicy::Wrap,
            drift_span: 0.2,
            depth: DepthProfile::Layered,
        }
    }

    /// Still field whose particles spring back to a home position once the
    /// pointer moves away; used behind the home page.
    pub fn repel_and_return(count: usize) -> Self {
        Self {
            count,
            repulsion_radius: 150.0,
            repulsion_strength: 5.0,
            return_speed: Some(0.05),
            boundary: BoundaryPolicy::Clamp,
            drift_span: 0.0,
            depth: DepthProfile::Uniform {
                size_base: 2.0,
                size_span: 2.0,
                opacity: 0.5,
            },
        }
    }

    /// Scale the ambient drift, keeping everything else.
    pub fn with_drift_scale(mut self, scale: f32) -> Self {
        self.drift_span *= scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repel_and_wrap_preset() {
        let config = FieldConfig::repel_and_wrap(800);
        assert_eq!(config.count, 800);
        assert_eq!(config.repulsion_radius, 200.0);
        assert_eq!(config.repulsion_strength, 8.0);
        assert_eq!(config.return_speed, None);
        assert_eq!(config.boundary, BoundaryPolicy::Wrap);
        assert!(config.drift_span > 0.0);
    }

    #[test]
    fn test_repel_and_return_preset() {
        let config = FieldConfig::repel_and_return(350);
        assert_eq!(config.count, 350);
        assert_eq!(config.repulsion_radius, 150.0);
        assert_eq!(config.repulsion_strength, 5.0);
        assert_eq!(config.return_speed, Some(0.05));
        assert_eq!(config.boundary, BoundaryPolicy::Clamp);
        assert_eq!(config.drift_span, 0.0);
    }

    #[test]
    fn test_drift_scale() {
        let config = FieldConfig::repel_and_wrap(10).with_drift_scale(2.0);
        assert_eq!(config.drift_span, 0.4);
    }
}
