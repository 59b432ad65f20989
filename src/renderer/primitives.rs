//! Unit wireframe primitives, built once and stamped out per draw.

use glam::Vec3;

/// A set of line segments describing a shape of unit size around the
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct WirePrimitive {
    edges: Vec<[Vec3; 2]>,
}

impl WirePrimitive {
    /// Cube with edge length 1 centered at the origin (12 edges).
    #[must_use]
    pub fn unit_box() -> Self {
        let h = 0.5;
        let corners = [
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        const EDGES: [(usize, usize); 12] = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        Self {
            edges: EDGES.iter().map(|&(a, b)| [corners[a], corners[b]]).collect(),
        }
    }

    /// Sphere of radius 1 centered at the origin, drawn as latitude rings
    /// and longitude meridians with `resolution` segments per full turn.
    ///
    /// `resolution` is raised to at least 4.
    #[must_use]
    pub fn unit_sphere(resolution: u32) -> Self {
        let segments = resolution.max(4);
        let stacks = (segments / 2).max(2);
        let point = |stack: u32, slice: u32| {
            let theta = std::f32::consts::PI * stack as f32 / stacks as f32;
            let phi = std::f32::consts::TAU * slice as f32 / segments as f32;
            let (sin_t, cos_t) = theta.sin_cos();
            let (sin_p, cos_p) = phi.sin_cos();
            Vec3::new(sin_t * cos_p, cos_t, sin_t * sin_p)
        };

        let mut edges = Vec::new();
        // Latitude rings, skipping the degenerate poles
        for stack in 1..stacks {
            for slice in 0..segments {
                edges.push([point(stack, slice), point(stack, slice + 1)]);
            }
        }
        // Meridians, pole to pole
        for slice in 0..segments {
            for stack in 0..stacks {
                edges.push([point(stack, slice), point(stack + 1, slice)]);
            }
        }
        Self { edges }
    }

    /// Line segments of the unit shape.
    #[must_use]
    pub fn edges(&self) -> &[[Vec3; 2]] {
        &self.edges
    }

    /// Segments scaled by `scale` and moved to `center`.
    pub fn placed(
        &self,
        center: Vec3,
        scale: f32,
    ) -> impl Iterator<Item = [Vec3; 2]> + '_ {
        self.edges
            .iter()
            .map(move |&[a, b]| [center + a * scale, center + b * scale])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_box_has_twelve_unit_edges() {
        let cube = WirePrimitive::unit_box();
        assert_eq!(cube.edges().len(), 12);
        for [a, b] in cube.edges() {
            assert!(((*a - *b).length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn unit_sphere_points_lie_on_the_sphere() {
        let sphere = WirePrimitive::unit_sphere(16);
        // 7 rings * 16 + 16 meridians * 8
        assert_eq!(sphere.edges().len(), 7 * 16 + 16 * 8);
        for [a, b] in sphere.edges() {
            assert!((a.length() - 1.0).abs() < 1e-5);
            assert!((b.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn tiny_resolution_is_raised() {
        let sphere = WirePrimitive::unit_sphere(0);
        assert_eq!(sphere.edges().len(), WirePrimitive::unit_sphere(4).edges().len());
    }

    #[test]
    fn placement_scales_and_translates() {
        let cube = WirePrimitive::unit_box();
        let center = Vec3::new(10.0, 20.0, 30.0);
        for [a, b] in cube.placed(center, 4.0) {
            for p in [a, b] {
                let d = p - center;
                assert!((d.x.abs() - 2.0).abs() < 1e-5);
                assert!((d.y.abs() - 2.0).abs() < 1e-5);
                assert!((d.z.abs() - 2.0).abs() < 1e-5);
            }
        }
    }
}
