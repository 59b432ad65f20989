//! Maps orbit objects onto draw calls.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::color::Palette;
use super::context::DrawContext;
use crate::camera::Camera;
use crate::scene::{OrbitObject, Shape};

/// Draws the whole object population once per frame.
///
/// Owns the color palette and the random source colors are drawn from.
/// Holds nothing object-specific between frames.
pub struct FrameRenderer {
    palette: Palette,
    rng: StdRng,
}

impl FrameRenderer {
    /// Renderer drawing colors from OS entropy.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Renderer with a reproducible color sequence.
    #[must_use]
    pub fn with_seed(palette: Palette, seed: u64) -> Self {
        Self {
            palette,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Palette in use.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Issue the draw calls for one frame.
    ///
    /// Every object gets a line from the origin in a random warm red, then
    /// its shape in a random hue, sized by `size_scale`. Boxes use the
    /// scaled size as edge length, spheres as diameter.
    pub fn render<C: DrawContext + ?Sized>(
        &mut self,
        objects: &[OrbitObject],
        size_scale: f32,
        camera: &Camera,
        ctx: &mut C,
    ) {
        ctx.center_origin();
        ctx.begin_camera(camera);

        for object in objects {
            let position = object.position();

            ctx.set_color(self.palette.line_color(&mut self.rng));
            ctx.draw_line(Vec3::ZERO, position);

            ctx.set_color(self.palette.shape_color(&mut self.rng));
            match object.shape() {
                Shape::Box { size } => ctx.draw_wire_box(position, size * size_scale),
                Shape::Sphere { size } => {
                    ctx.draw_wire_sphere(position, size * size_scale / 2.0);
                }
            }
        }

        ctx.end_camera();
    }
}
