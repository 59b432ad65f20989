//! The per-frame driver.
//!
//! [`OrbitEngine`] owns the object population, the pulse, the orbit
//! controller and the frame renderer. The host calls
//! [`tick`](OrbitEngine::tick) once per displayed frame:
//!
//! ```ignore
//! let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
//! engine.tick(elapsed_ms, input.state().accelerating, &mut ctx);
//! ```

mod accessors;

use crate::animation::Pulse;
use crate::camera::{OrbitController, OrbitRegime};
use crate::options::Options;
use crate::renderer::{DrawContext, FrameRenderer, Palette};
use crate::scene::ObjectRegistry;

/// Drives pulse, orbit and rendering in a fixed order each frame.
pub struct OrbitEngine {
    options: Options,
    registry: ObjectRegistry,
    pulse: Pulse,
    orbit: OrbitController,
    renderer: FrameRenderer,
    size_scale: f32,
    frame_count: u64,
}

impl OrbitEngine {
    /// Build the engine and populate the registry from `options.scene`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let registry = ObjectRegistry::from_options(&options.scene);
        Self::with_registry(options, registry)
    }

    /// Build the engine around an existing object population.
    ///
    /// When `options.scene.seed` is set, per-frame colors are seeded from
    /// it too, so a seeded run issues the same draw stream every time.
    #[must_use]
    pub fn with_registry(options: Options, registry: ObjectRegistry) -> Self {
        let palette = Palette {
            line_brightness_min: options.display.line_brightness_min,
        };
        let renderer = match options.scene.seed {
            Some(seed) => FrameRenderer::with_seed(palette, seed),
            None => FrameRenderer::new(palette),
        };

        Self {
            pulse: Pulse::from_options(&options.pulse),
            orbit: OrbitController::from_options(&options.camera),
            renderer,
            registry,
            options,
            size_scale: 1.0,
            frame_count: 0,
        }
    }

    /// Run one frame.
    ///
    /// Computes the size scale from `elapsed_ms`, advances the orbit with
    /// `accelerating`, then draws every object into `ctx` with the updated
    /// camera.
    pub fn tick<C: DrawContext + ?Sized>(
        &mut self,
        elapsed_ms: f64,
        accelerating: bool,
        ctx: &mut C,
    ) -> OrbitRegime {
        self.size_scale = self.pulse.evaluate(elapsed_ms) as f32;
        let regime = self.orbit.advance(accelerating);
        let camera = self.orbit.camera();

        self.renderer.render(
            self.registry.objects(),
            self.size_scale,
            &camera,
            ctx,
        );
        self.frame_count += 1;

        log::trace!(
            "frame {}: scale {:.3}, speed {:.4}, {regime:?}",
            self.frame_count,
            self.size_scale,
            self.orbit.speed()
        );
        regime
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::renderer::{CommandRecorder, DrawCommand};
    use crate::scene::{OrbitObject, RawObject, ShapeKind};

    fn seeded_options() -> Options {
        let mut options = Options::default();
        options.scene.seed = Some(42);
        options
    }

    #[test]
    fn first_frame_draws_every_object() {
        let mut engine = OrbitEngine::new(seeded_options());
        assert_eq!(engine.registry().len(), 20);

        let mut rec = CommandRecorder::new();
        let regime = engine.tick(0.0, false, &mut rec);

        assert_eq!(regime, OrbitRegime::Idle);
        assert_eq!(rec.line_count(), 20);
        assert_eq!(rec.box_count() + rec.sphere_count(), 20);
        assert_eq!(engine.camera().eye, Vec3::new(0.0, 0.0, 2000.0));
        assert_eq!(engine.frame_count(), 1);
    }

    #[test]
    fn scale_at_time_zero_is_one() {
        let registry = ObjectRegistry::from_raw([RawObject {
            position: Vec3::new(1.0, 2.0, 3.0),
            shape_code: ShapeKind::Box.code(),
            size: 40.0,
        }]);
        let mut engine = OrbitEngine::with_registry(seeded_options(), registry);
        let mut rec = CommandRecorder::new();
        let _ = engine.tick(0.0, false, &mut rec);

        assert_eq!(engine.size_scale(), 1.0);
        assert!(rec.commands().contains(&DrawCommand::WireBox {
            center: Vec3::new(1.0, 2.0, 3.0),
            edge: 40.0,
        }));
    }

    #[test]
    fn pulse_scales_the_drawn_sizes() {
        let registry = ObjectRegistry::from_raw([RawObject {
            position: Vec3::ZERO,
            shape_code: ShapeKind::Sphere.code(),
            size: 20.0,
        }]);
        let mut engine = OrbitEngine::with_registry(seeded_options(), registry);
        let mut rec = CommandRecorder::new();
        // sin(t / 100) == 1 at t = 50π, so the scale peaks at 1.3
        let _ = engine.tick(50.0 * std::f64::consts::PI, false, &mut rec);

        assert!((engine.size_scale() - 1.3).abs() < 1e-5);
        let radius = rec
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::WireSphere { radius, .. } => Some(*radius),
                _ => None,
            })
            .unwrap();
        assert!((radius - 13.0).abs() < 1e-4);
    }

    #[test]
    fn camera_is_advanced_before_drawing() {
        let mut engine = OrbitEngine::new(seeded_options());
        let mut rec = CommandRecorder::new();
        let _ = engine.tick(0.0, true, &mut rec);

        let drawn = rec
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::BeginCamera(camera) => Some(*camera),
                _ => None,
            })
            .unwrap();
        assert_eq!(drawn, engine.camera());
        assert!((engine.orbit().angle() - 0.005).abs() < 1e-12);
        assert_ne!(drawn.eye, Vec3::new(0.0, 0.0, 2000.0));
    }

    #[test]
    fn accelerate_then_coast_to_a_stop() {
        let mut engine = OrbitEngine::new(seeded_options());
        let mut rec = CommandRecorder::new();

        for frame in 0..200 {
            rec.clear();
            let _ = engine.tick(f64::from(frame) * 16.0, true, &mut rec);
        }
        assert!((engine.orbit().speed() - 1.0).abs() < 1e-9);

        for frame in 200..250 {
            rec.clear();
            let regime = engine.tick(f64::from(frame) * 16.0, false, &mut rec);
            assert_eq!(regime, OrbitRegime::Coasting);
            assert!(engine.orbit().speed() >= 0.0);
        }
        assert_eq!(engine.orbit().speed(), 0.0);

        let angle = engine.orbit().angle();
        let _ = engine.tick(250.0 * 16.0, false, &mut rec);
        assert_eq!(engine.orbit().angle(), angle);
        assert_eq!(engine.frame_count(), 251);
    }

    #[test]
    fn seeded_engines_issue_identical_frames() {
        let mut a = OrbitEngine::new(seeded_options());
        let mut b = OrbitEngine::new(seeded_options());
        let objects: Vec<OrbitObject> = a.registry().objects().to_vec();
        assert_eq!(objects, b.registry().objects());

        let mut rec_a = CommandRecorder::new();
        let mut rec_b = CommandRecorder::new();
        let _ = a.tick(123.0, true, &mut rec_a);
        let _ = b.tick(123.0, true, &mut rec_b);
        assert_eq!(rec_a.commands(), rec_b.commands());
    }

    #[test]
    fn empty_registry_still_moves_the_camera() {
        let mut engine =
            OrbitEngine::with_registry(seeded_options(), ObjectRegistry::default());
        let mut rec = CommandRecorder::new();
        let _ = engine.tick(0.0, true, &mut rec);
        assert_eq!(rec.line_count(), 0);
        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::CenterOrigin,
                DrawCommand::BeginCamera(engine.camera()),
                DrawCommand::EndCamera,
            ]
        );
        assert!(engine.orbit().speed() > 0.0);
    }
}
