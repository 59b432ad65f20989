//! The immediate-mode drawing surface the frame renderer talks to.

use glam::Vec3;

use super::color::Color;
use crate::camera::Camera;

/// Host-side 3D drawing context.
///
/// Calls arrive in frame order: `center_origin`, `begin_camera`, a run of
/// color/line/shape calls, then `end_camera`. Shapes and lines use the
/// color most recently passed to [`set_color`](Self::set_color).
pub trait DrawContext {
    /// Move the drawing origin to the center of the viewport.
    fn center_origin(&mut self);
    /// Enter the camera's view transform for the following draws.
    fn begin_camera(&mut self, camera: &Camera);
    /// Leave the camera transform entered by
    /// [`begin_camera`](Self::begin_camera).
    fn end_camera(&mut self);
    /// Color for subsequent draws.
    fn set_color(&mut self, color: Color);
    /// Straight line between two world-space points.
    fn draw_line(&mut self, from: Vec3, to: Vec3);
    /// Edges of an axis-aligned cube.
    fn draw_wire_box(&mut self, center: Vec3, edge: f32);
    /// Latitude/longitude rings of a sphere.
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32);
}

/// One recorded [`DrawContext`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// [`DrawContext::center_origin`].
    CenterOrigin,
    /// [`DrawContext::begin_camera`].
    BeginCamera(Camera),
    /// [`DrawContext::end_camera`].
    EndCamera,
    /// [`DrawContext::set_color`].
    SetColor(Color),
    /// [`DrawContext::draw_line`].
    Line {
        /// Start point.
        from: Vec3,
        /// End point.
        to: Vec3,
    },
    /// [`DrawContext::draw_wire_box`].
    WireBox {
        /// Cube center.
        center: Vec3,
        /// Edge length.
        edge: f32,
    },
    /// [`DrawContext::draw_wire_sphere`].
    WireSphere {
        /// Sphere center.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
}

/// A [`DrawContext`] that records every call, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Number of recorded wire boxes.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::WireBox { .. }))
    }

    /// Number of recorded wire spheres.
    #[must_use]
    pub fn sphere_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::WireSphere { .. }))
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|&c| pred(c)).count()
    }
}

impl DrawContext for CommandRecorder {
    fn center_origin(&mut self) {
        self.commands.push(DrawCommand::CenterOrigin);
    }

    fn begin_camera(&mut self, camera: &Camera) {
        self.commands.push(DrawCommand::BeginCamera(*camera));
    }

    fn end_camera(&mut self) {
        self.commands.push(DrawCommand::EndCamera);
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn draw_wire_box(&mut self, center: Vec3, edge: f32) {
        self.commands.push(DrawCommand::WireBox { center, edge });
    }

    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32) {
        self.commands.push(DrawCommand::WireSphere { center, radius });
    }
}
