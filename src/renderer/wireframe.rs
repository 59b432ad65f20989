//! GPU wireframe backend.
//!
//! [`LineBatch`] turns draw calls into a colored `LineList` vertex stream on
//! the CPU; [`WireframeRenderer`] uploads that stream once per frame and
//! draws it with a single depth-tested pipeline.

use glam::Vec3;
use wgpu::util::DeviceExt;

use super::color::Color;
use super::context::DrawContext;
use super::primitives::WirePrimitive;
use crate::camera::{Camera, CameraUniform};
use crate::gpu::pipeline_helpers::{create_line_pipeline, vertex_uniform_buffer};
use crate::gpu::render_context::RenderContext;
use crate::gpu::vertex_stream::VertexStream;

// ==================== VERTEX FORMAT ====================

/// 28-byte line vertex: world position plus RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGBA color.
    pub color: [f32; 4],
}

fn line_vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 12,
                shader_location: 1,
            },
        ],
    }
}

// ==================== CPU BATCH ====================

/// Collects one frame of draw calls as line vertices.
///
/// The unit box and sphere are built once and reused for every shape.
pub struct LineBatch {
    vertices: Vec<LineVertex>,
    color: [f32; 4],
    camera: Option<Camera>,
    aspect: f32,
    unit_box: WirePrimitive,
    unit_sphere: WirePrimitive,
}

impl LineBatch {
    /// Empty batch; spheres use `sphere_resolution` segments per ring.
    #[must_use]
    pub fn new(sphere_resolution: u32) -> Self {
        Self {
            vertices: Vec::new(),
            color: Color::WHITE.to_array(),
            camera: None,
            aspect: 1.0,
            unit_box: WirePrimitive::unit_box(),
            unit_sphere: WirePrimitive::unit_sphere(sphere_resolution),
        }
    }

    /// Viewport aspect ratio applied to the recorded camera.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Vertices recorded since the last [`clear`](Self::clear), two per
    /// line segment.
    #[must_use]
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Camera of the most recent camera region, with the batch's aspect.
    #[must_use]
    pub fn camera(&self) -> Option<Camera> {
        self.camera.map(|camera| camera.with_aspect(self.aspect))
    }

    /// Drop recorded vertices, keeping the allocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

fn push_placed(
    vertices: &mut Vec<LineVertex>,
    color: [f32; 4],
    primitive: &WirePrimitive,
    center: Vec3,
    scale: f32,
) {
    vertices.reserve(primitive.edges().len() * 2);
    for [a, b] in primitive.placed(center, scale) {
        push_segment(vertices, color, a, b);
    }
}

fn push_segment(
    vertices: &mut Vec<LineVertex>,
    color: [f32; 4],
    a: Vec3,
    b: Vec3,
) {
    vertices.push(LineVertex {
        position: a.to_array(),
        color,
    });
    vertices.push(LineVertex {
        position: b.to_array(),
        color,
    });
}

impl DrawContext for LineBatch {
    fn center_origin(&mut self) {
        // Clip space is already centered on the viewport.
    }

    fn begin_camera(&mut self, camera: &Camera) {
        self.camera = Some(*camera);
    }

    fn end_camera(&mut self) {}

    fn set_color(&mut self, color: Color) {
        self.color = color.to_array();
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3) {
        push_segment(&mut self.vertices, self.color, from, to);
    }

    fn draw_wire_box(&mut self, center: Vec3, edge: f32) {
        let Self {
            vertices,
            color,
            unit_box,
            ..
        } = self;
        push_placed(vertices, *color, unit_box, center, edge);
    }

    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32) {
        let Self {
            vertices,
            color,
            unit_sphere,
            ..
        } = self;
        push_placed(vertices, *color, unit_sphere, center, radius);
    }
}

// ==================== GPU RENDERER ====================

/// Line vertices of twenty spheres at the default resolution of 100.
const DEFAULT_SCENE_VERTICES: usize = 20 * 2 * 9_900;

/// Draws a [`LineBatch`] into a surface texture.
pub struct WireframeRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    vertices: VertexStream<LineVertex>,
    batch: LineBatch,
}

impl WireframeRenderer {
    /// Create the pipeline and buffers for `context`'s surface.
    #[must_use]
    pub fn new(context: &RenderContext, sphere_resolution: u32) -> Self {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/wireframe.wgsl"
        ));

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[CameraUniform::IDENTITY]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[vertex_uniform_buffer(0)],
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let pipeline = create_line_pipeline(
            device,
            "Wireframe",
            &shader,
            context.format(),
            line_vertex_buffer_layout(),
            &[&camera_layout],
        );

        let vertices = VertexStream::new(
            device,
            "Wireframe Vertices",
            DEFAULT_SCENE_VERTICES,
        );

        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            vertices,
            batch: LineBatch::new(sphere_resolution),
        }
    }

    /// The draw context the frame renderer records into.
    pub fn batch_mut(&mut self) -> &mut LineBatch {
        &mut self.batch
    }

    /// Upload the recorded frame, draw it into `target`, and reset the
    /// batch for the next frame.
    pub fn render(
        &mut self,
        context: &RenderContext,
        target: &wgpu::TextureView,
        background: wgpu::Color,
    ) {
        self.batch.set_aspect(context.aspect());
        if let Some(camera) = self.batch.camera() {
            context.queue.write_buffer(
                &self.camera_buffer,
                0,
                bytemuck::cast_slice(&[CameraUniform::from(&camera)]),
            );
        }
        self.vertices.upload(
            &context.device,
            &context.queue,
            self.batch.vertices(),
        );

        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Wireframe Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(background),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: context.depth_view(),
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            if let Some(slice) = self.vertices.slice() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.camera_bind_group, &[]);
                pass.set_vertex_buffer(0, slice);
                pass.draw(0..self.vertices.count() as u32, 0..1);
            }
        }
        context.submit(encoder);

        self.batch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitController;

    #[test]
    fn line_adds_two_vertices_in_the_current_color() {
        let mut batch = LineBatch::new(8);
        let red = Color::rgb(1.0, 0.0, 0.0);
        batch.set_color(red);
        batch.draw_line(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(
            batch.vertices(),
            &[
                LineVertex { position: [0.0, 0.0, 0.0], color: red.to_array() },
                LineVertex { position: [1.0, 2.0, 3.0], color: red.to_array() },
            ]
        );
    }

    #[test]
    fn shapes_expand_into_their_primitive_edges() {
        let mut batch = LineBatch::new(8);
        batch.draw_wire_box(Vec3::ZERO, 10.0);
        assert_eq!(batch.vertices().len(), 24);

        batch.clear();
        batch.draw_wire_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0);
        let expected = WirePrimitive::unit_sphere(8).edges().len() * 2;
        assert_eq!(batch.vertices().len(), expected);
        for v in batch.vertices() {
            let d = Vec3::from_array(v.position) - Vec3::new(5.0, 0.0, 0.0);
            assert!((d.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn shape_vertices_follow_primitive_edge_order() {
        let mut batch = LineBatch::new(6);
        let center = Vec3::new(1.0, -2.0, 3.0);
        batch.draw_wire_sphere(center, 4.0);

        let expected: Vec<[f32; 3]> = WirePrimitive::unit_sphere(6)
            .placed(center, 4.0)
            .flat_map(|[a, b]| [a.to_array(), b.to_array()])
            .collect();
        let actual: Vec<[f32; 3]> =
            batch.vertices().iter().map(|v| v.position).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn redrawing_after_clear_reuses_the_allocation() {
        fn record(batch: &mut LineBatch) {
            batch.clear();
            batch.draw_wire_box(Vec3::ZERO, 10.0);
            batch.draw_wire_sphere(Vec3::X, 5.0);
            batch.draw_wire_sphere(Vec3::Y, 5.0);
        }

        let mut batch = LineBatch::new(16);
        record(&mut batch);
        let capacity = batch.vertices.capacity();
        let len = batch.vertices().len();
        for _ in 0..5 {
            record(&mut batch);
            assert_eq!(batch.vertices().len(), len);
            assert_eq!(batch.vertices.capacity(), capacity);
        }
    }

    #[test]
    fn recorded_camera_takes_the_batch_aspect() {
        let mut batch = LineBatch::new(8);
        assert!(batch.camera().is_none());

        batch.set_aspect(16.0 / 9.0);
        let camera = OrbitController::default().camera();
        batch.begin_camera(&camera);
        batch.end_camera();

        let recorded = batch.camera().unwrap();
        assert_eq!(recorded.eye, camera.eye);
        assert_eq!(recorded.aspect, 16.0 / 9.0);
    }

    #[test]
    fn vertex_layout_matches_struct() {
        let layout = line_vertex_buffer_layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes[1].offset, 12);
    }
}
