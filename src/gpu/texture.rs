//! Depth render target.

use super::render_context::SurfaceSize;

/// Format of every depth attachment in the crate.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A depth texture matching the surface, and the view the pass binds.
pub struct DepthTarget {
    _texture: wgpu::Texture,
    /// Full-texture view used as the depth attachment.
    pub view: wgpu::TextureView,
}

impl DepthTarget {
    /// Depth buffer covering `size`.
    #[must_use]
    pub fn new(device: &wgpu::Device, size: SurfaceSize) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Target"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
        }
    }
}
