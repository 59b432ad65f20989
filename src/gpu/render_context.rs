//! The window surface and the device, queue and depth buffer that draw
//! into it.

use std::fmt;

use super::texture::DepthTarget;

/// Drawable size in physical pixels.
///
/// Both sides are at least 1: a minimized window still yields a
/// configurable surface, a valid depth texture and a finite aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Size with zero sides raised to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Why the window's drawing surface could not be brought up.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle cannot back a surface.
    Surface(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    Adapter(wgpu::RequestAdapterError),
    /// The adapter refused to open a device.
    Device(wgpu::RequestDeviceError),
    /// The adapter offers no texture format or alpha mode for the surface.
    NoSurfaceFormat,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "cannot create a window surface: {e}"),
            Self::Adapter(e) => {
                write!(f, "no GPU adapter can present to the window: {e}")
            }
            Self::Device(e) => write!(f, "cannot open a GPU device: {e}"),
            Self::NoSurfaceFormat => {
                write!(f, "the GPU offers no format for the window surface")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::Adapter(e) => Some(e),
            Self::Device(e) => Some(e),
            Self::NoSurfaceFormat => None,
        }
    }
}

/// Prefer an sRGB format so vertex colors are blended in linear space.
fn pick_format(
    formats: &[wgpu::TextureFormat],
) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
}

/// Lost and outdated surfaces recover by reconfiguring; anything else
/// just drops the frame.
fn needs_reconfigure(error: &wgpu::SurfaceError) -> bool {
    matches!(error, wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
}

/// Device, queue and the window surface with its depth buffer.
///
/// The surface and depth buffer are always the same size; [`resize`]
/// keeps them in step.
///
/// [`resize`]: Self::resize
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
}

impl RenderContext {
    /// Open a device that can present to `window` and configure the surface
    /// at `size` with vsync.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] naming the setup step that failed.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: SurfaceSize,
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::Surface)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::Adapter)?;
        let info = adapter.get_info();
        log::info!("rendering on {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("polyorbit"),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::Device)?;

        let caps = surface.get_capabilities(&adapter);
        let format =
            pick_format(&caps.formats).ok_or(RenderContextError::NoSurfaceFormat)?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .ok_or(RenderContextError::NoSurfaceFormat)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: Vec::new(),
        };
        surface.configure(&device, &config);
        log::debug!("surface {}x{} {format:?}", size.width, size.height);

        let depth = DepthTarget::new(&device, size);
        Ok(Self {
            device,
            queue,
            surface,
            config,
            depth,
        })
    }

    /// Current surface size.
    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.config.width, self.config.height)
    }

    /// Width over height of the surface.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.size().aspect()
    }

    /// Color format of the surface textures.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Depth attachment matching the surface.
    #[must_use]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.view
    }

    /// Reconfigure the surface and rebuild the depth buffer for `size`.
    pub fn resize(&mut self, size: SurfaceSize) {
        if size == self.size() {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth = DepthTarget::new(&self.device, size);
    }

    /// Next surface texture to draw into, or `None` if this frame has to
    /// be skipped.
    pub fn acquire(&mut self) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(e) if needs_reconfigure(&e) => {
                log::debug!("surface {e}, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                None
            }
            Err(e) => {
                log::warn!("skipping frame: {e}");
                None
            }
        }
    }

    /// Encoder for one frame's commands.
    #[must_use]
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Finish `encoder` and queue it.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}
