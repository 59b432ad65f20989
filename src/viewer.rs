//! Standalone window backed by winit.
//!
//! ```no_run
//! # use polyorbit::Viewer;
//! Viewer::builder()
//!     .with_title("polyorbit")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```
//!
//! Hold Space to spin the camera up, release it to coast to a stop. F
//! toggles borderless fullscreen.

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use crate::{
    engine::OrbitEngine,
    error::PolyorbitError,
    gpu::render_context::{RenderContext, SurfaceSize},
    input::{HostAction, InputProcessor},
    options::{DisplayOptions, Options},
    renderer::WireframeRenderer,
    util::frame_timing::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "polyorbit".
    fn new() -> Self {
        Self {
            options: None,
            title: "polyorbit".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the orbiting wireframe scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`PolyorbitError::Viewer`] if the event loop cannot start and
    /// [`PolyorbitError::Gpu`] if no GPU context can be created for the
    /// window.
    pub fn run(self) -> Result<(), PolyorbitError> {
        let event_loop = EventLoop::new()
            .map_err(|e| PolyorbitError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let display = self.options.display.clone();
        let input =
            InputProcessor::with_key_bindings(self.options.keybindings.clone());
        let engine = OrbitEngine::new(self.options);

        let mut app = ViewerApp {
            window: None,
            gpu: None,
            engine,
            input,
            frame_timing: FrameTiming::new(display.target_fps),
            start: Instant::now(),
            background: background_color(&display),
            sphere_resolution: display.sphere_resolution,
            title: self.title,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PolyorbitError::Viewer(e.to_string()))?;

        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU resources, created once the window exists.
struct GpuState {
    context: RenderContext,
    renderer: WireframeRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    engine: OrbitEngine,
    input: InputProcessor,
    frame_timing: FrameTiming,
    start: Instant,
    background: wgpu::Color,
    sphere_resolution: u32,
    title: String,
    /// Fatal setup error reported from [`Viewer::run`].
    error: Option<PolyorbitError>,
}

fn surface_size(inner: winit::dpi::PhysicalSize<u32>) -> SurfaceSize {
    SurfaceSize::new(inner.width, inner.height)
}

fn background_color(display: &DisplayOptions) -> wgpu::Color {
    let [r, g, b] = display.background;
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: 1.0,
    }
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }
}

impl ViewerApp {
    /// Run one engine tick into the line batch and present it.
    fn draw_frame(&mut self) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        let _ = self.engine.tick(
            elapsed_ms,
            self.input.state().accelerating,
            gpu.renderer.batch_mut(),
        );

        let Some(frame) = gpu.context.acquire() else {
            gpu.renderer.batch_mut().clear();
            return;
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        gpu.renderer.render(&gpu.context, &view, self.background);
        frame.present();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PolyorbitError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, PolyorbitError::Viewer(e.to_string()));
                return;
            }
        };

        let size = surface_size(window.inner_size());
        let context =
            match pollster::block_on(RenderContext::new(window.clone(), size)) {
                Ok(c) => c,
                Err(e) => {
                    self.fail(event_loop, e.into());
                    return;
                }
            };
        let renderer = WireframeRenderer::new(&context, self.sphere_resolution);
        log::info!(
            "window {}x{}, {} objects",
            size.width,
            size.height,
            self.engine.registry().len()
        );

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(GpuState { context, renderer });
        self.start = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(surface_size(event_size));
                }
            }

            WindowEvent::RedrawRequested => {
                if self.frame_timing.should_render() {
                    self.draw_frame();
                    self.frame_timing.end_frame();
                    if let Some(fps) = self.frame_timing.fps_report() {
                        log::debug!("{fps:.1} fps");
                    }
                }
            }

            WindowEvent::Focused(false) => self.input.release_all(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                let key_str = format!("{code:?}");
                if let Some(HostAction::ToggleFullscreen) =
                    self.input.handle_key(&key_str, pressed)
                {
                    if let Some(w) = &self.window {
                        toggle_fullscreen(w);
                    }
                }
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.frame_timing.should_render() {
            window.request_redraw();
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                self.frame_timing.next_frame_at(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_still_has_a_surface() {
        let size = winit::dpi::PhysicalSize::new(0, 480);
        assert_eq!(surface_size(size), SurfaceSize::new(1, 480));
        assert_eq!(surface_size(size).width, 1);
    }

    #[test]
    fn background_is_opaque() {
        let display = DisplayOptions {
            background: [0.25, 0.5, 1.0],
            ..DisplayOptions::default()
        };
        let color = background_color(&display);
        assert_eq!((color.r, color.g, color.b, color.a), (0.25, 0.5, 1.0, 1.0));
    }

    #[test]
    fn builder_defaults() {
        let viewer = Viewer::builder().build();
        assert_eq!(viewer.title, "polyorbit");
        assert_eq!(viewer.options, Options::default());

        let viewer = Viewer::builder().with_title("spin").build();
        assert_eq!(viewer.title, "spin");
    }
}
