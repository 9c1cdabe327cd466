//! Native window host: winit event loop, wgpu surface, egui passes.

use std::sync::Arc;

use egui_wgpu::ScreenDescriptor;
use floatframe_widgets::FloatingFrame;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::host::{HostConfig, render_ui};

/// Background behind the floating frame.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.93,
    g: 0.94,
    b: 0.95,
    a: 1.0,
};

/// Errors raised while bringing up the native window.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("Surface is not supported by the adapter")]
    UnsupportedSurface,
}

/// GPU objects bound to the window surface.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl Gpu {
    async fn new(window: Arc<Window>) -> Result<Self, HostError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let mut config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or(HostError::UnsupportedSurface)?;
        // egui expects a non-sRGB target.
        let capabilities = surface.get_capabilities(&adapter);
        if let Some(format) = capabilities.formats.iter().copied().find(|f| !f.is_srgb()) {
            config.format = format;
        }
        config.present_mode = wgpu::PresentMode::AutoVsync;
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }
}

/// Window state that exists between `resumed` and exit.
struct Running {
    window: Arc<Window>,
    gpu: Gpu,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Running {
    /// Run one egui pass over the frame and present it.
    fn redraw(&mut self, frame: &mut FloatingFrame) {
        let input = self.egui_state.take_egui_input(&self.window);
        let output = self.egui_ctx.run(input, |ctx| render_ui(ctx, frame));
        self.egui_state
            .handle_platform_output(&self.window, output.platform_output);
        let primitives = self
            .egui_ctx
            .tessellate(output.shapes, output.pixels_per_point);

        for (id, delta) in &output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.gpu.device, &self.gpu.queue, *id, delta);
        }
        self.present(&primitives, output.pixels_per_point);
        for id in &output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        let repaint_now = output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if repaint_now {
            self.window.request_redraw();
        }
    }

    fn present(&mut self, primitives: &[egui::ClippedPrimitive], pixels_per_point: f32) {
        let surface_texture = match self.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = (self.gpu.config.width, self.gpu.config.height);
                self.gpu.resize(width, height);
                self.window.request_redraw();
                return;
            }
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
            pixels_per_point,
        };
        let device = &self.gpu.device;
        let queue = &self.gpu.queue;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui encoder"),
        });
        let mut commands = self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, primitives, &screen_descriptor);
        }

        commands.push(encoder.finish());
        queue.submit(commands);
        surface_texture.present();
    }
}

/// Native application: one window holding the control bar and the frame.
pub struct NativeApp {
    config: HostConfig,
    frame: FloatingFrame,
    running: Option<Running>,
}

impl NativeApp {
    /// Create the app, loading `startup_url` into the viewer if given.
    pub fn new(config: HostConfig, startup_url: Option<String>) -> Self {
        let mut frame = FloatingFrame::new("viewer", config.frame.clone());
        if let Some(url) = startup_url {
            *frame.url_input_mut() = url;
            frame.submit_url();
        }
        Self {
            config,
            frame,
            running: None,
        }
    }

    /// Run the event loop until the window closes.
    pub fn run(mut self) -> Result<(), HostError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Running, HostError> {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let gpu = pollster::block_on(Gpu::new(window.clone()))?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!(
            "FloatFrame window ready - {}x{}",
            gpu.config.width,
            gpu.config.height
        );

        Ok(Running {
            window,
            gpu,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }
}

impl ApplicationHandler for NativeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => {
                running.window.request_redraw();
                self.running = Some(running);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(running) = self.running.as_mut() else {
            return;
        };

        let response = running.egui_state.on_window_event(&running.window, &event);
        if response.repaint {
            running.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                running.gpu.resize(size.width, size.height);
                running.window.request_redraw();
            }
            WindowEvent::RedrawRequested => running.redraw(&mut self.frame),
            _ => {}
        }
    }
}
