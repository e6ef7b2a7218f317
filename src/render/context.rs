use std::ffi::{c_char, CStr, CString};
use std::ptr;

use gl::types::GLenum;
use glutin::{
    config::{Config, ConfigTemplateBuilder},
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{debug, info};
use raw_window_handle::HasRawWindowHandle;
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::{ContextConfig, ProfileKind, WindowConfig};
use crate::utils::error::{DemoError, Result};

/// A window with a current OpenGL context and loaded function pointers.
pub struct GlWindowContext {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
}

impl GlWindowContext {
    pub fn create(
        event_loop: &EventLoop<()>,
        window_config: &WindowConfig,
        context_config: &ContextConfig,
    ) -> Result<Self> {
        let inner_size = LogicalSize::new(window_config.width, window_config.height);
        let mut window_builder = WindowBuilder::new()
            .with_title(window_config.title.as_str())
            .with_inner_size(inner_size)
            .with_resizable(false);

        if window_config.centered {
            if let Some(monitor) = event_loop.primary_monitor() {
                let size: PhysicalSize<u32> = inner_size.to_physical(monitor.scale_factor());
                let position = monitor.position();
                let monitor_size = monitor.size();
                let (x, y) = centered_origin(
                    (position.x, position.y),
                    (monitor_size.width, monitor_size.height),
                    (size.width, size.height),
                );
                window_builder = window_builder.with_position(PhysicalPosition::new(x, y));
            }
        }

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(event_loop, template, pick_config)
            .map_err(|e| DemoError::Window(e.to_string()))?;
        let window =
            window.ok_or_else(|| DemoError::Window("display builder returned no window".into()))?;

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                context_config.major,
                context_config.minor,
            ))))
            .with_profile(match context_config.profile {
                ProfileKind::Core => GlProfile::Core,
                ProfileKind::Compatibility => GlProfile::Compatibility,
            })
            .build(Some(window.raw_window_handle()));

        let gl_display = gl_config.display();

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| DemoError::Context(e.to_string()))?;

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs) }
            .map_err(|e| DemoError::Surface(e.to_string()))?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .map_err(|e| DemoError::Context(e.to_string()))?;

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()) as *const _,
            Err(_) => ptr::null(),
        });

        let size = window.inner_size();
        unsafe {
            gl::Viewport(0, 0, size.width as i32, size.height as i32);
        }
        debug!("Viewport {}x{}", size.width, size.height);

        Ok(Self {
            window,
            gl_context,
            gl_surface,
        })
    }

    pub fn log_driver_info(&self) {
        info!("Vendor:   {}", driver_string(gl::VENDOR));
        info!("Renderer: {}", driver_string(gl::RENDERER));
        info!("Version:  {}", driver_string(gl::VERSION));
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn present(&self) -> Result<()> {
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .map_err(|e| DemoError::Present(e.to_string()))
    }
}

/// Prefers multisampled configs, otherwise the first one offered.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|accum, config| {
            if config.num_samples() > accum.num_samples() {
                config
            } else {
                accum
            }
        })
        .expect("glutin only calls the picker with at least one config")
}

fn driver_string(name: GLenum) -> String {
    let raw = unsafe { gl::GetString(name) };
    if raw.is_null() {
        return "unknown".to_string();
    }
    unsafe { CStr::from_ptr(raw as *const c_char) }
        .to_string_lossy()
        .into_owned()
}

/// Top-left corner that centres a window of `window_size` on a monitor.
pub fn centered_origin(
    monitor_position: (i32, i32),
    monitor_size: (u32, u32),
    window_size: (u32, u32),
) -> (i32, i32) {
    let offset = |screen: u32, window: u32| (i64::from(screen) - i64::from(window)) / 2;
    (
        monitor_position.0 + offset(monitor_size.0, window_size.0) as i32,
        monitor_position.1 + offset(monitor_size.1, window_size.1) as i32,
    )
}
