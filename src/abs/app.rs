//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application, and
//! the [`EventHandler`] trait through which the event loop drives whatever
//! is being rendered.

use std::sync::Arc;

use crate::abs::driver::GlowDriver;

/// Lifecycle hooks invoked by [`App::run`].
///
/// `on_load` fires once before the first frame, `on_resize` whenever the
/// window surface changes size, `on_render_frame` once per loop iteration,
/// and `on_unload` once after the loop exits. Hooks never overlap.
pub trait EventHandler {
    /// Called once at startup, before the first frame.
    fn on_load(&mut self) {}

    /// Called whenever the window is resized.
    fn on_resize(&mut self, _width: i32, _height: i32) {}

    /// Called once per frame to render.
    fn on_render_frame(&mut self);

    /// Called once at shutdown, after the loop exits.
    fn on_unload(&mut self) {}
}

/// The [`App`] struct encapsulates the SDL2 context, the event pump, and the
/// OpenGL driver bound to the window.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub event_pump: sdl2::EventPump,
    pub driver: Arc<GlowDriver>,
}

impl App {
    /// Creates a new [`App`] instance with the specified title, width, and height.
    /// The width and height options are ignored if `fullscreen` is set to `true`.
    pub fn new(title: &str, width: u32, height: u32, fullscreen: bool) -> Self {
        let sdl = sdl2::init().unwrap();
        let video_subsystem = sdl.video().unwrap();
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        let display_mode = video_subsystem.current_display_mode(0).unwrap();
        let desktop_width = display_mode.w as u32;
        let desktop_height = display_mode.h as u32;
        let (width, height) = if fullscreen {
            (desktop_width, desktop_height)
        } else {
            (width, height)
        };
        let mut window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .build()
            .unwrap();
        window
            .set_fullscreen(if fullscreen {
                sdl2::video::FullscreenType::Desktop
            } else {
                sdl2::video::FullscreenType::Off
            })
            .unwrap();
        let gl_context = window.gl_create_context().unwrap();
        window.gl_make_current(&gl_context).unwrap();
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().unwrap();
        log::debug!("created {}x{} window with OpenGL 3.3 core context", width, height);

        Self {
            sdl,
            video_subsystem,
            event_pump,
            driver: Arc::new(GlowDriver::new(window, gl_context, gl)),
        }
    }

    /// Runs the event loop, driving the handler's lifecycle hooks until the
    /// window is closed.
    pub fn run<H: EventHandler>(&mut self, handler: &mut H) {
        handler.on_load();

        'running: loop {
            for event in self.event_pump.poll_iter() {
                match event {
                    sdl2::event::Event::Quit { .. } => break 'running,
                    sdl2::event::Event::Window {
                        win_event: sdl2::event::WindowEvent::Resized(width, height),
                        ..
                    } => {
                        log::debug!("window resized to {}x{}", width, height);
                        handler.on_resize(width, height);
                    }
                    _ => {}
                }
            }

            handler.on_render_frame();
        }

        handler.on_unload();
    }
}
