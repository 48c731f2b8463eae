use std::sync::Arc;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{acquire, AppControl, Lifecycle, StartupError};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction, WgpuDriver};
use crate::input::{InputFrame, InputState, Key, KeyState};
use crate::scene::{Scene, SceneConfig};

use super::platform::WinitPlatform;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Zera".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, builds the scene and runs the loop until the window
    /// is closed or Escape is pressed.
    ///
    /// Returns the startup error when the window or the GPU could not be
    /// acquired. Shader failures are logged and do not end the run.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, scene: SceneConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, scene);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;
        log::info!("windowing shut down");

        match state.startup_error.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

/// Everything that lives for the duration of the loop.
///
/// Field order is drop order: scene resources, then the GPU context, then the
/// window.
struct WindowEntry {
    scene: Scene<WgpuDriver>,
    gpu: Gpu,
    window: Arc<Window>,
}

impl WindowEntry {
    /// One loop body: poll input, clear, draw, present.
    fn frame(&mut self, lifecycle: &mut Lifecycle, input: &InputState, input_frame: &InputFrame) {
        lifecycle.process_input(input, input_frame);

        if !self.gpu.is_drawable() {
            return;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                if self.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    lifecycle.request_close();
                }
                return;
            }
        };

        self.scene.render(self.gpu.driver(), &mut frame);
        self.window.pre_present_notify();
        self.gpu.present(frame);
    }
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    scene_config: SceneConfig,

    entry: Option<WindowEntry>,
    input: InputState,
    input_frame: InputFrame,
    lifecycle: Lifecycle,
    startup_error: Option<StartupError>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, scene_config: SceneConfig) -> Self {
        Self {
            config,
            gpu_init,
            scene_config,
            entry: None,
            input: InputState::default(),
            input_frame: InputFrame::default(),
            lifecycle: Lifecycle::new(),
            startup_error: None,
        }
    }

    fn teardown(&mut self) {
        if let Some(entry) = self.entry.take() {
            log::info!("tearing down");
            drop(entry);
            log::info!("GPU resources and window released");
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.startup_error.is_some() {
            return;
        }

        let mut platform = WinitPlatform {
            event_loop,
            config: &self.config,
            gpu_init: &self.gpu_init,
        };

        match acquire(&mut platform) {
            Ok((window, gpu)) => {
                let scene = Scene::new(gpu.driver(), &self.scene_config);
                window.request_redraw();
                self.entry = Some(WindowEntry { scene, gpu, window });
                self.lifecycle.enter_loop();
            }
            Err(e) => {
                self.startup_error = Some(e);
                self.lifecycle.request_close();
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle.begin_iteration() == AppControl::Exit {
            self.teardown();
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw, paced by present.
        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.lifecycle.request_close(),

            WindowEvent::Focused(focused) => self.input.set_focused(focused),

            WindowEvent::KeyboardInput { event, .. } => {
                let state = match event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                };
                self.input
                    .apply(&mut self.input_frame, map_key(event.physical_key), state);
            }

            WindowEvent::Resized(new_size) => {
                entry.gpu.resize(new_size);
                entry.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.window.inner_size();
                entry.gpu.resize(new_size);
                entry.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                entry.frame(&mut self.lifecycle, &self.input, &self.input_frame);

                // Clear per-frame transitions after the frame is consumed.
                self.input_frame.clear();
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(code) => Key::Unknown(code as u32),
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_is_the_only_named_key() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert!(matches!(
            map_key(PhysicalKey::Code(KeyCode::KeyW)),
            Key::Unknown(_)
        ));
    }

    #[test]
    fn default_window_config() {
        let config = RuntimeConfig::default();
        assert_eq!(config.title, "Zera");
        assert_eq!(config.initial_size, LogicalSize::new(800.0, 600.0));
        assert!(config.resizable);
    }
}
