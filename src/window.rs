//! SDL2 window, keyboard state and frame pacing.
//!
//! The window only shows finished frames: the pipeline draws into a
//! [`FrameBuffer`], which is uploaded to a streaming texture and presented.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels::PixelFormatEnum;

use crate::render::FrameBuffer;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_FPS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Logical camera actions currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub ascend: bool,
    pub descend: bool,
}

/// Caps the frame rate by sleeping away whatever is left of the frame budget.
pub struct FrameLimiter {
    target_fps: u32,
    frame_start: Instant,
}

impl FrameLimiter {
    /// `target_fps == 0` disables the cap.
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            frame_start: Instant::now(),
        }
    }

    /// Time allotted to one frame, or `None` when uncapped.
    pub fn frame_budget(&self) -> Option<Duration> {
        (self.target_fps > 0).then(|| Duration::from_nanos(1_000_000_000 / self.target_fps as u64))
    }

    /// How long to sleep after spending `render_time` on a frame. Never negative.
    pub fn sleep_time(&self, render_time: Duration) -> Duration {
        self.frame_budget()
            .map_or(Duration::ZERO, |budget| budget.saturating_sub(render_time))
    }

    /// Waits if necessary to maintain frame rate and returns the full frame time
    /// (render + sleep) since the previous call.
    pub fn wait_and_get_delta(&mut self) -> Duration {
        let pause = self.sleep_time(self.frame_start.elapsed());
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }

        let now = Instant::now();
        let delta = now - self.frame_start;
        self.frame_start = now;
        delta
    }
}

pub struct Window {
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;
        let texture = Self::create_texture(&texture_creator, width, height)?;

        log::info!("opened {width}x{height} window");

        Ok(Self {
            texture,
            texture_creator,
            canvas,
            event_pump,
        })
    }

    fn create_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>, String> {
        // SAFETY: the creator is boxed, owned by the same Window, and outlives
        // the texture because `texture` is declared (and dropped) first.
        let texture_creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())
    }

    /// Drains pending events. Close and Escape win over a resize.
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32),
                _ => {}
            }
        }
        result
    }

    /// Snapshot of the camera keys currently held.
    pub fn input_state(&self) -> InputState {
        let keys = self.event_pump.keyboard_state();
        let held = |codes: &[Scancode]| codes.iter().any(|&c| keys.is_scancode_pressed(c));
        InputState {
            forward: held(&[Scancode::W, Scancode::Up]),
            back: held(&[Scancode::S, Scancode::Down]),
            turn_left: held(&[Scancode::A, Scancode::Left]),
            turn_right: held(&[Scancode::D, Scancode::Right]),
            ascend: held(&[Scancode::LShift]),
            descend: held(&[Scancode::LCtrl]),
        }
    }

    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        self.texture
            .update(None, frame.as_bytes(), (frame.width() * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&self.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        log::debug!("window resized to {width}x{height}");
        Ok(())
    }
}
