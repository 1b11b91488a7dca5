//! SDL2 platform glue: window, input sampling, line drawing, frame pacing.
//!
//! Only compiled with the `sdl` feature.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::Color;
use sdl2::rect::Point;

use crate::camera::MovementInput;
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::math::vec2::Vec2;
use crate::projector::LineSink;

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const WIREFRAME: Color = Color::RGB(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    /// Relative pointer motion in pixels.
    MouseMotion { xrel: i32, yrel: i32 },
}

/// Paces the frame loop and measures the real elapsed time between frames.
pub struct FrameLimiter {
    previous_counter: u64,
    frame_time: f32,
}

impl FrameLimiter {
    pub fn new(window: &Window, config: &ViewerConfig) -> Self {
        Self {
            previous_counter: window.timer().performance_counter(),
            frame_time: config.frame_time(),
        }
    }

    /// Waits until the frame budget is used up and returns the delta time in
    /// seconds since the previous call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> f32 {
        let timer = window.timer();
        let frequency = timer.performance_frequency() as f64;
        let elapsed =
            |now: u64| (now.saturating_sub(self.previous_counter)) as f64 / frequency;

        let mut current = timer.performance_counter();
        let remaining = self.frame_time as f64 - elapsed(current);
        if remaining > 0.0 {
            std::thread::sleep(std::time::Duration::from_secs_f64(remaining));
            current = timer.performance_counter();
        }

        let delta_time = elapsed(current) as f32;
        self.previous_counter = current;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens a fixed-size window with relative mouse mode enabled.
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Window)?;
        let video_subsystem = sdl_context.video().map_err(Error::Window)?;
        let timer_subsystem = sdl_context.timer().map_err(Error::Window)?;

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(Error::Window)?;

        sdl_context.mouse().set_relative_mouse_mode(true);

        Ok(Self {
            canvas,
            event_pump,
            timer_subsystem,
            width: config.width,
            height: config.height,
        })
    }

    /// Drains pending events. Escape counts as a quit request.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => Some(WindowEvent::Quit),
                Event::MouseMotion { xrel, yrel, .. } => {
                    Some(WindowEvent::MouseMotion { xrel, yrel })
                }
                _ => None,
            })
            .collect()
    }

    /// Samples the held movement keys.
    ///
    /// W/S forward/back, D/A right/left, Left Ctrl up, Space down.
    pub fn movement_input(&self) -> MovementInput {
        let keys = self.event_pump.keyboard_state();
        MovementInput {
            forward: keys.is_scancode_pressed(Scancode::W),
            back: keys.is_scancode_pressed(Scancode::S),
            right: keys.is_scancode_pressed(Scancode::D),
            left: keys.is_scancode_pressed(Scancode::A),
            up: keys.is_scancode_pressed(Scancode::LCtrl),
            down: keys.is_scancode_pressed(Scancode::Space),
        }
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();
        self.canvas.set_draw_color(WIREFRAME);
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

impl LineSink for Window {
    fn draw_line(&mut self, from: Vec2, to: Vec2) -> Result<()> {
        self.canvas
            .draw_line(
                Point::new(from.x as i32, from.y as i32),
                Point::new(to.x as i32, to.y as i32),
            )
            .map_err(Error::Window)
    }
}
