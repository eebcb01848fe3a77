use std::collections::VecDeque;

use common::engine::{Direction, InputSource};
use eframe::egui;

/// Requests older than this are dropped; nobody can press more than a few
/// keys in one tick.
const MAX_QUEUED_REQUESTS: usize = 8;

#[derive(Default)]
pub struct KeyboardInput {
    requests: VecDeque<Direction>,
    quit: bool,
    pause_toggled: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this frame's key presses and the window close button.
    pub fn collect(&mut self, ctx: &egui::Context) {
        let (keys, close_requested) = ctx.input(|i| {
            let keys: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Some(*key),
                    _ => None,
                })
                .collect();
            (keys, i.viewport().close_requested())
        });

        for key in keys {
            self.handle_key(key);
        }
        if close_requested {
            self.quit = true;
        }
    }

    pub fn handle_key(&mut self, key: egui::Key) {
        let direction = match key {
            egui::Key::ArrowUp | egui::Key::W => Direction::Up,
            egui::Key::ArrowDown | egui::Key::S => Direction::Down,
            egui::Key::ArrowLeft | egui::Key::A => Direction::Left,
            egui::Key::ArrowRight | egui::Key::D => Direction::Right,
            egui::Key::Escape => {
                self.quit = true;
                return;
            }
            egui::Key::P | egui::Key::Space => {
                self.pause_toggled = !self.pause_toggled;
                return;
            }
            _ => return,
        };

        if self.requests.len() == MAX_QUEUED_REQUESTS {
            self.requests.pop_front();
        }
        self.requests.push_back(direction);
    }

    pub fn take_pause_toggle(&mut self) -> bool {
        std::mem::take(&mut self.pause_toggled)
    }

    /// Turns pressed while paused are not carried into the next tick.
    pub fn discard_requests(&mut self) {
        self.requests.clear();
    }
}

impl InputSource for KeyboardInput {
    fn quit_requested(&self) -> bool {
        self.quit
    }

    fn next_request(&mut self) -> Option<Direction> {
        self.requests.pop_front()
    }
}
