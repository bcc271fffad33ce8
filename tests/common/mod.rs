#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use egui::{Color32, Pos2, Vec2};

use nugget_breakout::breakout::algebra_2d::AaBB;
use nugget_breakout::breakout::audio::SoundEffect;
use nugget_breakout::breakout::mechanics::{Ball, GameInput};
use nugget_breakout::breakout::surface::{Sprite, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Color32),
    FillRect(AaBB, Color32),
    Blit(Sprite, AaBB),
    Text(Pos2, String, Color32),
}

/// Remembers every draw call in order
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn blits_of(&self, sprite: Sprite) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Blit(s, _) if *s == sprite)).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls.iter()
            .filter_map(|c| match c {
                DrawCall::Text(_, text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color32) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: &AaBB, color: Color32) {
        self.calls.push(DrawCall::FillRect(*rect, color));
    }

    fn blit(&mut self, sprite: Sprite, rect: &AaBB) {
        self.calls.push(DrawCall::Blit(sprite, *rect));
    }

    fn text_centered(&mut self, center: Pos2, text: &str, _size: f32, color: Color32) {
        self.calls.push(DrawCall::Text(center, text.to_string(), color));
    }
}

/// Counts how often it was played; clones share the counter
#[derive(Clone, Default)]
pub struct CountingSound {
    pub played: Rc<Cell<u32>>,
}

impl SoundEffect for CountingSound {
    fn play(&self) {
        self.played.set(self.played.get() + 1);
    }
}

pub fn place_ball(ball: &mut Ball, center: Pos2, velocity: Vec2) {
    ball.shape = AaBB::from_center_size(center, ball.shape.size());
    ball.velocity = velocity;
}

pub fn idle() -> GameInput {
    GameInput::none()
}

pub fn restart() -> GameInput {
    GameInput { restart: true, ..GameInput::none() }
}
