use egui::{Color32, Pos2};

use crate::breakout::mechanics::{Assert, Ball, BreakoutMechanics, Brick, Paddle, RoundState};
use crate::breakout::surface::{Sprite, Surface};

pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x14, 0x1e, 0x32);
pub const PADDLE_COLOR: Color32 = Color32::WHITE;
pub const WIN_TEXT_COLOR: Color32 = Color32::from_rgb(255, 215, 0);
pub const GAME_OVER_TEXT_COLOR: Color32 = Color32::WHITE;

pub const WIN_MESSAGE: &str = "YOU WIN!";
pub const GAME_OVER_MESSAGE: &str = "GAME OVER";
pub const RESTART_PROMPT: &str = "Press SPACE to play again";

const MESSAGE_FONT_SIZE: f32 = 72.0;
const PROMPT_FONT_SIZE: f32 = 36.0;
const PROMPT_OFFSET_Y: f32 = 60.0;

pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

impl Draw for Paddle {
    fn draw(&self, surface: &mut dyn Surface) {
        self.assert();
        surface.fill_rect(&self.shape, PADDLE_COLOR);
    }
}

impl Draw for Ball {
    fn draw(&self, surface: &mut dyn Surface) {
        self.assert();
        surface.blit(Sprite::Ball, &self.shape);
    }
}

impl Draw for Brick {
    fn draw(&self, surface: &mut dyn Surface) {
        if self.alive {
            surface.blit(Sprite::Brick, &self.shape);
        }
    }
}

/// Renders one complete frame of a game state
pub struct GameDrawer<'a> {
    game_state: &'a BreakoutMechanics,
}

impl<'a> GameDrawer<'a> {
    pub fn new(game_state: &'a BreakoutMechanics) -> Self {
        Self { game_state }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let state = self.game_state;
        surface.clear(BACKGROUND_COLOR);
        state.paddle.draw(surface);
        // the ball is gone while the round is over
        if !state.state.game_over() {
            state.ball.draw(surface);
        }
        for brick in &state.bricks.bricks {
            brick.draw(surface);
        }
        if let RoundState::RoundEnd { won } = state.state {
            self.round_end_overlay(surface, won);
        }
    }

    fn round_end_overlay(&self, surface: &mut dyn Surface, won: bool) {
        let screen = self.game_state.config.screen_size;
        let center = Pos2::new(screen.x / 2.0, screen.y / 2.0);
        let (message, color) = match won {
            true => (WIN_MESSAGE, WIN_TEXT_COLOR),
            false => (GAME_OVER_MESSAGE, GAME_OVER_TEXT_COLOR),
        };
        surface.text_centered(center, message, MESSAGE_FONT_SIZE, color);
        surface.text_centered(
            Pos2::new(center.x, center.y + PROMPT_OFFSET_Y),
            RESTART_PROMPT,
            PROMPT_FONT_SIZE,
            Color32::WHITE,
        );
    }
}
