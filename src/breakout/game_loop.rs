use std::mem;

use crate::breakout::audio::SoundEffect;
use crate::breakout::game_drawer::GameDrawer;
use crate::breakout::mechanics::{BreakoutMechanics, GameInput};
use crate::breakout::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// One game session: the game state plus the sound it triggers
pub struct BreakoutGame {
    mechanics: BreakoutMechanics,
    paddle_hit_sound: Box<dyn SoundEffect>,
}

impl BreakoutGame {
    pub fn new(mechanics: BreakoutMechanics, paddle_hit_sound: Box<dyn SoundEffect>) -> Self {
        Self {
            mechanics,
            paddle_hit_sound,
        }
    }

    pub fn mechanics(&self) -> &BreakoutMechanics {
        &self.mechanics
    }

    /// Input, physics, collisions and state update of one frame
    pub fn frame(&mut self, input: GameInput) -> LoopControl {
        if input.exit {
            log::info!("quit");
            return LoopControl::Quit;
        }
        let events = self.mechanics.time_step(input);
        if events.paddle_hit {
            self.paddle_hit_sound.play();
        }
        LoopControl::Continue
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        GameDrawer::new(&self.mechanics).draw(surface);
    }
}

/// Keeps key presses until a game frame consumes them.
/// The UI may refresh more often than the game ticks; held keys are sampled fresh each time.
#[derive(Clone, Debug, Default)]
pub struct InputLatch {
    restart: bool,
    exit: bool,
}

impl InputLatch {
    pub fn latch(&mut self, input: &GameInput) {
        self.restart |= input.restart;
        self.exit |= input.exit;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    pub fn take(&mut self, held: &GameInput) -> GameInput {
        GameInput {
            left: held.left,
            right: held.right,
            restart: mem::take(&mut self.restart),
            exit: self.exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_survives_until_taken() {
        let mut latch = InputLatch::default();
        latch.latch(&GameInput { restart: true, ..GameInput::none() });
        latch.latch(&GameInput::none());

        let held = GameInput { left: true, ..GameInput::none() };
        assert_eq!(latch.take(&held), GameInput { left: true, restart: true, ..GameInput::none() });
        assert_eq!(latch.take(&held), GameInput { left: true, ..GameInput::none() });
    }

    #[test]
    fn exit_sticks() {
        let mut latch = InputLatch::default();
        assert!(!latch.exit_requested());
        latch.latch(&GameInput { exit: true, ..GameInput::none() });
        assert!(latch.exit_requested());
        assert!(latch.take(&GameInput::none()).exit);
        assert!(latch.take(&GameInput::none()).exit);
    }
}
