use egui::{Pos2, Vec2};
use itertools::Itertools;

use crate::breakout::algebra_2d::AaBB;

/// TOP / LEFT corner is 0/0
pub const SCREEN_LEN_X: f32 = 800.0;
pub const SCREEN_LEN_Y: f32 = 600.0;

pub const FRAMES_PER_SECOND: u32 = 60;

const PADDLE_LEN_X: f32 = 120.0;
const PADDLE_LEN_Y: f32 = 20.0;
const PADDLE_CENTER_POS_Y: f32 = 550.0;
const PADDLE_SPEED_PER_FRAME: f32 = 8.0;

const BALL_EDGE_LEN: f32 = 30.0;
const BALL_SPEED_PER_FRAME: f32 = 4.0;

const BRICKS_SETUP_ROWS: usize = 5;
const BRICKS_SETUP_COLS: usize = 10;
const BRICKS_SETUP_SPACING: f32 = 5.0;
const BRICK_LEN_Y: f32 = 30.0;
const BRICKS_SETUP_FIRST_ROW_TOP_Y: f32 = 80.0;

/// Tunable geometry and speeds of one game
#[derive(Clone, Debug, PartialEq)]
pub struct BreakoutConfig {
    pub screen_size: Vec2,
    pub frames_per_second: u32,
    pub paddle_size: Vec2,
    pub paddle_center_y: f32,
    /// pixel per frame
    pub paddle_speed: f32,
    pub ball_edge_len: f32,
    /// pixel per frame, applied to each velocity component on reset
    pub ball_speed: f32,
    pub bricks: BrickLayout,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            screen_size: Vec2::new(SCREEN_LEN_X, SCREEN_LEN_Y),
            frames_per_second: FRAMES_PER_SECOND,
            paddle_size: Vec2::new(PADDLE_LEN_X, PADDLE_LEN_Y),
            paddle_center_y: PADDLE_CENTER_POS_Y,
            paddle_speed: PADDLE_SPEED_PER_FRAME,
            ball_edge_len: BALL_EDGE_LEN,
            ball_speed: BALL_SPEED_PER_FRAME,
            bricks: BrickLayout::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrickLayout {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f32,
    pub brick_len_y: f32,
    pub first_row_top_y: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICKS_SETUP_ROWS,
            cols: BRICKS_SETUP_COLS,
            spacing: BRICKS_SETUP_SPACING,
            brick_len_y: BRICK_LEN_Y,
            first_row_top_y: BRICKS_SETUP_FIRST_ROW_TOP_Y,
        }
    }
}

impl BrickLayout {
    /// Brick width, so that one row plus spacing on both sides exactly fills `screen_len_x`
    pub fn brick_len_x(&self, screen_len_x: f32) -> f32 {
        (screen_len_x - (self.cols + 1) as f32 * self.spacing) / self.cols as f32
    }
}

/// Input snapshot of one frame
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameInput {
    pub left: bool,
    pub right: bool,
    pub restart: bool,
    pub exit: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct Paddle {
    pub shape: AaBB,
    pub speed: f32,
    screen_len_x: f32,
}

impl Paddle {
    pub fn new(config: &BreakoutConfig) -> Self {
        Self {
            shape: AaBB::from_center_size(
                Pos2::new(config.screen_size.x / 2.0, config.paddle_center_y),
                config.paddle_size,
            ),
            speed: config.paddle_speed,
            screen_len_x: config.screen_size.x,
        }
    }

    /// Left and right apply independently; holding both keys cancels out.
    /// The result is clamped into the screen, so no overshoot at the walls.
    pub fn move_with(&mut self, input: &GameInput) {
        let mut delta_x = 0.0;
        if input.left {
            delta_x -= self.speed;
        }
        if input.right {
            delta_x += self.speed;
        }
        if delta_x == 0.0 {
            return;
        }

        let potential_pos = self.shape.translate(Vec2::new(delta_x, 0.0));
        let min_x = potential_pos.min.x.clamp(0.0, self.screen_len_x - potential_pos.width());
        self.shape = potential_pos.with_min(Pos2::new(min_x, potential_pos.min.y));
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BallTravel {
    InPlay,
    /// left the screen at the bottom and was put back to the center
    Respawned,
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub shape: AaBB,
    /// pixel per frame
    pub velocity: Vec2,
    base_speed: f32,
    screen_size: Vec2,
}

impl Ball {
    pub fn new(config: &BreakoutConfig) -> Self {
        let mut ball = Self {
            shape: AaBB::from_min_size(Pos2::ZERO, Vec2::splat(config.ball_edge_len)),
            velocity: Vec2::ZERO,
            base_speed: config.ball_speed,
            screen_size: config.screen_size,
        };
        ball.reset();
        ball
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// center of the screen, moving right and up
    pub fn reset(&mut self) {
        self.shape = AaBB::from_center_size((self.screen_size / 2.0).to_pos2(), self.shape.size());
        self.velocity = Vec2::new(self.base_speed, -self.base_speed);
    }

    /// Move one frame forward and reflect at the side walls and the ceiling.
    ///
    /// A ball touching a wall is put back inside and its velocity points away from the wall,
    /// so one contact reverses a component exactly once.
    pub fn update(&mut self) -> BallTravel {
        self.shape = self.shape.translate(self.velocity);

        if self.shape.min.x <= 0.0 {
            self.shape = self.shape.with_min(Pos2::new(0.0, self.shape.min.y));
            self.velocity.x = self.velocity.x.abs();
        } else if self.shape.max.x >= self.screen_size.x {
            self.shape = self.shape.with_min(Pos2::new(self.screen_size.x - self.shape.width(), self.shape.min.y));
            self.velocity.x = -self.velocity.x.abs();
        }

        if self.shape.min.y <= 0.0 {
            self.shape = self.shape.with_min(Pos2::new(self.shape.min.x, 0.0));
            self.velocity.y = self.velocity.y.abs();
        }

        if self.shape.min.y > self.screen_size.y {
            self.reset();
            BallTravel::Respawned
        } else {
            BallTravel::InPlay
        }
    }

    pub fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Brick {
    pub shape: AaBB,
    pub alive: bool,
}

/// Fixed arena of bricks in layout order (row by row, left to right).
/// Bricks are never removed, only marked dead.
#[derive(Clone, Debug)]
pub struct BrickGrid {
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn create(layout: &BrickLayout, screen_len_x: f32) -> Self {
        let brick_len_x = layout.brick_len_x(screen_len_x);
        let mut bricks = Vec::with_capacity(layout.rows * layout.cols);
        for row in 0..layout.rows {
            let upper_y = layout.first_row_top_y + row as f32 * (layout.brick_len_y + layout.spacing);
            for col in 0..layout.cols {
                let left_x = layout.spacing + col as f32 * (brick_len_x + layout.spacing);
                bricks.push(Brick {
                    shape: AaBB::from_min_size(Pos2::new(left_x, upper_y), Vec2::new(brick_len_x, layout.brick_len_y)),
                    alive: true,
                });
            }
        }
        Self { bricks }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.alive)
    }

    /// Kills the first alive brick (in layout order) overlapping `shape` and returns its index
    pub fn hit_first_alive(&mut self, shape: &AaBB) -> Option<usize> {
        let (idx, brick) = self.bricks
            .iter_mut()
            .find_position(|b| b.alive && b.shape.overlaps(shape))?;
        brick.alive = false;
        Some(idx)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    RoundEnd { won: bool },
}

impl RoundState {
    pub fn game_over(&self) -> bool {
        matches!(self, RoundState::RoundEnd { .. })
    }

    pub fn won(&self) -> bool {
        matches!(self, RoundState::RoundEnd { won: true })
    }
}

/// What happened during one time step
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub paddle_hit: bool,
    pub brick_destroyed: Option<usize>,
    pub ball_respawned: bool,
    pub round_ended: bool,
    pub restarted: bool,
}

#[derive(Clone, Debug)]
pub struct BreakoutMechanics {
    pub config: BreakoutConfig,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub state: RoundState,
}

impl Default for BreakoutMechanics {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakoutMechanics {
    pub fn new() -> Self {
        Self::with_config(BreakoutConfig::default())
    }

    pub fn with_config(config: BreakoutConfig) -> Self {
        Self {
            paddle: Paddle::new(&config),
            ball: Ball::new(&config),
            bricks: BrickGrid::create(&config.bricks, config.screen_size.x),
            state: RoundState::Playing,
            config,
        }
    }

    /// New round: fresh bricks, ball and paddle back to their start positions
    pub fn restart(&mut self) {
        self.bricks = BrickGrid::create(&self.config.bricks, self.config.screen_size.x);
        self.ball.reset();
        self.paddle = Paddle::new(&self.config);
        self.state = RoundState::Playing;
    }

    /// Advance the game by one frame
    pub fn time_step(&mut self, input: GameInput) -> StepEvents {
        let mut events = StepEvents::default();

        if self.state.game_over() {
            if input.restart {
                self.restart();
                events.restarted = true;
                log::info!("new round started");
            }
            return events;
        }

        self.paddle.move_with(&input);

        if self.ball.update() == BallTravel::Respawned {
            events.ball_respawned = true;
            log::debug!("ball left the screen, respawned at center");
        }

        // only a falling ball can hit the paddle, otherwise it would stick in it for several frames
        if self.ball.velocity.y > 0.0 && self.ball.shape.overlaps(&self.paddle.shape) {
            self.deflect_from_paddle();
            events.paddle_hit = true;
        }

        if let Some(idx) = self.bricks.hit_first_alive(&self.ball.shape) {
            self.ball.bounce_y();
            events.brick_destroyed = Some(idx);
            log::debug!("brick {idx} destroyed, {} left", self.bricks.alive_count());
        }

        if self.bricks.all_destroyed() {
            self.state = RoundState::RoundEnd { won: true };
            events.round_ended = true;
            log::info!("all bricks destroyed - round won");
        }

        events
    }

    /// Reflect upwards; the horizontal speed follows the hit position on the paddle
    fn deflect_from_paddle(&mut self) {
        let offset = deflection_offset(&self.ball.shape, &self.paddle.shape);
        self.ball.bounce_y();
        self.ball.velocity.x = offset * self.ball.base_speed();
    }
}

/// Horizontal distance of the ball center from the paddle center, in half paddle widths, within [-1, 1]
pub fn deflection_offset(ball: &AaBB, paddle: &AaBB) -> f32 {
    ((ball.center().x - paddle.center().x) / (paddle.width() / 2.0)).clamp(-1.0, 1.0)
}

pub trait Assert {
    fn assert(&self);
}

impl Assert for Paddle {
    fn assert(&self) {
        assert!(self.shape.min.x >= 0.0);
        assert!(self.shape.max.x <= self.screen_len_x);
    }
}

impl Assert for Ball {
    fn assert(&self) {
        assert!(self.shape.min.x >= 0.0);
        assert!(self.shape.max.x <= self.screen_size.x);
        assert!(self.shape.min.y >= 0.0);
        assert!(self.shape.min.y <= self.screen_size.y);
    }
}
