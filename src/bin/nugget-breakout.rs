use std::time::Instant;

use anyhow::anyhow;
use egui::{Context, Id, Key, LayerId, Order, Vec2};

use nugget_breakout::breakout::assets::{SpriteImages, SpriteTextures, PADDLE_HIT_SOUND_FILE};
use nugget_breakout::breakout::audio::{paddle_hit_sound, SoundEffect};
use nugget_breakout::breakout::frame_clock::FrameClock;
use nugget_breakout::breakout::game_loop::{BreakoutGame, InputLatch, LoopControl};
use nugget_breakout::breakout::mechanics::{BreakoutConfig, BreakoutMechanics, GameInput};
use nugget_breakout::breakout::painter_surface::PainterSurface;
use nugget_breakout::util::init_logging;

const WINDOW_TITLE: &str = "Nugget Game";

pub struct BreakoutApp {
    game: BreakoutGame,
    textures: SpriteTextures,
    clock: FrameClock,
    input_latch: InputLatch,
    window_size: Vec2,
}

impl BreakoutApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: BreakoutConfig,
        sprites: &SpriteImages,
        paddle_hit_sound: Box<dyn SoundEffect>,
    ) -> Self {
        let window_size = config.screen_size;
        let clock = FrameClock::new(config.frames_per_second, Instant::now());
        Self {
            game: BreakoutGame::new(BreakoutMechanics::with_config(config), paddle_hit_sound),
            textures: SpriteTextures::upload(&cc.egui_ctx, sprites),
            clock,
            input_latch: InputLatch::default(),
            window_size,
        }
    }

    fn read_ui_control(
        &self,
        ctx: &Context,
    ) -> GameInput {
        ctx.input(|i| GameInput {
            left: i.key_down(Key::ArrowLeft),
            right: i.key_down(Key::ArrowRight),
            restart: i.key_pressed(Key::Space),
            exit: i.key_pressed(Key::Escape),
        })
    }

    fn draw_game_content(&self, ctx: &Context) {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        let mut surface = PainterSurface::new(&painter, &self.textures, self.window_size);
        self.game.render(&mut surface);
    }
}

impl eframe::App for BreakoutApp {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        frame.set_window_size(self.window_size);

        let held = self.read_ui_control(ctx);
        self.input_latch.latch(&held);

        let now = Instant::now();
        let due_ticks = self.clock.due_ticks(now);
        // quitting does not wait for the next tick
        let ticks = match self.input_latch.exit_requested() {
            true => due_ticks.max(1),
            false => due_ticks,
        };
        for _ in 0..ticks {
            let input = self.input_latch.take(&held);
            if self.game.frame(input) == LoopControl::Quit {
                frame.close();
                return;
            }
        }

        self.draw_game_content(ctx);
        ctx.request_repaint_after(self.clock.until_next_tick(Instant::now()));
    }
}

fn breakout_user_game() -> anyhow::Result<()> {
    let config = BreakoutConfig::default();
    let sprites = SpriteImages::load(&config)?;
    let sound = paddle_hit_sound(&PADDLE_HIT_SOUND_FILE)?;

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(config.screen_size),
        resizable: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    log::info!("starting {WINDOW_TITLE}");
    eframe::run_native(WINDOW_TITLE, native_options, Box::new(move |cc| {
        Box::new(BreakoutApp::new(cc, config, &sprites, sound))
    }))
    .map_err(|e| anyhow!("window failed: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    breakout_user_game()
}
