use std::path::{Path, PathBuf};

use anyhow::Context as _;
use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba};
use lazy_static::lazy_static;

use crate::breakout::mechanics::BreakoutConfig;
use crate::breakout::surface::Sprite;

#[rustfmt::skip]
lazy_static! {
    pub static ref ASSETS_DIR: PathBuf = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    pub static ref BALL_SPRITE_FILE: PathBuf = ASSETS_DIR.join("nugget.png");
    pub static ref BRICK_SPRITE_FILE: PathBuf = ASSETS_DIR.join("burger_brick.png");
    pub static ref PADDLE_HIT_SOUND_FILE: PathBuf = ASSETS_DIR.join("fart.wav");
}

pub type RgbaFrame = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Decodes an image file and scales it to exactly `size_x` x `size_y` pixels
pub fn load_sprite(path: &Path, size_x: u32, size_y: u32) -> anyhow::Result<RgbaFrame> {
    let image = image::open(path)
        .with_context(|| format!("failed to load sprite '{}'", path.display()))?
        .to_rgba8();
    let frame = imageops::resize(&image, size_x.max(1), size_y.max(1), FilterType::Triangle);
    log::info!(
        "loaded sprite '{}' ({}x{} -> {}x{})",
        path.display(),
        image.width(),
        image.height(),
        frame.width(),
        frame.height()
    );
    Ok(frame)
}

pub fn to_color_image(frame: &RgbaFrame) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [frame.width() as usize, frame.height() as usize],
        frame.as_raw(),
    )
}

/// Decoded sprite bitmaps, sized for the configured ball and brick dimensions
pub struct SpriteImages {
    pub ball: RgbaFrame,
    pub brick: RgbaFrame,
}

impl SpriteImages {
    pub fn load(config: &BreakoutConfig) -> anyhow::Result<Self> {
        Self::load_from(&BALL_SPRITE_FILE, &BRICK_SPRITE_FILE, config)
    }

    pub fn load_from(ball_file: &Path, brick_file: &Path, config: &BreakoutConfig) -> anyhow::Result<Self> {
        let ball_len = config.ball_edge_len.round() as u32;
        let brick_len_x = config.bricks.brick_len_x(config.screen_size.x).round() as u32;
        let brick_len_y = config.bricks.brick_len_y.round() as u32;
        Ok(Self {
            ball: load_sprite(ball_file, ball_len, ball_len)?,
            brick: load_sprite(brick_file, brick_len_x, brick_len_y)?,
        })
    }
}

/// Sprite bitmaps uploaded to the GPU
pub struct SpriteTextures {
    ball: TextureHandle,
    brick: TextureHandle,
}

impl SpriteTextures {
    pub fn upload(ctx: &Context, images: &SpriteImages) -> Self {
        Self {
            ball: ctx.load_texture("ball", to_color_image(&images.ball), TextureOptions::LINEAR),
            brick: ctx.load_texture("brick", to_color_image(&images.brick), TextureOptions::LINEAR),
        }
    }

    pub fn id(&self, sprite: Sprite) -> TextureId {
        match sprite {
            Sprite::Ball => self.ball.id(),
            Sprite::Brick => self.brick.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    fn write_png(dir: &Path, name: &str, size_x: u32, size_y: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(size_x, size_y, Rgba([255, 215, 0, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn sprite_is_scaled_to_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "ball.png", 64, 48);

        let frame = load_sprite(&path, 30, 30).unwrap();

        assert_eq!(frame.dimensions(), (30, 30));
        let pixel = frame.get_pixel(15, 15);
        for (channel, expected) in pixel.0.iter().zip([255u8, 215, 0, 255]) {
            assert!(channel.abs_diff(expected) <= 1, "{pixel:?}");
        }
    }

    #[test]
    fn missing_sprite_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = load_sprite(&path, 30, 30).err().unwrap();

        assert!(format!("{err}").contains("nope.png"));
    }

    #[test]
    fn sprite_images_follow_config() {
        let dir = tempfile::tempdir().unwrap();
        let ball = write_png(dir.path(), "ball.png", 10, 10);
        let brick = write_png(dir.path(), "brick.png", 10, 10);

        let images = SpriteImages::load_from(&ball, &brick, &BreakoutConfig::default()).unwrap();

        assert_eq!(images.ball.dimensions(), (30, 30));
        assert_eq!(images.brick.dimensions(), (75, 30));
        assert_eq!(to_color_image(&images.brick).size, [75, 30]);
    }

    #[test]
    fn shipped_assets_are_loadable() {
        assert!(SpriteImages::load(&BreakoutConfig::default()).is_ok());
    }
}
