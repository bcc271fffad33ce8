use egui::{Color32, Pos2};

use crate::breakout::algebra_2d::AaBB;

/// Bitmaps known to the game; a surface maps them to whatever it blits
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ball,
    Brick,
}

/// Something the game can be drawn on, in screen coordinates (0/0 = TOP / LEFT)
pub trait Surface {
    fn clear(&mut self, color: Color32);

    fn fill_rect(&mut self, rect: &AaBB, color: Color32);

    fn blit(&mut self, sprite: Sprite, rect: &AaBB);

    /// `size` is the font height in screen pixels
    fn text_centered(&mut self, center: Pos2, text: &str, size: f32, color: Color32);
}
