use egui::epaint::RectShape;
use egui::{pos2, Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Vec2};

use crate::breakout::algebra_2d::AaBB;
use crate::breakout::assets::SpriteTextures;
use crate::breakout::surface::{Sprite, Surface};

/// Draws onto an egui painter; the game screen is stretched over the painter's clip rect
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    textures: &'a SpriteTextures,
    screen_size: Vec2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(
        painter: &'a Painter,
        textures: &'a SpriteTextures,
        screen_size: Vec2,
    ) -> Self {
        Self { painter, textures, screen_size }
    }

    /// pos / SCREEN_LEN = result / canvas_size
    /// => result = pos * canvas_size / SCREEN_LEN
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        let canvas = self.painter.clip_rect();
        canvas.min + Vec2::new(
            pos.x * canvas.width() / self.screen_size.x,
            pos.y * canvas.height() / self.screen_size.y,
        )
    }

    fn scale_y(
        &self,
        len_y: f32,
    ) -> f32 {
        len_y * self.painter.clip_rect().height() / self.screen_size.y
    }

    fn scale_rect(
        &self,
        rect: &AaBB,
    ) -> Rect {
        Rect::from_two_pos(self.scale(rect.min), self.scale(rect.max))
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), Rounding::none(), color);
    }

    fn fill_rect(&mut self, rect: &AaBB, color: Color32) {
        self.painter.add(RectShape::filled(self.scale_rect(rect), Rounding::none(), color));
    }

    fn blit(&mut self, sprite: Sprite, rect: &AaBB) {
        self.painter.image(
            self.textures.id(sprite),
            self.scale_rect(rect),
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn text_centered(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.scale(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(self.scale_y(size)),
            color,
        );
    }
}
