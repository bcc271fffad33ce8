use egui::{Pos2, Vec2};

/// Axis-aligned Bounding Box
///
/// TOP / LEFT corner is `min`, the y axis points downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Pos2,
    pub max: Pos2,
}

impl AaBB {
    pub fn from_min_size(min: Pos2, size: Vec2) -> Self {
        AaBB { min, max: min + size }
    }

    pub fn from_center_size(center: Pos2, size: Vec2) -> Self {
        Self::from_min_size(center - size / 2.0, size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn translate(&self, value: Vec2) -> Self {
        AaBB {
            min: self.min + value,
            max: self.max + value,
        }
    }

    /// Same size, top-left corner placed at `min`
    pub fn with_min(&self, min: Pos2) -> Self {
        Self::from_min_size(min, self.size())
    }

    /// Strict overlap: boxes which only share an edge do not collide
    pub fn overlaps(&self, other: &AaBB) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use egui::{Pos2, Vec2};
    use rstest::rstest;

    use super::AaBB;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> AaBB {
        AaBB::from_min_size(Pos2::new(x, y), Vec2::new(w, h))
    }

    #[rstest]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(5.0, 5.0, 10.0, 10.0), true)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(10.0, 0.0, 10.0, 10.0), false)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(0.0, 10.0, 10.0, 10.0), false)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(2.0, 2.0, 2.0, 2.0), true)]
    #[case(rect(0.0, 0.0, 10.0, 10.0), rect(-20.0, 3.0, 5.0, 5.0), false)]
    fn overlap(#[case] a: AaBB, #[case] b: AaBB, #[case] expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[test]
    fn center_based_construction() {
        let r = AaBB::from_center_size(Pos2::new(400.0, 300.0), Vec2::new(30.0, 30.0));
        assert_eq!(r.min, Pos2::new(385.0, 285.0));
        assert_eq!(r.center(), Pos2::new(400.0, 300.0));
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 30.0);
    }

    #[test]
    fn translate_keeps_size() {
        let r = rect(1.0, 2.0, 3.0, 4.0).translate(Vec2::new(10.0, -2.0));
        assert_eq!(r, rect(11.0, 0.0, 3.0, 4.0));
        assert_eq!(r.with_min(Pos2::ZERO), rect(0.0, 0.0, 3.0, 4.0));
    }
}
