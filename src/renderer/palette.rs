use crate::grid::{Classification, Symbol};

/// Represents a 24-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

pub const MEMBER_COLOR: RgbColor = RgbColor(150, 150, 150);
pub const OUTSIDE_COLOR: RgbColor = RgbColor(50, 50, 50);
pub const FALSE_MEMBER_COLOR: RgbColor = RgbColor(255, 0, 0);
pub const FALSE_OUTSIDE_COLOR: RgbColor = RgbColor(255, 255, 0);

/// Maps a cell to the color it is painted with.
pub trait Paint: Copy + Send + Sync {
    fn color(self) -> RgbColor;
}

impl Paint for Symbol {
    fn color(self) -> RgbColor {
        match self {
            Symbol::Member => MEMBER_COLOR,
            Symbol::Outside => OUTSIDE_COLOR,
        }
    }
}

impl Paint for Classification {
    fn color(self) -> RgbColor {
        match self {
            Classification::AgreeMember => MEMBER_COLOR,
            Classification::AgreeOutside => OUTSIDE_COLOR,
            Classification::FalseMember => FALSE_MEMBER_COLOR,
            Classification::FalseOutside => FALSE_OUTSIDE_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreement_uses_single_grid_colors() {
        assert_eq!(Classification::AgreeMember.color(), Symbol::Member.color());
        assert_eq!(Classification::AgreeOutside.color(), Symbol::Outside.color());
    }

    #[test]
    fn test_disagreement_colors() {
        assert_eq!(Classification::FalseMember.color(), RgbColor(255, 0, 0));
        assert_eq!(Classification::FalseOutside.color(), RgbColor(255, 255, 0));
    }
}
