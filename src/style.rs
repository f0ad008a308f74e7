use crate::color::Rgb;

/// Visual style shared by both renderers.
///
/// Only the "dark" look is used: a grey-blue axes background, no grid
/// lines and no axis spines on a white figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub figure_background: Rgb,
    pub axes_background: Rgb,
    pub text: Rgb,
    pub show_grid: bool,
}

impl Style {
    pub fn dark() -> Self {
        Style {
            figure_background: Rgb::new(0xff, 0xff, 0xff),
            axes_background: Rgb::new(0xea, 0xea, 0xf2),
            text: Rgb::new(0x26, 0x26, 0x26),
            show_grid: false,
        }
    }
}
