#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color in either perceptual (Oklch) or device (sRGB) form.
///
/// Theme tones are authored in Oklch so lighten/darken adjustments stay
/// perceptually uniform; conversion to terminal RGB happens at paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Raise lightness by `amount`, clamped to [0, 1].
    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.as_oklch();
        Self::Oklch {
            l: (l + amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    /// Lower lightness by `amount`, clamped to [0, 1].
    pub fn darken(self, amount: f32) -> Self {
        let (l, c, h) = self.as_oklch();
        Self::Oklch {
            l: (l - amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    fn as_oklch(self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (l, c, h),
            Self::Rgb { r, g, b } => {
                use palette::{IntoColor, Oklch, Srgb};
                let srgb = Srgb::new(r, g, b).into_format::<f32>();
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
