//! Color model and white-channel blending.

pub use smart_leds::hsv::hsv2rgb;
use smart_leds::{RGB8, hsv::Hsv as HSV};

use crate::math8::{blend8, scale8};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Warm-amber reference color the warm-white channel blends toward.
pub const WARM_WHITE_REFERENCE: Rgb = Rgb {
    r: 0xFF,
    g: 0xA9,
    b: 0x31,
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel of a color by an 8-bit factor
#[inline]
pub fn scale_color(color: Rgb, factor: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, factor),
        g: scale8(color.g, factor),
        b: scale8(color.b, factor),
    }
}

/// Convert RGB to HSV (all channels are 0-255).
///
/// Hue is represented on a 0-255 circle, matching `smart_leds::hsv::Hsv`.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r;
    let g = rgb.g;
    let b = rgb.b;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max.wrapping_sub(min);

    // Value is the max channel.
    let val = max;

    // Saturation: delta / max
    let sat = if max == 0 {
        0
    } else {
        ((u16::from(delta) * 255) / u16::from(max)) as u8
    };

    // Hue: 0-255 mapping across the color wheel.
    // Uses a common integer approximation: 0, 85, 171 offsets for R/G/B sectors.
    let hue = if delta == 0 {
        0
    } else if max == r {
        // between yellow & magenta
        let h = (43i16 * (i16::from(g) - i16::from(b))) / i16::from(delta);
        if h < 0 { (h + 256) as u8 } else { h as u8 }
    } else if max == g {
        // between cyan & yellow
        let h = 85i16 + (43i16 * (i16::from(b) - i16::from(r))) / i16::from(delta);
        if h < 0 { (h + 256) as u8 } else { h as u8 }
    } else {
        // max == b, between magenta & cyan
        let h = 171i16 + (43i16 * (i16::from(r) - i16::from(g))) / i16::from(delta);
        if h < 0 { (h + 256) as u8 } else { h as u8 }
    };

    Hsv { hue, sat, val }
}

/// Apply the white and warm-white channels to a base color.
///
/// Two-step transform, order is fixed for reproducible output:
/// 1. Desaturate in proportion to `white` (255 = fully desaturated).
/// 2. Blend toward [`WARM_WHITE_REFERENCE`] in proportion to `warm_white`.
pub fn white_blend(color: Rgb, white: u8, warm_white: u8) -> Rgb {
    if white == 0 && warm_white == 0 {
        return color;
    }

    let mut hsv = rgb2hsv(color);
    hsv.sat = scale8(hsv.sat, 255 - white);
    let desaturated = hsv2rgb(hsv);

    blend_colors(desaturated, WARM_WHITE_REFERENCE, warm_white)
}
