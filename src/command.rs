//! The wire-level light command.
//!
//! A [`LightCommand`] carries the full desired light state. It is
//! constructed on the controller, transmitted verbatim, and replaced
//! wholesale on the receiver, never merged field by field.

use crate::color::{Rgb, white_blend};

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_FADE: &str = "fade";
const EFFECT_NAME_STROBE: &str = "strobe";
const EFFECT_NAME_PULSE: &str = "pulse";
const EFFECT_NAME_SPARKLE: &str = "sparkle";
const EFFECT_NAME_WAVE: &str = "wave";

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_RAINBOW: u8 = 1;
const EFFECT_ID_FADE: u8 = 2;
const EFFECT_ID_STROBE: u8 = 3;
const EFFECT_ID_PULSE: u8 = 4;
const EFFECT_ID_SPARKLE: u8 = 5;
const EFFECT_ID_WAVE: u8 = 6;

/// Known animation effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectKind {
    #[default]
    Solid = EFFECT_ID_SOLID,
    Rainbow = EFFECT_ID_RAINBOW,
    Fade = EFFECT_ID_FADE,
    Strobe = EFFECT_ID_STROBE,
    Pulse = EFFECT_ID_PULSE,
    Sparkle = EFFECT_ID_SPARKLE,
    Wave = EFFECT_ID_WAVE,
}

impl EffectKind {
    /// Decode a raw effect id.
    ///
    /// Unknown values fall back to `Solid` so a command from a newer
    /// controller still renders something sensible.
    pub const fn from_raw(value: u8) -> Self {
        match value {
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_FADE => Self::Fade,
            EFFECT_ID_STROBE => Self::Strobe,
            EFFECT_ID_PULSE => Self::Pulse,
            EFFECT_ID_SPARKLE => Self::Sparkle,
            EFFECT_ID_WAVE => Self::Wave,
            _ => Self::Solid,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Fade => EFFECT_NAME_FADE,
            Self::Strobe => EFFECT_NAME_STROBE,
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::Sparkle => EFFECT_NAME_SPARKLE,
            Self::Wave => EFFECT_NAME_WAVE,
        }
    }
}

/// Size of an encoded [`LightCommand`] in bytes
pub const COMMAND_WIRE_SIZE: usize = 8;

/// Full desired light state, compared by value.
///
/// `brightness` and `speed` are stored as raw 8-bit fields but interpreted
/// as 1-100 percentages; out-of-range values are clamped where they are
/// consumed ([`LightCommand::brightness_scale`], speed mapping), never by
/// the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCommand {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
    pub warm_white: u8,
    pub brightness: u8,
    pub effect: EffectKind,
    pub speed: u8,
}

impl Default for LightCommand {
    fn default() -> Self {
        Self {
            red: 255,
            green: 0,
            blue: 0,
            white: 0,
            warm_white: 0,
            brightness: 16,
            effect: EffectKind::Solid,
            speed: 50,
        }
    }
}

impl LightCommand {
    /// Encode to the fixed 8-byte wire record
    pub const fn encode(&self) -> [u8; COMMAND_WIRE_SIZE] {
        [
            self.red,
            self.green,
            self.blue,
            self.white,
            self.warm_white,
            self.brightness,
            self.effect as u8,
            self.speed,
        ]
    }

    /// Decode from a wire record.
    ///
    /// Returns `None` only on length mismatch; every field value is
    /// accepted (unknown effects decode as `Solid`).
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != COMMAND_WIRE_SIZE {
            return None;
        }
        Some(Self {
            red: bytes[0],
            green: bytes[1],
            blue: bytes[2],
            white: bytes[3],
            warm_white: bytes[4],
            brightness: bytes[5],
            effect: EffectKind::from_raw(bytes[6]),
            speed: bytes[7],
        })
    }

    /// Base RGB color of the command
    pub const fn color(&self) -> Rgb {
        Rgb {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    /// Base color with the white channels blended in
    pub fn blended_color(&self) -> Rgb {
        white_blend(self.color(), self.white, self.warm_white)
    }

    /// Overall output brightness as a 0-255 scalar for the pixel sink.
    ///
    /// Zero means off; anything else is clamped to the 1-100 percent
    /// range before scaling.
    #[allow(clippy::cast_possible_truncation)]
    pub fn brightness_scale(&self) -> u8 {
        if self.brightness == 0 {
            return 0;
        }
        let percent = u16::from(self.brightness.min(100));
        (percent * 255 / 100) as u8
    }
}
