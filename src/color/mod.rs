use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

const CHANNEL_ID_RED: u8 = 0;
const CHANNEL_ID_GREEN: u8 = 1;
const CHANNEL_ID_BLUE: u8 = 2;

/// Color channel edited by the rotary encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ColorChannel {
    #[default]
    Red = CHANNEL_ID_RED,
    Green = CHANNEL_ID_GREEN,
    Blue = CHANNEL_ID_BLUE,
}

impl ColorChannel {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            CHANNEL_ID_RED => Self::Red,
            CHANNEL_ID_GREEN => Self::Green,
            CHANNEL_ID_BLUE => Self::Blue,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// The channel after this one, wrapping Blue back to Red
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Pure full-intensity color of this channel, used for the preview pixel
    pub const fn primary(self) -> Rgb {
        match self {
            Self::Red => Rgb { r: 255, g: 0, b: 0 },
            Self::Green => Rgb { r: 0, g: 255, b: 0 },
            Self::Blue => Rgb { r: 0, g: 0, b: 255 },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}
