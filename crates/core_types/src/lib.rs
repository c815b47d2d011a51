pub type PvName = String;

/// Opaque identifier for a widget registered on a screen.
///
/// Events coming back from the control system are addressed to a `WidgetId`;
/// the screen uses it to decide whether the target widget is still alive.
/// The raw value has no meaning inside this crate, it is just a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for WidgetId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

/// 8-bit RGB color used purely as a valid/invalid cue on surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground/background pair applied to a surface as a validity cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
}

impl Palette {
    /// Colors shown while the entered value is inside its bounds.
    pub const VALID: Self = Self {
        fg: Color::BLACK,
        bg: Color::WHITE,
    };

    /// Colors shown after an out-of-range or unparsable commit.
    pub const INVALID: Self = Self {
        fg: Color::RED,
        bg: Color::rgb(254, 254, 80),
    };
}
