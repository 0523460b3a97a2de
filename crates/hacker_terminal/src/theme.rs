use profile_store::ThemeName;

/// 24-bit colour, emitted as an SGR truecolor sequence by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour roles used across every screen. Status colours are shared by all
/// palettes so success and error lines read the same under any theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub muted: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
}

static GREEN: Palette = Palette {
    primary: Rgb(0, 255, 65),
    secondary: Rgb(0, 217, 255),
    muted: Rgb(74, 157, 95),
    success: Rgb(0, 255, 65),
    warning: Rgb(255, 170, 0),
    error: Rgb(255, 0, 85),
};

static CYAN: Palette = Palette {
    primary: Rgb(0, 217, 255),
    secondary: Rgb(0, 255, 65),
    muted: Rgb(74, 157, 170),
    success: Rgb(0, 255, 65),
    warning: Rgb(255, 170, 0),
    error: Rgb(255, 0, 85),
};

static PURPLE: Palette = Palette {
    primary: Rgb(217, 70, 239),
    secondary: Rgb(168, 85, 247),
    muted: Rgb(157, 74, 170),
    success: Rgb(0, 255, 65),
    warning: Rgb(255, 170, 0),
    error: Rgb(255, 0, 85),
};

static RED: Palette = Palette {
    primary: Rgb(255, 0, 85),
    secondary: Rgb(255, 107, 157),
    muted: Rgb(170, 74, 107),
    success: Rgb(0, 255, 65),
    warning: Rgb(255, 170, 0),
    error: Rgb(255, 0, 85),
};

pub fn palette(theme: ThemeName) -> &'static Palette {
    match theme {
        ThemeName::Green => &GREEN,
        ThemeName::Cyan => &CYAN,
        ThemeName::Purple => &PURPLE,
        ThemeName::Red => &RED,
    }
}
