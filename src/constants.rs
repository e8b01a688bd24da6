//! Compile-time tables for the color model
//!
//! Channel limits, the hex grammar, built-in palette data and the
//! geometry used by the swatch presentation helpers.

/// RGB channel bounds (inclusive)
pub mod channel {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 255;
}

/// `#` followed by exactly 3 or 6 hexadecimal digits, either case
pub const HEX_PATTERN: &str = r"^#(?:[0-9a-fA-F]{3}){1,2}$";

/// Seaborn ("tab10"-like) color scheme
pub mod seaborn {
    /// Registry name of the scheme
    pub const NAME: &str = "seaborn";

    pub const BLUE: [u8; 3] = [31, 119, 180];
    pub const ORANGE: [u8; 3] = [255, 127, 14];
    pub const GREEN: [u8; 3] = [44, 160, 44];
    pub const RED: [u8; 3] = [214, 39, 40];
    pub const PURPLE: [u8; 3] = [148, 103, 189];
    pub const BROWN: [u8; 3] = [140, 86, 75];
    pub const PINK: [u8; 3] = [227, 119, 194];
    pub const GREY: [u8; 3] = [127, 127, 127];
    // Not pure white; kept as published.
    pub const WHITE: [u8; 3] = [225, 255, 255];

    /// Entries in palette order
    pub const COLORS: [(&str, [u8; 3]); 9] = [
        ("blue", BLUE),
        ("orange", ORANGE),
        ("green", GREEN),
        ("red", RED),
        ("purple", PURPLE),
        ("brown", BROWN),
        ("pink", PINK),
        ("grey", GREY),
        ("white", WHITE),
    ];
}

/// Defaults for random color generation
pub mod random {
    pub const DEFAULT_AMOUNT: usize = 1;
    pub const DEFAULT_MIN_CHANNEL: i64 = super::channel::MIN;
    pub const DEFAULT_MAX_CHANNEL: i64 = super::channel::MAX;
}

/// Swatch layout geometry
pub mod presentation {
    /// Canvas is a square of this many units per side
    pub const CANVAS_EXTENT: f32 = 100.0;

    /// Horizontal position of the first label
    pub const LABEL_X_OFFSET: f32 = 5.0;

    /// Horizontal distance between consecutive labels
    pub const LABEL_X_STEP: f32 = 20.0;

    /// Mean channel brightness (0-255) above which labels are drawn dark
    pub const BRIGHTNESS_THRESHOLD: f32 = 50.0;

    /// Width of a swatch row in the ANSI preview, in terminal cells
    pub const ANSI_SWATCH_WIDTH: usize = 40;
}
