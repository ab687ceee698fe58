//! Built-in alias and substitution data.
//!
//! Descriptions of the codes follow the ECMA-48 / Wikipedia "ANSI escape
//! code" listing.

/// Default alias → SGR code pairs, in declaration order.
pub const DEFAULT_ALIASES: &[(&str, u8)] = &[
    // Reset / normal: all attributes off
    ("reset", 0),
    ("bold", 1),
    // Decreased intensity, not widely supported
    ("faint", 2),
    // Not widely supported, sometimes treated as inverse
    ("italic", 3),
    ("underline", 4),
    // Less than 150 per minute
    ("blink", 5),
    ("blinkslow", 5),
    // 150 per minute or more, not widely supported
    ("blinkfast", 6),
    // Swap foreground and background
    ("negative", 7),
    ("~positive", 7),
    ("conceal", 8),
    ("~reveal", 8),
    // Legible but marked for deletion
    ("crossed", 9),
    ("font/default", 10),
    ("font/0", 10),
    // n-th alternate font
    ("font/1", 11),
    ("font/2", 12),
    ("font/3", 13),
    ("font/4", 14),
    ("font/5", 15),
    ("font/6", 16),
    ("font/7", 17),
    ("font/8", 18),
    ("font/9", 19),
    ("fraktur", 20),
    // Bold off or double underline depending on the terminal; 22 is the
    // widely supported bold off.
    ("dblunderline", 21),
    ("~~bold", 21),
    // Normal intensity: neither bold nor faint
    ("~bold", 22),
    ("~faint", 22),
    ("~italic", 23),
    ("~fraktur", 23),
    ("~underline", 24),
    ("~blink", 25),
    ("positive", 27),
    ("~negative", 27),
    ("reveal", 28),
    ("~conceal", 28),
    ("~crossed", 29),
    // 30 + color index
    ("text/black", 30),
    ("text/red", 31),
    ("text/green", 32),
    ("text/yellow", 33),
    ("text/blue", 34),
    ("text/magenta", 35),
    ("text/cyan", 36),
    ("text/white", 37),
    ("text/default", 39),
    // 40 + color index
    ("bg/black", 40),
    ("bg/red", 41),
    ("bg/green", 42),
    ("bg/yellow", 43),
    ("bg/blue", 44),
    ("bg/magenta", 45),
    ("bg/cyan", 46),
    ("bg/white", 47),
    ("bg/default", 49),
    ("frame", 51),
    ("encircle", 52),
    ("overline", 53),
    ("~encircle", 54),
    ("~frame", 54),
    ("~overline", 55),
];

/// Default shorthand → canonical token pairs.
///
/// Applied to every token in this order, each as a literal replace-all.
pub const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("!", "~"),
    ("^", "~"),
    ("color", "text"),
    // Must precede "strikethru", which is a prefix of it.
    ("strikethrough", "crossed"),
    ("strikethru", "crossed"),
    ("double", "dbl"),
    ("uline", "underline"),
    ("lightblue", "cyan"),
    ("pink", "magenta"),
    ("gothic", "fraktur"),
];

/// The alias rendered when no format is given, and appended after wrap text.
pub const RESET_ALIAS: &str = "reset";
