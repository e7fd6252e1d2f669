//! Style roles expressed as an enum + macro mapping logical names to `colored::Color`.
//! This eliminates palette structs / instances while keeping a single source of truth.
//!
//! Each logical style (Error, Header, etc.) is a variant of `StyleRole`. Coloring is
//! applied only when the `enabled` flag passed to `paint()` is true, avoiding global
//! mutable state.
//!
//! ```
//! use errtray::core::styles::StyleRole;
//! let plain = StyleRole::Error.paint("boom", false);
//! assert_eq!(plain, "boom");
//! let painted = StyleRole::Error.paint("boom", true);
//! assert!(painted.starts_with("\x1b["));
//! assert!(painted.ends_with("\x1b[0m"));
//! ```

use colored::Color;

// Macro defines the enum variants and their associated colour Option.
macro_rules! style {
    ( $( $variant:ident => $color:expr ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<Color> {
                match self { $( StyleRole::$variant => $color ),+ }
            }

            pub fn ansi_code(self) -> Option<String> {
                map_color_code(self.color()?)
            }

            pub fn paint(self, text: &str, enabled: bool) -> String {
                if !enabled { return text.to_string(); }
                if let Some(code) = self.ansi_code() { return format!("\x1b[{}m{}\x1b[0m", code, text); }
                text.to_string()
            }

            /// Convert StyleRole to prettytable style_spec format
            pub fn to_prettytable_spec(self) -> Option<String> {
                let color = self.color()?;

                let spec_char = match color {
                    Color::Black => "k",
                    Color::Red => "r",
                    Color::Green => "g",
                    Color::Yellow => "y",
                    Color::Blue => "b",
                    Color::Magenta => "m",
                    Color::Cyan => "c",
                    Color::White => "w",
                    Color::BrightBlack => "K",
                    Color::BrightRed => "R",
                    Color::BrightGreen => "G",
                    Color::BrightYellow => "Y",
                    Color::BrightBlue => "B",
                    Color::BrightMagenta => "M",
                    Color::BrightCyan => "C",
                    Color::BrightWhite => "W",
                    _ => return None,
                };

                Some(format!("F{}", spec_char)) // Foreground color
            }
        }
    }
}

// Define all logical roles. Value => None (uncoloured)
style! {
    Error   => Some(Color::BrightRed),
    Warning => Some(Color::Yellow),
    Info    => Some(Color::Cyan),
    Header  => Some(Color::BrightWhite),
    Accent  => Some(Color::Blue),
    Dim     => Some(Color::BrightBlack),
    Value   => None,
}

fn map_color_code(c: Color) -> Option<String> {
    use Color::*;
    match c {
        Black => Some("30".to_string()),
        Red => Some("31".to_string()),
        Green => Some("32".to_string()),
        Yellow => Some("33".to_string()),
        Blue => Some("34".to_string()),
        Magenta => Some("35".to_string()),
        Cyan => Some("36".to_string()),
        White => Some("37".to_string()),
        BrightBlack => Some("90".to_string()),
        BrightRed => Some("91".to_string()),
        BrightGreen => Some("92".to_string()),
        BrightYellow => Some("93".to_string()),
        BrightBlue => Some("94".to_string()),
        BrightMagenta => Some("95".to_string()),
        BrightCyan => Some("96".to_string()),
        BrightWhite => Some("97".to_string()),
        TrueColor { r, g, b } => {
            // ANSI TrueColor format: 38;2;R;G;B for foreground text
            Some(format!("38;2;{};{};{}", r, g, b))
        }
        AnsiColor(n) => {
            // ANSI 256-color format: 38;5;N for foreground text
            Some(format!("38;5;{}", n))
        }
    }
}
