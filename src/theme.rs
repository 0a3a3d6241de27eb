//! Highlight color parsing
//!
//! Accepts ANSI color names (`dark_gray`, `DarkGrey`, `light-cyan`, ...),
//! `reset`, hex (`#RRGGBB` / `#RGB`) and 256-color palette indices.

use ratatui::style::Color;

/// Parse a user-supplied color. `None` when nothing matches.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    if let Ok(index) = s.parse::<u8>() {
        return Some(Color::Indexed(index));
    }

    parse_named_color(s)
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

fn parse_named_color(s: &str) -> Option<Color> {
    // Normalize "Dark_Grey", "dark-gray", "dark gray" to "darkgray"
    let name: String = s
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    let name = name.replace("grey", "gray");

    let color = match name.as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}
