use chrono::NaiveDate;

/// Parse `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Nearest entry in the xterm 6x6x6 color cube.
pub fn ansi256(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| ((c as u16 * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

pub fn date_span(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.format("%Y-%m-%d").to_string()
    } else {
        format!("{} → {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#FFA500"), Some((255, 165, 0)));
        assert_eq!(parse_hex_color("800080"), Some((128, 0, 128)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("gray"), None);
    }

    #[test]
    fn maps_to_color_cube() {
        assert_eq!(ansi256(255, 0, 0), 196);
        assert_eq!(ansi256(0, 0, 255), 21);
        assert_eq!(ansi256(0, 0, 0), 16);
    }
}
