use concat_string::concat_string;
use tui::style::Style;
use unicode_segmentation::UnicodeSegmentation;

use crate::instruments::Rgba;

/// Convert a hex string to a colour.
pub(super) fn try_hex_to_rgba(hex: &str) -> Result<Rgba, String> {
    fn hex_component_to_int(hex: &str, first: &str, second: &str) -> Result<u8, String> {
        u8::from_str_radix(&concat_string!(first, second), 16)
            .map_err(|_| format!("'{hex}' is an invalid hex color, could not decode."))
    }

    fn invalid_hex_format(hex: &str) -> String {
        format!(
            "'{hex}' is an invalid hex color. It must be a hex string of the form '#1a2', '#12ab3c' or '#12ab3cff'.",
        )
    }

    if !hex.starts_with('#') {
        return Err(invalid_hex_format(hex));
    }

    let components: Vec<&str> = hex.graphemes(true).collect();
    match components.len() {
        4 => {
            let r = hex_component_to_int(hex, components[1], components[1])?;
            let g = hex_component_to_int(hex, components[2], components[2])?;
            let b = hex_component_to_int(hex, components[3], components[3])?;

            Ok(Rgba::rgb(r, g, b))
        }
        7 | 9 => {
            let r = hex_component_to_int(hex, components[1], components[2])?;
            let g = hex_component_to_int(hex, components[3], components[4])?;
            let b = hex_component_to_int(hex, components[5], components[6])?;
            let a = if components.len() == 9 {
                hex_component_to_int(hex, components[7], components[8])?
            } else {
                u8::MAX
            };

            Ok(Rgba::new(r, g, b, a))
        }
        _ => Err(invalid_hex_format(hex)),
    }
}

/// Parse a colour given as hex, `r, g, b[, a]` or a name.
pub fn str_to_rgba(input_val: &str) -> Result<Rgba, String> {
    let input_val = input_val.trim();

    if input_val.len() > 1 {
        if input_val.starts_with('#') {
            try_hex_to_rgba(input_val)
        } else if input_val.contains(',') {
            convert_rgb_to_rgba(input_val)
        } else {
            convert_name_to_rgba(input_val)
        }
    } else {
        Err(format!("Value '{input_val}' is not valid."))
    }
}

/// A foreground style for the given colour.
pub fn str_to_fg(input_val: &str) -> Result<Style, String> {
    Ok(Style::default().fg(str_to_rgba(input_val)?.to_colour()))
}

fn convert_rgb_to_rgba(rgb_str: &str) -> Result<Rgba, String> {
    let rgb_list = rgb_str.split(',').collect::<Vec<&str>>();
    if rgb_list.len() != 3 && rgb_list.len() != 4 {
        return Err(format!(
            "Value '{rgb_str}' is an invalid RGB colour. It must be a comma separated value with 3 or 4 integers from 0 to 255 (ie: '255, 0, 155' or '255, 0, 155, 128').",
        ));
    }

    let channels = rgb_list
        .iter()
        .filter_map(|val| val.trim().parse::<u8>().ok())
        .collect::<Vec<_>>();

    match channels[..] {
        [r, g, b] if rgb_list.len() == 3 => Ok(Rgba::rgb(r, g, b)),
        [r, g, b, a] => Ok(Rgba::new(r, g, b, a)),
        _ => Err(format!(
            "Value '{rgb_str}' contained invalid RGB values. Each one must be an integer from 0 to 255 (ie: '255, 0, 155').",
        )),
    }
}

fn convert_name_to_rgba(colour_name: &str) -> Result<Rgba, String> {
    let rgb = match colour_name.to_lowercase().trim() {
        "black" => (0, 0, 0),
        "red" => (205, 0, 0),
        "green" => (0, 205, 0),
        "yellow" => (205, 205, 0),
        "blue" => (0, 0, 238),
        "magenta" => (205, 0, 205),
        "cyan" => (0, 205, 205),
        "gray" | "grey" => (192, 192, 192),
        "darkgray" | "darkgrey" | "dark gray" | "dark grey" => (127, 127, 127),
        "lightred" | "light red" => (255, 0, 0),
        "lightgreen" | "light green" => (0, 255, 0),
        "lightyellow" | "light yellow" => (255, 255, 0),
        "lightblue" | "light blue" => (92, 92, 255),
        "lightmagenta" | "light magenta" => (255, 0, 255),
        "lightcyan" | "light cyan" => (0, 255, 255),
        "white" => (255, 255, 255),
        _ => {
            return Err(format!(
                "'{colour_name}' is an invalid named color.

The following are supported named colors:
+--------+-------------+---------------------+
|  Black | Cyan        | Light Blue          |
+--------+-------------+---------------------+
|   Red  | Gray/Grey   | Light Magenta       |
+--------+-------------+---------------------+
|  Green | Light Cyan  | Dark Gray/Dark Grey |
+--------+-------------+---------------------+
| Yellow | Light Red   | White               |
+--------+-------------+---------------------+
|  Blue  | Light Green | Light Yellow        |
+--------+-------------+---------------------+
| Magenta|             |                     |
+--------+-------------+---------------------+

Alternatively, hex colors or RGB color codes are valid.\n"
            ))
        }
    };

    Ok(Rgba::rgb(rgb.0, rgb.1, rgb.2))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_colours() {
        assert_eq!(try_hex_to_rgba("#fff"), Ok(Rgba::rgb(255, 255, 255)));
        assert_eq!(try_hex_to_rgba("#006400"), Ok(Rgba::rgb(0, 100, 0)));
        assert_eq!(try_hex_to_rgba("#FF000080"), Ok(Rgba::new(255, 0, 0, 128)));

        assert!(try_hex_to_rgba("ffffff").is_err());
        assert!(try_hex_to_rgba("#ff").is_err());
        assert!(try_hex_to_rgba("#12345").is_err());
        assert!(try_hex_to_rgba("#zzzzzz").is_err());
        assert!(try_hex_to_rgba("#🤔🤔🤔").is_err());
    }

    #[test]
    fn rgb_colours() {
        assert_eq!(str_to_rgba("0, 100, 0"), Ok(Rgba::rgb(0, 100, 0)));
        assert_eq!(str_to_rgba("255,0,0,64"), Ok(Rgba::new(255, 0, 0, 64)));

        assert!(str_to_rgba("256, 0, 0").is_err());
        assert!(str_to_rgba("1, 2").is_err());
        assert!(str_to_rgba("1, 2, 3, 4, 5").is_err());
        assert!(str_to_rgba("-1, 2, 3").is_err());
    }

    #[test]
    fn named_colours() {
        assert_eq!(str_to_rgba("white"), Ok(Rgba::rgb(255, 255, 255)));
        assert_eq!(str_to_rgba(" Light Yellow "), Ok(Rgba::rgb(255, 255, 0)));
        assert_eq!(str_to_rgba("dark grey"), str_to_rgba("darkgray"));

        assert!(str_to_rgba("fake blue").is_err());
        assert!(str_to_rgba("r").is_err());
    }

    #[test]
    fn fg_styles() {
        assert_eq!(
            str_to_fg("#ff0000"),
            Ok(Style::default().fg(tui::style::Color::Rgb(255, 0, 0)))
        );
    }
}
