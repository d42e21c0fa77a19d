use std::fmt;

use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse the digits of the hashed notation, i.e., everything after the `#`.
fn parse_hashed(digits: &str) -> Result<[Float; 3], ColorFormatError> {
    if !digits.is_ascii() || (digits.len() != 3 && digits.len() != 6) {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let width = digits.len() / 3;
    let mut coordinates = [0.0; 3];
    for (index, coordinate) in coordinates.iter_mut().enumerate() {
        let channel = &digits[index * width..(index + 1) * width];
        let mut value =
            u8::from_str_radix(channel, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        if width == 1 {
            value *= 17;
        }
        *coordinate = Float::from(value) / 255.0;
    }

    Ok(coordinates)
}

/// The color spaces accepted by the CSS `color()` function.
fn color_function_space(name: &str) -> Result<ColorSpace, ColorFormatError> {
    match name {
        "srgb" => Ok(ColorSpace::Srgb),
        "srgb-linear" => Ok(ColorSpace::LinearSrgb),
        "--oklrab" => Ok(ColorSpace::Oklrab),
        "--oklrch" => Ok(ColorSpace::Oklrch),
        _ => Err(ColorFormatError::UnknownColorSpace),
    }
}

/// Parse one coordinate of a CSS color function. `none` is not-a-number.
fn parse_number(token: &str) -> Result<Float, ColorFormatError> {
    if token == "none" {
        Ok(Float::NAN)
    } else {
        token.parse().map_err(|_| ColorFormatError::MalformedFloat)
    }
}

/// Parse the CSS functions `oklab()`, `oklch()`, and `color()` with
/// space-separated, unitless arguments.
fn parse_function(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let name = ["oklab", "oklch", "color"]
        .into_iter()
        .find(|name| s.starts_with(name))
        .ok_or(ColorFormatError::UnknownFormat)?;

    let body = s[name.len()..]
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)?
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    let mut tokens = body.split_whitespace();
    let space = match name {
        "oklab" => ColorSpace::Oklab,
        "oklch" => ColorSpace::Oklch,
        _ => color_function_space(tokens.next().ok_or(ColorFormatError::UnknownColorSpace)?)?,
    };

    let mut coordinates = [0.0; 3];
    let mut count = 0;
    for token in tokens {
        if count == 3 {
            return Err(ColorFormatError::WrongCoordinateCount);
        }
        coordinates[count] = parse_number(token)?;
        count += 1;
    }

    if count == 3 {
        Ok((space, coordinates))
    } else {
        Err(ColorFormatError::WrongCoordinateCount)
    }
}

/// Parse a color from its hashed hexadecimal or CSS representation.
///
/// Leading and trailing white space is ignored, and ASCII letters are matched
/// case-insensitively.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let s = s.trim().to_ascii_lowercase();

    match s.strip_prefix('#') {
        Some(digits) => Ok((ColorSpace::Srgb, parse_hashed(digits)?)),
        None => parse_function(&s),
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn function_prefix(space: ColorSpace) -> &'static str {
    match space {
        ColorSpace::Srgb => "color(srgb ",
        ColorSpace::LinearSrgb => "color(srgb-linear ",
        ColorSpace::Oklab => "oklab(",
        ColorSpace::Oklch => "oklch(",
        ColorSpace::Oklrab => "color(--oklrab ",
        ColorSpace::Oklrch => "color(--oklrch ",
    }
}

/// Write the coordinate rounded to the given digits without trailing zeros.
fn write_coordinate(f: &mut fmt::Formatter<'_>, value: Float, digits: usize) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("none");
    }

    let factor = (10.0 as Float).powi(digits as i32);
    // Adding zero turns a negative zero positive.
    let rounded = (value * factor).round() / factor + 0.0;
    if rounded == rounded.trunc() {
        write!(f, "{:.0}", rounded)
    } else {
        write!(f, "{}", rounded)
    }
}

/// Format the coordinates as a CSS color.
///
/// The formatter's precision determines the digits past the decimal, with 5
/// by default. Hues get two digits fewer. Not-a-number coordinates are written
/// as `none`. The revised color spaces use custom-property style names
/// `--oklrab` and `--oklrch`, since CSS does not know them.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str(function_prefix(space))?;

    let digits = f.precision().unwrap_or(5);
    for (index, value) in coordinates.iter().enumerate() {
        if 0 < index {
            f.write_str(" ")?;
        }

        let digits = if space.is_polar() && index == 2 {
            digits.saturating_sub(2)
        } else {
            digits
        };
        write_coordinate(f, *value, digits)?;
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, ColorFormatError};
    use crate::ColorSpace::*;
    use crate::{Color, Float};

    #[test]
    fn test_hashed() {
        assert_eq!(
            parse("#3f51b5"),
            Ok((Srgb, [63.0 / 255.0, 81.0 / 255.0, 181.0 / 255.0]))
        );
        assert_eq!(parse("  #FFF "), Ok((Srgb, [1.0, 1.0, 1.0])));
        assert_eq!(parse("#102"), parse("#110022"));

        assert_eq!(parse("#ff"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#1234"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#💩0"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#+f0000"), Err(ColorFormatError::MalformedHex));
    }

    #[test]
    fn test_functions() {
        assert_eq!(parse("oklab(0 0 0)"), Ok((Oklab, [0.0, 0.0, 0.0])));
        assert_eq!(
            parse("oklch  (  0.478  0.159  271.4   )"),
            Ok((Oklch, [0.478, 0.159, 271.4]))
        );
        assert_eq!(
            parse("   COLOR(  SRGB-Linear   1  0.5  0.25   )    "),
            Ok((LinearSrgb, [1.0, 0.5, 0.25]))
        );
        assert_eq!(
            parse("color( --OkLrAb  0.5  0.1  -0.1 )"),
            Ok((Oklrab, [0.5, 0.1, -0.1]))
        );
        assert_eq!(
            parse("color(--oklrch 0.5 0.1 30)"),
            Ok((Oklrch, [0.5, 0.1, 30.0]))
        );

        let result = parse("oklch(0.6 0 none)");
        assert!(matches!(result, Ok((Oklch, [l, c, h])) if l == 0.6 && c == 0.0 && h.is_nan()));
    }

    #[test]
    fn test_malformed_functions() {
        use ColorFormatError::*;

        assert_eq!(parse("rgb:ff/ff/ff"), Err(UnknownFormat));
        assert_eq!(parse("hsl(0 0 0)"), Err(UnknownFormat));
        assert_eq!(parse("color srgb 1 1 1)"), Err(NoOpeningParenthesis));
        assert_eq!(parse("oklab(1 0 0"), Err(NoClosingParenthesis));
        assert_eq!(parse("color(display-p3 1 1 1)"), Err(UnknownColorSpace));
        assert_eq!(parse("color(srgbx 1 1 1)"), Err(UnknownColorSpace));
        assert_eq!(parse("color()"), Err(UnknownColorSpace));
        assert_eq!(parse("color(srgb 1 0..1 0)"), Err(MalformedFloat));
        assert_eq!(parse("oklab(50% 0 0)"), Err(MalformedFloat));
        assert_eq!(parse("color(srgb 1)"), Err(WrongCoordinateCount));
        assert_eq!(parse("oklch(0.5 0.1 30 1)"), Err(WrongCoordinateCount));
    }

    #[test]
    fn test_format() {
        let color = Color::srgb(0.3, 0.336, 0.123456);
        assert_eq!(color.to_string(), "color(srgb 0.3 0.336 0.12346)");
        assert_eq!(format!("{:.2}", color), "color(srgb 0.3 0.34 0.12)");
        assert_eq!(Color::oklab(1.0, -0.0, 0.0).to_string(), "oklab(1 0 0)");
        assert_eq!(
            Color::oklch(0.5, 0.1, 167.0).to_string(),
            "oklch(0.5 0.1 167)"
        );
        assert_eq!(
            Color::oklrch(0.5, 0.1, 167.25).to_string(),
            "color(--oklrch 0.5 0.1 167.25)"
        );
        assert_eq!(
            Color::linear_srgb(1.0, 0.5, 0.0).to_string(),
            "color(srgb-linear 1 0.5 0)"
        );

        let gray = Color::oklch(0.0, 0.0, Float::NAN);
        assert_eq!(gray.to_string(), "oklch(0 0 none)");
        assert_eq!(gray.to_string().parse::<Color>(), Ok(gray));
    }
}
