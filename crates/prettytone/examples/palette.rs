use std::str::FromStr;

use prettytone::opt::Options;
use prettytone::scheme::{generate_scheme_or_default, Appearance};
use prettytone::Color;

fn swatch_line(label: &str, colors: &[Color]) -> String {
    let mut line = format!("{:>9} ", label);
    for color in colors {
        let [r, g, b] = color.to_24bit();
        line.push_str(&format!("\x1b[48;2;{};{};{}m  \x1b[0m", r, g, b));
    }
    line
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Determine seed and options
    let seed = std::env::args()
        .nth(1)
        .map(|s| Color::from_str(&s))
        .transpose()?;
    let options = Options::from_environment()?.build()?;

    // 2. Generate the scheme
    let scheme = generate_scheme_or_default(seed.as_ref(), &options)?;

    // 3. Show it off
    println!();
    for (role, swatch) in scheme.iter() {
        println!("{}", swatch_line(role.name(), swatch.as_ref()));
    }
    println!();
    for (role, swatch) in scheme.iter() {
        let hex: Vec<String> = swatch.iter().map(|(_, c)| c.to_hex_format()).collect();
        println!("{:>9} {}", role.name(), hex.join(" "));
    }
    println!();
    for appearance in [Appearance::Light, Appearance::Dark] {
        println!(
            "{:>9} background {} accent {} primary {}",
            format!("{:?}", appearance).to_lowercase(),
            scheme.background(appearance).to_hex_format(),
            scheme.accent(appearance).to_hex_format(),
            scheme.primary(appearance).to_hex_format(),
        );
    }
    println!();

    Ok(())
}
