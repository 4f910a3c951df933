//! Encode a resistance value and print its bands and file name.

use resistorgen::prelude::*;

fn main() -> Result<(), ResistorGenError> {
    let value: f64 = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Not a number: {}", arg);
                eprintln!("Usage: cargo run --example encode_value [value] [tolerance%]");
                std::process::exit(1);
            }
        },
        None => 4700.0,
    };
    let tolerance = match std::env::args().nth(2) {
        Some(arg) => match arg.parse::<Tolerance>() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Usage: cargo run --example encode_value [value] [tolerance%]");
                std::process::exit(1);
            }
        },
        None => Tolerance::OnePercent,
    };

    let encoding = ResistorGenCore::encode(value, tolerance, "step")?;

    println!("Value:  {} Ω", encoding.value);
    println!("Label:  {}", encoding.label);
    println!("File:   {}", encoding.file_name);
    println!("Bands:");
    for (i, band) in encoding.colors().iter().enumerate() {
        let rgb = band.rgb();
        println!(
            "  {}. {:<7} ({}, {}, {})",
            i + 1,
            band.name(),
            rgb.red,
            rgb.green,
            rgb.blue
        );
    }
    Ok(())
}
