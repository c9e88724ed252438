use bmi_core::{convert_length, evaluate, LengthUnit, Measurement};
use clap::Parser;

/// BMI calculator demo with configurable input units
#[derive(Parser, Debug)]
#[command(name = "bmi-demo")]
#[command(about = "Body mass index calculator demo", long_about = None)]
struct Args {
    /// Height value, in the unit given by --unit
    #[arg(short = 'H', long)]
    height: f64,

    /// Weight in kg
    #[arg(short, long)]
    weight: f64,

    /// Height unit (meter, centimeter)
    #[arg(short, long, default_value = "meter")]
    unit: LengthUnit,

    /// Also print the height converted to the other supported unit
    #[arg(short, long)]
    converted: bool,
}

fn main() {
    let args = Args::parse();

    println!("=== BMI Calculator Demo ===\n");
    println!("Height: {} {}", args.height, args.unit);
    println!("Weight: {} kg", args.weight);

    if args.converted {
        let other = match args.unit {
            LengthUnit::Meter => LengthUnit::Centimeter,
            LengthUnit::Centimeter => LengthUnit::Meter,
        };
        println!(
            "Height in {}: {}",
            other,
            convert_length(args.height, args.unit, other)
        );
    }

    let reading = evaluate(args.weight, Measurement::new(args.height, args.unit));

    println!("\nBMI: {}", reading.formatted_value());
    println!(
        "Category: {}",
        if reading.category.label().is_empty() {
            "(undefined)"
        } else {
            reading.category.label()
        }
    );
    match reading.illustration {
        Some(url) => println!("Illustration: {url}"),
        None => println!("Illustration: (none)"),
    }
}
