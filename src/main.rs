use clap::Parser;
use romana::{convert, numeral::value::Value};

/// romana converts between Arabic values and Roman numerals in either
/// direction.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Interprets the input as an Arabic value and converts it to Roman.
    #[arg(short = 'r', long, conflicts_with = "to_arabic")]
    to_roman: bool,

    /// Interprets the input as a Roman numeral and converts it to Arabic.
    #[arg(short = 'a', long)]
    to_arabic: bool,

    /// The value to convert; the direction is inferred from its shape
    /// unless a flag forces one.
    input: String,
}

fn main() {
    let args = Args::parse();

    let value = Value::classify(&args.input);

    let result = if args.to_roman {
        value.to_roman().map(Value::Text)
    } else if args.to_arabic {
        value.to_arabic().map(Value::Integer)
    } else {
        convert(&value)
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
