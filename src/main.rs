//! Nibbler CLI - terminal tutor for number-base conversion
//!
//! Usage: nibbler [COMMAND]
//!
//! Without a command, Nibbler runs the full lesson: every conversion method
//! demonstrated on the classic classroom examples. Each method is also
//! available as its own command:
//!   int     Decimal integer to binary/octal/hex, division by division
//!   frac    Decimal fraction to binary, doubling by doubling
//!   group   Binary to hex through 4-bit groups
//!   expand  Hex to binary, one nibble per digit
//!   eval    Any digit string back to decimal through place values
//!   table   The 0-15 quick-reference table

mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nibbler::convert::{fraction, integer, nibble, positional, table};
use nibbler::models::Base;
use nibbler::{ConvertError, DEFAULT_DIGIT_LIMIT};

use crate::ui::terminal::detect_capabilities;
use crate::ui::views;

/// Nibbler - terminal tutor for number-base conversion
#[derive(Parser, Debug)]
#[command(name = "nibbler")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'nibbler' without arguments for the full lesson.")]
struct Cli {
    /// Emit one JSON event per result instead of formatted blocks
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a decimal integer by the division method
    Int {
        /// Non-negative decimal integer
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Target base
        #[arg(short, long, value_enum, default_value_t = Base::Binary)]
        base: Base,
    },

    /// Convert a decimal fraction to binary by the multiplication method
    Frac {
        /// Fraction in [0, 1), e.g. 0.625
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Maximum number of fractional bits before truncating
        #[arg(short, long, default_value_t = DEFAULT_DIGIT_LIMIT)]
        digits: usize,
    },

    /// Convert binary to hexadecimal through 4-bit groups
    Group {
        /// Binary digit string, any length
        bits: String,
    },

    /// Expand hexadecimal to binary, one nibble per digit
    Expand {
        /// Hex digit string, either case
        hex: String,
    },

    /// Evaluate a digit string back to decimal through place values
    Eval {
        /// Digit string, optionally with one radix point (e.g. 110111.101)
        digits: String,

        /// Base the digits are written in
        #[arg(short, long, value_enum, default_value_t = Base::Binary)]
        base: Base,
    },

    /// Print the 0-15 quick-reference table
    Table,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Int { value, base }) => cmd_int(&value, base, cli.json),
        Some(Commands::Frac { value, digits }) => cmd_frac(value, digits, cli.json),
        Some(Commands::Group { bits }) => cmd_group(&bits, cli.json),
        Some(Commands::Expand { hex }) => cmd_expand(&hex, cli.json),
        Some(Commands::Eval { digits, base }) => cmd_eval(&digits, base, cli.json),
        Some(Commands::Table) => cmd_table(cli.json),
        None => cmd_lesson(cli.json),
    }
}

/// Parse a CLI operand as a non-negative decimal integer.
///
/// The library takes `u64` and cannot see a sign; this is the surface where
/// a negative can be written down, so the guard lives here.
fn parse_unsigned(input: &str) -> Result<u64> {
    if input.is_empty() {
        return Err(ConvertError::EmptyDigits(Base::Decimal).into());
    }
    for c in input.chars() {
        if !c.is_ascii_digit() {
            return Err(ConvertError::InvalidDigit {
                digit: c,
                base: Base::Decimal,
                input: input.to_string(),
            }
            .into());
        }
    }
    input
        .parse()
        .with_context(|| format!("'{}' does not fit in 64 bits", input))
}

fn cmd_int(value: &str, base: Base, json: bool) -> Result<()> {
    let n = parse_unsigned(value)?;
    let conv = integer::to_base(n, base);

    if json {
        let output = serde_json::json!({
            "event": "int",
            "input": n,
            "base": base.radix(),
            "digits": conv.digits,
            "steps": conv.steps,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = detect_capabilities();
        print!(
            "{}",
            views::division::render_division(n, &conv, caps.supports_color, caps.supports_unicode)
        );
    }

    Ok(())
}

fn cmd_frac(value: f64, digits: usize, json: bool) -> Result<()> {
    let conv = fraction::to_binary(value, digits)?;

    if json {
        let output = serde_json::json!({
            "event": "frac",
            "input": value,
            "digits": conv.digits,
            "exact": conv.exact,
            "steps": conv.steps,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = detect_capabilities();
        print!(
            "{}",
            views::fraction::render_fraction(
                value,
                &conv,
                caps.supports_color,
                caps.supports_unicode
            )
        );
    }

    Ok(())
}

fn cmd_group(bits: &str, json: bool) -> Result<()> {
    let conv = nibble::binary_to_hex(bits)?;

    if json {
        let output = serde_json::json!({
            "event": "group",
            "input": bits,
            "digits": conv.digits,
            "groups": conv.groups,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = detect_capabilities();
        print!(
            "{}",
            views::grouping::render_grouping(
                bits,
                &conv,
                caps.supports_color,
                caps.supports_unicode
            )
        );
    }

    Ok(())
}

fn cmd_expand(hex: &str, json: bool) -> Result<()> {
    let conv = nibble::hex_to_binary(hex)?;

    if json {
        let output = serde_json::json!({
            "event": "expand",
            "input": hex,
            "bits": conv.bits,
            "nibbles": conv.nibbles,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = detect_capabilities();
        print!(
            "{}",
            views::expansion::render_expansion(
                hex,
                &conv,
                caps.supports_color,
                caps.supports_unicode
            )
        );
    }

    Ok(())
}

fn cmd_eval(digits: &str, base: Base, json: bool) -> Result<()> {
    let eval = positional::evaluate(digits, base)?;

    if json {
        let output = serde_json::json!({
            "event": "eval",
            "input": digits,
            "base": base.radix(),
            "value": eval.value,
            "integer_value": eval.integer_value,
            "fraction_value": eval.fraction_value,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = detect_capabilities();
        print!(
            "{}",
            views::positional::render_evaluation(
                digits,
                base,
                &eval,
                caps.supports_color,
                caps.supports_unicode
            )
        );
    }

    Ok(())
}

fn cmd_table(json: bool) -> Result<()> {
    let rows = table::reference_table();

    if json {
        let output = serde_json::json!({
            "event": "table",
            "rows": rows,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = detect_capabilities();
        print!(
            "{}",
            views::table::render_table(&rows, caps.supports_color, caps.supports_unicode)
        );
    }

    Ok(())
}

/// The full lesson: every method demonstrated on the classic examples.
fn cmd_lesson(json: bool) -> Result<()> {
    if !json {
        let caps = detect_capabilities();
        print!(
            "{}",
            views::lesson::render_header(caps.supports_color, caps.supports_unicode)
        );
        println!();
    }

    cmd_int("35", Base::Binary, json)?;
    separator(json);
    cmd_group("001010011010", json)?;
    separator(json);
    cmd_expand("3D5", json)?;
    separator(json);
    cmd_frac(0.625, DEFAULT_DIGIT_LIMIT, json)?;
    separator(json);
    cmd_eval("110111.101", Base::Binary, json)?;
    separator(json);
    cmd_table(json)?;

    if !json {
        let caps = detect_capabilities();
        println!();
        print!(
            "{}",
            views::lesson::render_recap(caps.supports_color, caps.supports_unicode)
        );
    }

    Ok(())
}

fn separator(json: bool) {
    if !json {
        println!();
    }
}
