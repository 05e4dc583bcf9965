//! Command-line front end for the Jalali calendar library.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate, Timelike};
use clap::{Args, Parser, Subcommand};
use jalali_date::{
    JalaliDate, LAYOUT_ISO, LAYOUT_LONG, LAYOUT_LONG_ENGLISH, months_between, to_latin_digits,
    to_persian_digits, years_between,
};

#[derive(Parser)]
#[command(
    name = "jalali",
    version,
    about = "Persian (Jalali) calendar tool",
    long_about = "A command-line tool for working with the Persian (Jalali/Shamsi) calendar.\n\n\
        Convert between Gregorian and Jalali dates, display the current Jalali\n\
        date, and calculate date differences."
)]
struct Cli {
    /// Use Persian digits in output
    #[arg(short, long, global = true)]
    persian: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display the current date in the Jalali calendar
    Now(NowArgs),
    /// Convert between Gregorian and Jalali dates
    Convert(ConvertArgs),
    /// Calculate the difference between two Jalali dates
    Diff(DiffArgs),
}

#[derive(Args)]
struct NowArgs {
    /// Custom format layout (e.g. "yyyy/MM/dd")
    #[arg(short, long)]
    format: Option<String>,

    /// Show time along with date
    #[arg(short, long)]
    time: bool,

    /// Use long format with month name
    #[arg(short, long)]
    long: bool,

    /// Use English month names (with --long)
    #[arg(short, long)]
    english: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Date to convert, e.g. 2025-10-26 (or 1404-08-04 with --reverse)
    date: String,

    /// Convert from Jalali to Gregorian
    #[arg(short, long)]
    reverse: bool,

    /// Output format layout
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Args)]
struct DiffArgs {
    /// First Jalali date
    date1: String,

    /// Second Jalali date
    date2: String,

    /// Show detailed breakdown (years, months, days)
    #[arg(short, long)]
    verbose: bool,

    /// Show only the total number of days
    #[arg(short = 'd', long)]
    days_only: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Now(args) => run_now(args, cli.persian),
        Command::Convert(args) => run_convert(args, cli.persian),
        Command::Diff(args) => run_diff(args, cli.persian),
    }
}

fn run_now(args: &NowArgs, persian: bool) -> Result<()> {
    let now = Local::now();
    let today = now.date_naive();
    #[allow(clippy::cast_possible_truncation)]
    let date = JalaliDate::from_gregorian(today.year(), today.month() as u8, today.day() as u8);

    let mut output = if let Some(layout) = &args.format {
        if persian {
            date.format_persian(layout)
        } else {
            date.format(layout)
        }
    } else if args.long {
        let s = if args.english {
            date.format(LAYOUT_LONG_ENGLISH)
        } else {
            date.format(LAYOUT_LONG)
        };
        // English month names keep Latin digits readable
        if persian && !args.english {
            to_persian_digits(&s)
        } else {
            s
        }
    } else {
        localize(date.format(LAYOUT_ISO), persian)
    };

    if args.time {
        let time = format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second());
        output.push(' ');
        output.push_str(&localize(time, persian));
    }

    println!("{output}");
    Ok(())
}

fn run_convert(args: &ConvertArgs, persian: bool) -> Result<()> {
    let input = to_latin_digits(&args.date);

    let output = if args.reverse {
        let date: JalaliDate = input.parse().context("failed to parse Jalali date")?;
        let (year, month, day) = date.to_gregorian();
        let gregorian = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .context("converted date is outside the supported Gregorian range")?;
        let formatted = match &args.format {
            Some(layout) => gregorian.format(layout).to_string(),
            None => gregorian.format("%Y-%m-%d").to_string(),
        };
        localize(formatted, persian)
    } else {
        let gregorian = parse_gregorian(&input)?;
        #[allow(clippy::cast_possible_truncation)]
        let date = JalaliDate::from_gregorian(
            gregorian.year(),
            gregorian.month() as u8,
            gregorian.day() as u8,
        );
        match &args.format {
            Some(layout) if persian => date.format_persian(layout),
            Some(layout) => date.format(layout),
            None => localize(date.format(LAYOUT_ISO), persian),
        }
    };

    println!("{output}");
    Ok(())
}

fn run_diff(args: &DiffArgs, persian: bool) -> Result<()> {
    let date1: JalaliDate = to_latin_digits(&args.date1)
        .parse()
        .context("failed to parse first date")?;
    let date2: JalaliDate = to_latin_digits(&args.date2)
        .parse()
        .context("failed to parse second date")?;

    let days = date2.days_between(date1);
    let total = days.abs();

    if args.days_only {
        println!("{}", localize(total.to_string(), persian));
        return Ok(());
    }
    if !args.verbose {
        println!("{}", localize(format!("{total} days"), persian));
        return Ok(());
    }

    let (from, to) = if days >= 0 { (date1, date2) } else { (date2, date1) };

    let years = years_between(from, to);
    let from = from.add_years(years);
    let months = months_between(from, to);
    let from = from.add_months(months);
    let remaining = to.days_between(from);

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(pluralize(i64::from(years), "year"));
    }
    if months > 0 {
        parts.push(pluralize(i64::from(months), "month"));
    }
    if remaining > 0 || parts.is_empty() {
        parts.push(pluralize(remaining, "day"));
    }

    println!("{}", localize(join_with_and(&parts), persian));
    println!("{}", localize(format!("(Total: {total} days)"), persian));
    Ok(())
}

/// Tries the supported Gregorian input formats in order.
fn parse_gregorian(input: &str) -> Result<NaiveDate> {
    const FORMATS: [&str; 6] = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y.%m.%d",
        "%d-%m-%Y",
        "%d/%m/%Y",
        "%d.%m.%Y",
    ];

    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date);
        }
    }
    bail!("unsupported date format: {input}")
}

fn localize(s: String, persian: bool) -> String {
    if persian { to_persian_digits(&s) } else { s }
}

fn pluralize(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Joins parts as "a, b and c".
fn join_with_and(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [single] => single.clone(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}
