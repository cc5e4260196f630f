mod args;

use anyhow::{Result, bail};
use clap::ArgMatches;
use ranges_lib::ranges::Range;

/// One side of the bounds, readable even when infinite
fn bound_image(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value as i64)
    } else if value > 0.0 {
        "+inf".to_string()
    } else {
        "-inf".to_string()
    }
}

fn parse_literal(matches: &ArgMatches) -> Result<Range> {
    let text = matches
        .get_one::<String>("literal")
        .expect("literal is a required argument");
    let range = Range::from_pattern(text)?;
    log::debug!("parsed {text:?} as {range}");
    Ok(range)
}

fn show(matches: &ArgMatches) -> Result<()> {
    let range = parse_literal(matches)?;
    let (start, end) = range.bounds();
    println!("canonical:  {}", range);
    println!("bounds:     [{}, {})", bound_image(start), bound_image(end));
    println!("kind:       {:?}", range.kind());
    println!("inclusive:  {}", range.is_inclusive());
    println!("empty:      {}", range.is_empty());
    println!("exhaustive: {}", range.is_exhaustive());
    Ok(())
}

fn contains(matches: &ArgMatches) -> Result<()> {
    let range = parse_literal(matches)?;
    let value = matches
        .get_one::<f64>("value")
        .expect("value is a required argument");
    if range.contains(*value) {
        println!("{} contains {}", range, value);
    } else {
        println!("{} does not contain {}", range, value);
    }
    Ok(())
}

fn list(matches: &ArgMatches) -> Result<()> {
    let range = parse_literal(matches)?;
    for value in range.iter()? {
        println!("{}", value);
    }
    Ok(())
}

fn slice(matches: &ArgMatches) -> Result<()> {
    let range = parse_literal(matches)?;
    let items: Vec<String> = matches
        .get_many::<String>("items")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    for item in range.slice(&items) {
        println!("{}", item);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = args::build_cli().get_matches();
    match matches.subcommand() {
        Some(("show", m)) => show(m),
        Some(("contains", m)) => contains(m),
        Some(("list", m)) => list(m),
        Some(("slice", m)) => slice(m),
        Some((other, _)) => bail!("unknown subcommand {other}"),
        None => bail!("missing subcommand"),
    }
}
