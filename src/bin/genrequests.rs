use anyhow::{Context, Result};
use clap::{Arg, Command};
use disksched::{write_requests, Cylinder, RequestGenerator, DEFAULT_MAX_CYLINDER};

fn valid_count(value: &str) -> Result<(), String> {
    value
        .parse::<usize>()
        .map(|_| ())
        .map_err(|_| format!("{} should be a non-negative integer", value))
}

fn valid_max_cylinder(value: &str) -> Result<(), String> {
    match value.parse::<Cylinder>() {
        Ok(max) if max >= 0 => Ok(()),
        _ => Err(format!("{} should be a non-negative integer", value)),
    }
}

fn main() -> Result<()> {
    let matches = Command::new("genrequests")
        .about("Writes uniformly random cylinder requests, one per line")
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .takes_value(true)
                .default_value("1000")
                .validator(valid_count)
                .help("number of requests"),
        )
        .arg(
            Arg::new("max_cylinder")
                .short('m')
                .long("max-cylinder")
                .takes_value(true)
                .validator(valid_max_cylinder)
                .help("highest cylinder to draw"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .default_value("requests.txt")
                .help("output file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .validator(valid_count)
                .help("seed for a reproducible request list"),
        )
        .get_matches();

    let count: usize = matches
        .value_of("count")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000);
    let max_cylinder: Cylinder = matches
        .value_of("max_cylinder")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CYLINDER);
    let output = matches.value_of("output").unwrap_or("requests.txt");

    let mut generator = match matches.value_of("seed").and_then(|v| v.parse().ok()) {
        Some(seed) => RequestGenerator::seeded(max_cylinder, seed),
        None => RequestGenerator::new(max_cylinder),
    };
    let requests = generator.generate(count);
    write_requests(output, &requests)
        .with_context(|| format!("failed to write requests to {}", output))?;

    println!("{} file created with {} random requests.", output, count);
    Ok(())
}
