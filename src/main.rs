use anyhow::{Context, Result};
use clap::{Arg, Command};
use disksched::trace::{set_flags, Flags};
use disksched::{
    parse_policy_codes, read_input_file, run_policies, Cylinder, DiskGeometry, Policy,
    PolicyReport, DEFAULT_MAX_CYLINDER,
};
use std::path::PathBuf;

struct Args {
    start_position: Cylinder,
    inputfile: PathBuf,
    policies: Vec<Policy>,
    disk: DiskGeometry,
}

fn summary_line(report: &PolicyReport) -> String {
    format!("{}: {}", report.policy, report.total)
}

fn print_summary(reports: &[PolicyReport]) {
    for report in reports {
        println!("{}", summary_line(report));
    }
}

fn actual_main_fn(args: &Args) -> Result<()> {
    let requests = read_input_file(&args.inputfile)
        .with_context(|| format!("failed to load requests from {}", args.inputfile.display()))?;

    let reports = run_policies(&args.policies, &requests, args.start_position, &args.disk);
    print_summary(&reports);
    Ok(())
}

fn valid_integer(value: &str) -> Result<(), String> {
    value
        .parse::<Cylinder>()
        .map(|_| ())
        .map_err(|_| format!("{} should be an integer", value))
}

fn valid_policies(value: &str) -> Result<(), String> {
    parse_policy_codes(value).map(|_| ())
}

fn parse_args<I, T>(actual_args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = Command::new("disksched")
        .about("Total head movement under FCFS, SCAN and C-SCAN disk scheduling")
        .allow_negative_numbers(true)
        .arg(
            Arg::new("start_position")
                .help("cylinder the head starts on")
                .required(true)
                .validator(valid_integer)
                .index(1),
        )
        .arg(
            Arg::new("requests_file")
                .help("file with one cylinder request per line")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("policy")
                .short('s')
                .long("policy")
                .takes_value(true)
                .validator(valid_policies)
                .help("policies to run (N, s, c, n, o, C); all by default"),
        )
        .arg(
            Arg::new("max_cylinder")
                .short('m')
                .long("max-cylinder")
                .takes_value(true)
                .validator(valid_integer)
                .help("highest addressable cylinder"),
        )
        .arg(
            Arg::new("v_flag")
                .short('v')
                .help("trace every head movement"),
        )
        .arg(
            Arg::new("q_flag")
                .short('q')
                .help("trace the request partitions"),
        )
        .try_get_matches_from(actual_args)?;

    // validators ran above, so these parses cannot fail
    let parse = |name: &str| -> Option<Cylinder> {
        matches.value_of(name).and_then(|v| v.parse().ok())
    };
    let start_position = parse("start_position").unwrap_or_default();
    let max_cylinder = parse("max_cylinder").unwrap_or(DEFAULT_MAX_CYLINDER);
    let policies = match matches.value_of("policy") {
        Some(codes) => parse_policy_codes(codes).unwrap_or_default(),
        None => Policy::ALL.to_vec(),
    };
    let inputfile = PathBuf::from(matches.value_of("requests_file").unwrap_or_default());

    set_flags(Flags {
        v_option: matches.is_present("v_flag"),
        q_option: matches.is_present("q_flag"),
    });

    Ok(Args {
        start_position,
        inputfile,
        policies,
        disk: DiskGeometry::new(max_cylinder),
    })
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    actual_main_fn(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_with_defaults() {
        let args = parse_args(["disksched", "30", "requests.txt"]).unwrap();
        assert_eq!(args.start_position, 30);
        assert_eq!(args.inputfile, PathBuf::from("requests.txt"));
        assert_eq!(args.policies, Policy::ALL.to_vec());
        assert_eq!(args.disk, DiskGeometry::default());
    }

    #[test]
    fn accepts_negative_start_position() {
        let args = parse_args(["disksched", "-5", "requests.txt"]).unwrap();
        assert_eq!(args.start_position, -5);
    }

    #[test]
    fn policy_selection_keeps_reporting_order() {
        let args = parse_args(["disksched", "-s", "Cn", "-m", "199", "0", "r.txt"]).unwrap();
        assert_eq!(args.policies, vec![Policy::OptimizedFcfs, Policy::OptimizedCScan]);
        assert_eq!(args.disk.max_cylinder, 199);
    }

    #[test]
    fn rejects_non_integer_start() {
        assert!(parse_args(["disksched", "abc", "requests.txt"]).is_err());
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(parse_args(["disksched", "10"]).is_err());
        assert!(parse_args(["disksched"]).is_err());
    }

    #[test]
    fn rejects_unknown_policy_code() {
        assert!(parse_args(["disksched", "-s", "x", "0", "r.txt"]).is_err());
    }

    #[test]
    fn summary_is_label_then_total() {
        let report = PolicyReport {
            policy: Policy::OptimizedCScan,
            total: 150,
        };
        assert_eq!(summary_line(&report), "Optimized C-SCAN: 150");
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = parse_args(["disksched", "0", "/nonexistent/requests.txt"]).unwrap();
        assert!(actual_main_fn(&args).is_err());
    }
}
