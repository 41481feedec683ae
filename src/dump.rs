use std::ffi::OsString;
use std::io::{self, Write};
use std::num::ParseIntError;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, trace};
use thiserror::Error;

use crate::codepoint::{CodepointLookup, LookupError};

/// Printed when the range is not given as exactly two points.
pub const USAGE_MESSAGE: &str = "Start and end points are required";

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Start and end points are required (got {0} arguments)")]
    ArgumentCount(usize),
    #[error("invalid code point {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

/// The command line is just the two points. Help and version flags are off
/// so every token, hyphenated or not, counts toward the two.
pub fn command() -> Command {
    Command::new("unidump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the Unicode name and general category of each code point in a range")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("points")
                .help("Start and end code points, inclusive, in decimal")
                .value_name("POINT")
                .num_args(0..)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
}

pub fn parse_point(input: &str) -> Result<i64, DumpError> {
    input.parse::<i64>().map_err(|source| DumpError::Parse {
        input: input.to_string(),
        source,
    })
}

pub fn parse_range<S: AsRef<str>>(points: &[S]) -> Result<(i64, i64), DumpError> {
    if points.len() != 2 {
        return Err(DumpError::ArgumentCount(points.len()));
    }

    let start = parse_point(points[0].as_ref())?;
    let end = parse_point(points[1].as_ref())?;
    Ok((start, end))
}

/// Writes one descriptor line per code point in `start..=end`.
///
/// Stops at the first point the lookup rejects. Lines written before that
/// point are left in `out`. An inverted range writes nothing.
pub fn dump_range<L, W>(lookup: &L, start: i64, end: i64, out: &mut W) -> Result<usize, DumpError>
where
    L: CodepointLookup + ?Sized,
    W: Write + ?Sized,
{
    debug!("dumping code points {}..={}", start, end);

    let mut written = 0;
    for point in start..=end {
        let descriptor = lookup.lookup(point)?;
        trace!("{} => {}", point, descriptor);
        writeln!(out, "{}", descriptor)?;
        written += 1;
    }

    debug!("wrote {} lines", written);
    Ok(written)
}

/// Parses a full argument list (program name first) and dumps the range.
///
/// The raw token count is checked before clap sees the list.
pub fn run<I, T, L, W>(args: I, lookup: &L, out: &mut W) -> Result<usize, DumpError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    L: CodepointLookup + ?Sized,
    W: Write + ?Sized,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let given = args.len().saturating_sub(1);
    if given != 2 {
        return Err(DumpError::ArgumentCount(given));
    }

    let matches = command().try_get_matches_from(args)?;
    dump_matches(&matches, lookup, out)
}

/// Dumps the range named by already-parsed command line arguments.
pub fn dump_matches<L, W>(matches: &ArgMatches, lookup: &L, out: &mut W) -> Result<usize, DumpError>
where
    L: CodepointLookup + ?Sized,
    W: Write + ?Sized,
{
    let points: Vec<String> = matches
        .get_many::<String>("points")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let (start, end) = parse_range(&points)?;
    dump_range(lookup, start, end, out)
}
