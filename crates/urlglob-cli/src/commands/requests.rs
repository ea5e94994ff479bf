//! Requests command implementation
//!
//! Reads start requests, expands their URL templates and writes one request
//! per expanded address.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};
use std::iter::Enumerate;
use std::process::ExitCode;
use tracing::{debug, info};
use urlglob::{ExpandStartUrls, Request, WorkItem};

/// Run the requests command
///
/// # Arguments
/// * `input` - Input file (default or `-`: stdin)
/// * `output` - Output file (default or `-`: stdout)
/// * `urls` - Input and output are plain URLs, one per line, instead of JSON lines
/// * `enabled` - Whether URL templates are expanded at all
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    input: Option<&str>,
    output: Option<&str>,
    urls: bool,
    enabled: bool,
) -> Result<ExitCode> {
    let reader: Box<dyn BufRead> = match input {
        None | Some("-") => Box::new(io::stdin().lock()),
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input file: {}", path))?,
        )),
    };
    let mut writer: Box<dyn Write> = match output {
        None | Some("-") => Box::new(BufWriter::new(io::stdout().lock())),
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output file: {}", path))?,
        )),
    };

    let written = process(reader, &mut writer, urls, enabled)?;
    writer.flush().context("Failed to flush output")?;

    info!(written, enabled, "processed start requests");
    Ok(ExitCode::SUCCESS)
}

/// Expands every input item and writes the results. Returns the number written.
///
/// Input is read one line at a time, so each item is written before the next
/// line is read.
pub(crate) fn process<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    urls: bool,
    enabled: bool,
) -> Result<usize> {
    if urls {
        write_expanded(
            reader,
            enabled,
            writer,
            |_, line| Ok(line.to_string()),
            |out, url: &String| {
                writeln!(out, "{}", url)?;
                Ok(())
            },
        )
    } else {
        write_expanded(
            reader,
            enabled,
            writer,
            |number, line| {
                serde_json::from_str::<Request>(line)
                    .with_context(|| format!("Invalid request on line {}", number))
            },
            |out, request: &Request| {
                serde_json::to_writer(&mut *out, request)?;
                writeln!(out)?;
                Ok(())
            },
        )
    }
}

fn write_expanded<R, T, W, P, F>(
    reader: R,
    enabled: bool,
    out: &mut W,
    parse: P,
    mut write_item: F,
) -> Result<usize>
where
    R: BufRead,
    T: WorkItem,
    W: Write,
    P: FnMut(usize, &str) -> Result<T>,
    F: FnMut(&mut W, &T) -> Result<()>,
{
    debug!(enabled, "expanding start requests");

    let mut read_error = None;
    let items = ReadItems {
        lines: reader.lines().enumerate(),
        parse,
        error: &mut read_error,
    };

    let mut written = 0usize;
    for item in ExpandStartUrls::new(enabled).process_start_requests(items) {
        let item = item.context("Failed to expand start request")?;
        write_item(out, &item).context("Failed to write output")?;
        written += 1;
    }

    match read_error {
        Some(err) => Err(err),
        None => Ok(written),
    }
}

/// Parses non-blank input lines on demand.
///
/// The first read or parse failure is stored in `error` and ends the sequence.
struct ReadItems<'a, R, P> {
    lines: Enumerate<Lines<R>>,
    parse: P,
    error: &'a mut Option<anyhow::Error>,
}

impl<R, T, P> Iterator for ReadItems<'_, R, P>
where
    R: BufRead,
    P: FnMut(usize, &str) -> Result<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.error.is_some() {
            return None;
        }
        for (index, line) in self.lines.by_ref() {
            let parsed = line
                .context("Failed to read input")
                .and_then(|line| match line.trim() {
                    "" => Ok(None),
                    line => (self.parse)(index + 1, line).map(Some),
                });
            match parsed {
                Ok(Some(item)) => return Some(item),
                Ok(None) => continue,
                Err(err) => {
                    *self.error = Some(err);
                    return None;
                }
            }
        }
        None
    }
}
