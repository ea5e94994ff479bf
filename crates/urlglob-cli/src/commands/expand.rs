//! Expand command implementation
//!
//! Expands glob templates given on the command line.

use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use urlglob::expand;

use super::json_output::{ExpandOutput, JsonError, TemplateExpansion};

/// Run the expand command
///
/// # Arguments
/// * `templates` - Templates to expand, in order
/// * `limit` - Stop each expansion after this many results
/// * `count` - Print the number of results instead of the results
/// * `json` - Output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 range error (JSON mode)
pub fn run(
    templates: &[String],
    limit: Option<usize>,
    count: bool,
    json: bool,
) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let code = if json {
        write_json(&mut out, templates, limit, count)?
    } else {
        write_text(&mut out, templates, limit, count)?;
        ExitCode::SUCCESS
    };

    out.flush().context("Failed to flush output")?;
    Ok(code)
}

/// Streams results one per line. Fails on the first range error.
pub(crate) fn write_text<W: Write>(
    out: &mut W,
    templates: &[String],
    limit: Option<usize>,
    count: bool,
) -> Result<()> {
    for template in templates {
        debug!(template = %template, "expanding template");

        let mut produced = 0usize;
        for url in expand(template).take(limit.unwrap_or(usize::MAX)) {
            let url = url.with_context(|| format!("Failed to expand template: {}", template))?;
            produced += 1;
            if !count {
                writeln!(out, "{}", url).context("Failed to write output")?;
            }
        }

        if count {
            writeln!(out, "{}", produced).context("Failed to write output")?;
        }
        info!(template = %template, count = produced, "expanded template");
    }

    Ok(())
}

/// Writes one JSON document covering every template.
pub(crate) fn write_json<W: Write>(
    out: &mut W,
    templates: &[String],
    limit: Option<usize>,
    count: bool,
) -> Result<ExitCode> {
    let entries = templates
        .iter()
        .map(|template| expand_entry(template, limit, count))
        .collect();
    let output = ExpandOutput::new(entries);

    serde_json::to_writer_pretty(&mut *out, &output).context("Failed to serialize JSON output")?;
    writeln!(out).context("Failed to write output")?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn expand_entry(template: &str, limit: Option<usize>, count_only: bool) -> TemplateExpansion {
    let mut expansion = expand(template);
    let mut urls = Vec::new();
    let mut count = 0usize;
    let mut truncated = false;
    let mut error = None;

    loop {
        if limit.is_some_and(|limit| count >= limit) {
            truncated = expansion.next().is_some();
            break;
        }
        match expansion.next() {
            Some(Ok(url)) => {
                count += 1;
                if !count_only {
                    urls.push(url);
                }
            }
            Some(Err(err)) => {
                warn!(template = %template, code = err.code(), "{}", err);
                error = Some(JsonError::from(&err));
                break;
            }
            None => break,
        }
    }

    TemplateExpansion {
        template: template.to_string(),
        urls: (!count_only).then_some(urls),
        count,
        truncated,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn templates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn text(templates: &[String], limit: Option<usize>, count: bool) -> Result<String> {
        let mut out = Vec::new();
        write_text(&mut out, templates, limit, count)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output_one_per_line() {
        let out = text(&templates(&["a{x,y}", "[1-2]"]), None, false).unwrap();
        assert_eq!(out, "ax\nay\n1\n2\n");
    }

    #[test]
    fn test_text_limit_applies_per_template() {
        let out = text(&templates(&["[1-1000000]", "{p,q,r}"]), Some(2), false).unwrap();
        assert_eq!(out, "1\n2\np\nq\n");
    }

    #[test]
    fn test_text_count() {
        let out = text(&templates(&["{a,b}[1-3]"]), None, true).unwrap();
        assert_eq!(out, "6\n");
    }

    #[test]
    fn test_text_range_error_fails() {
        let err = text(&templates(&["[5-1]"]), None, false).unwrap_err();
        assert!(err.to_string().contains("[5-1]"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_json(&mut out, &templates(&["{a,b}", "[z-a]"]), None, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["templates"][0]["urls"], serde_json::json!(["a", "b"]));
        assert_eq!(value["templates"][0]["count"], 2);
        assert_eq!(value["templates"][1]["error"]["code"], "GLOB_002");
    }

    #[test]
    fn test_entry_truncated_flag() {
        let entry = expand_entry("[1-5]", Some(5), false);
        assert!(!entry.truncated);
        assert_eq!(entry.count, 5);

        let entry = expand_entry("[1-5]", Some(3), true);
        assert!(entry.truncated);
        assert_eq!(entry.count, 3);
        assert!(entry.urls.is_none());
    }
}
