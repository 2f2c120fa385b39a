//! Implementation of the report run.
//!
//! Reads the clipboard, hands the text to clipdur-core for probing and
//! printing, then waits for a keypress unless `--no-pause` was given.

use crate::cli::Cli;
use crate::clipboard::read_clipboard_text;
use crate::error::CliResult;
use crate::terminal::wait_for_any_key;

use clipdur_core::{
    DurationProber, FfprobeDurationProber, ReportTotals, check_dependency, write_report,
};

use std::io::{self, Write};

use log::debug;

/// Writes the report for `text` to `out` using `prober`.
pub fn print_report<P, W>(prober: &P, text: &str, out: &mut W) -> CliResult<ReportTotals>
where
    P: DurationProber + ?Sized,
    W: Write,
{
    let totals = write_report(prober, text, out)?;
    debug!(
        "Report complete: {} file(s), total {} ({} min)",
        totals.files,
        totals.formatted(),
        totals.formatted_minutes()
    );
    Ok(totals)
}

/// Runs the whole pipeline against the real clipboard, ffprobe and stdout.
pub fn run_report(args: &Cli) -> CliResult<()> {
    check_dependency("ffprobe")?;

    let text = read_clipboard_text()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_report(&FfprobeDurationProber::new(), &text, &mut out)?;
    drop(out);

    if args.no_pause {
        debug!("Skipping exit pause (--no-pause)");
        return Ok(());
    }
    wait_for_any_key()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipdur_core::{CoreError, CoreResult};
    use std::path::Path;

    struct LengthProber;

    impl DurationProber for LengthProber {
        fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
            let name = path.to_string_lossy();
            if name.contains("bad") {
                return Err(CoreError::FfprobeParse(format!("cannot probe {name}")));
            }
            Ok(name.len() as f64 * 10.0)
        }
    }

    #[test]
    fn test_print_report_totals() {
        let mut out = Vec::new();
        let totals = print_report(&LengthProber, "ab\ncdef", &mut out).unwrap();
        assert_eq!(totals.seconds, 60.0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("00:01:00.000\n"));
        assert!(text.contains(&format!("\t{}\n", totals.formatted_minutes())));
    }

    #[test]
    fn test_print_report_stops_at_bad_entry() {
        let mut out = Vec::new();
        let result = print_report(&LengthProber, "a1\na2\nbad", &mut out);
        assert!(result.is_err());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("a1 \t00:00:20.000"));
        assert!(text.contains("a2 \t00:00:20.000"));
        assert!(!text.contains("bad\t"));
        assert!(!text.contains("TOT"));
    }
}
