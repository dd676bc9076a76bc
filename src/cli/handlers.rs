use std::io::{self, Read, Write};

use serde::Serialize;

use crate::core::{
    axis::AxisId,
    config::{Bound, DomainConfig},
    data::{DataPoint, read_csv_from_path},
    domain::Domain,
    error::AppError,
    resolver::resolve,
};

use super::parse::{CsvArgs, OutputArgs, ResolveArgs};

/// One line of `--json` output.
#[derive(Serialize)]
struct Resolved {
    axis: AxisId,
    domain: Domain,
}

fn read_text(path: &str) -> Result<String, AppError> {
    let io_err = |source: io::Error| AppError::Io {
        path: path.to_owned(),
        source,
    };
    if path == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).map_err(io_err)?;
        Ok(s)
    } else {
        std::fs::read_to_string(path).map_err(io_err)
    }
}

/// Resolve every requested axis and write as we go; stop at the first failure.
fn emit<W: Write>(cfg: &DomainConfig, out: &OutputArgs, w: &mut W) -> Result<(), AppError> {
    let io_err = |source: io::Error| AppError::Io {
        path: "<stdout>".into(),
        source,
    };

    for axis in out.axes() {
        let domain = resolve(cfg, axis, out.include_zero)?;
        if out.json {
            let line = serde_json::to_string(&Resolved { axis, domain })?;
            writeln!(w, "{line}").map_err(io_err)?;
        } else {
            writeln!(w, "{axis}: {domain}").map_err(io_err)?;
        }
    }
    Ok(())
}

pub fn resolve_config(a: &ResolveArgs) -> Result<(), AppError> {
    let text = read_text(&a.config)?;
    let cfg = DomainConfig::from_json(&text)?;
    log::info!("loaded configuration from {} ({} points)", a.config, cfg.data.len());
    emit(&cfg, &a.out, &mut io::stdout().lock())
}

/// `--min`/`--max` become flat bounds; the resolver ignores either alone.
fn csv_config(a: &CsvArgs, data: Vec<DataPoint>) -> DomainConfig {
    DomainConfig {
        min_domain: a.min.map(Bound::Scalar),
        max_domain: a.max.map(Bound::Scalar),
        data,
        ..DomainConfig::default()
    }
}

pub fn csv(a: &CsvArgs) -> Result<(), AppError> {
    let data = read_csv_from_path(&a.file)?;
    log::info!("loaded {} rows from {}", data.len(), a.file);
    emit(&csv_config(a, data), &a.out, &mut io::stdout().lock())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "chart-domain";
    println!(
        "
Example invocations
-------------------
• From a CSV file      : {bin} csv sample.csv
• Dependent axis only  : {bin} csv sample.csv --axis y --include-zero
• Explicit bounds      : {bin} csv sample.csv --min 0 --max 100
• JSON configuration   : {bin} resolve --config chart.json --json
• Inline JSON on stdin : echo '{{\"domain\": {{\"x\": [0, 1]}}, \"data\": [{{\"x\": 2, \"y\": 5}}]}}' | {bin} resolve
• Verbose              : {bin} --log-level debug csv sample.csv
"
    );
}
