//! Result printing.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use flyreg_registrar::FileResult;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  Table,
  Json,
}

#[derive(Tabled)]
struct Row<'a> {
  #[tabled(rename = "Name")]
  name: &'a str,
  #[tabled(rename = "Status")]
  status: String,
  #[tabled(rename = "Additional Info")]
  info: &'a str,
}

pub fn print_results(
  out: &mut impl Write,
  results: &[FileResult],
  format: OutputFormat,
) -> Result<()> {
  match format {
    OutputFormat::Table => {
      let rows = results.iter().map(|r| Row {
        name: &r.name,
        status: r.status.to_string(),
        info: &r.info,
      });
      let mut table = Table::new(rows);
      table.with(Style::ascii());
      writeln!(out, "{table}")?;
    }
    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(results)?)?,
  }
  Ok(())
}
