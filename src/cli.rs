// src/cli.rs
use std::{env, io::Write};

use crate::{
    config::consts::MAX_PAGES,
    config::options::{AppOptions, ExportFormat},
    file,
    progress::Progress,
    scrape,
};

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page: u32, total_rows: usize) {
        eprintln!("Retrieved {total_rows} demos so far... (page {page} complete)");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = AppOptions::default();
    let mut to_stdout = false;
    parse_cli(&mut options, &mut to_stdout)?;

    let mut progress = CliProgress;
    let rows = scrape::collect_chart(options.scrape.max_pages, Some(&mut progress))?;

    if to_stdout {
        let txt = file::export_string(&options.export, &rows);
        std::io::stdout().write_all(txt.as_bytes())?;
    } else {
        let path = file::write_export(&options.export, &rows)?;
        eprintln!("Wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

fn parse_cli(
    options: &mut AppOptions,
    to_stdout: &mut bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                options.export.set_path(&v);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => options.export.include_headers = false,
            "--max-pages" => {
                let v: u32 = args.next().ok_or("Missing value for --max-pages")?.parse()?;
                if v == 0 || v > MAX_PAGES {
                    return Err(format!("--max-pages out of range (1..={})", MAX_PAGES).into());
                }
                options.scrape.max_pages = v; }
            "--stdout" => *to_stdout = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
