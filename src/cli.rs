// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::landmarks::{LandmarkSet, VERSIONS};
use crate::config::options::{Credentials, ExportFormat, ExportOptions, RunOptions};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::reconcile::Category;
use crate::scrape::{MarkupBoard, PageFetcher};

pub struct Cli {
    pub opts: RunOptions,
    pub list_categories: bool,
    pub list_landmarks: bool,
}

pub fn run() -> Result<()> {
    crate::log::init();
    let cli = parse_cli(env::args().skip(1))?;

    if cli.list_categories {
        for c in Category::ALL {
            println!("{}", c.label());
        }
        return Ok(());
    }
    if cli.list_landmarks {
        for v in VERSIONS {
            println!("{v}");
        }
        return Ok(());
    }

    let opts = cli.opts;
    let board_page = opts
        .board_page
        .clone()
        .ok_or_else(|| Error::Config(s!("--board <file> is required (see --help)")))?;

    let credentials = Credentials::from_env()?;
    let mut source = PageFetcher::new(&opts.fetch)?;
    let mut board = MarkupBoard::open(&board_page, opts.landmarks.board.clone())?;
    let mut progress = StderrProgress::default();

    let summary = crate::runner::run(&opts, credentials.as_ref(), &mut source, &mut board, Some(&mut progress))?;

    print!("{}", summary.report);
    if let Some(path) = summary.exported {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

pub fn parse_cli<I: IntoIterator<Item = String>>(args: I) -> Result<Cli> {
    let mut opts = RunOptions::default();
    let mut list_categories = false;
    let mut list_landmarks = false;
    let mut categories: Vec<Category> = Vec::new();
    let mut out: Option<PathBuf> = None;
    let mut format = ExportFormat::Csv;

    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--board" | "-b" => opts.board_page = Some(PathBuf::from(next_value(&mut args, &a)?)),
            "--pages" | "-p" => opts.fetch.pages_dir = Some(PathBuf::from(next_value(&mut args, &a)?)),
            "--no-pages" => opts.fetch.pages_dir = None,
            "--offline" => opts.fetch.offline = true,
            "--timeout" => {
                let v = next_value(&mut args, &a)?;
                opts.fetch.timeout_secs = v.parse().map_err(|_| Error::Config(format!("Invalid timeout: {v}")))?;
            }
            "--landmarks" => {
                let v = next_value(&mut args, &a)?;
                opts.landmarks = LandmarkSet::builtin(&v)
                    .ok_or_else(|| Error::Config(format!("Unknown landmark version: {v}")))?;
            }
            "--landmarks-file" => {
                let v = next_value(&mut args, &a)?;
                opts.landmarks = LandmarkSet::load(&PathBuf::from(v))?;
            }
            "--category" | "-c" => {
                let v = next_value(&mut args, &a)?;
                let c = Category::from_label(&v)
                    .ok_or_else(|| Error::Config(format!("Unknown category: {v} (see --list-categories)")))?;
                if !categories.contains(&c) { categories.push(c); }
            }
            "--top" | "-n" => {
                let v = next_value(&mut args, &a)?;
                let n: usize = v.parse().map_err(|_| Error::Config(format!("Invalid count: {v}")))?;
                if n == 0 { return Err(Error::Config(s!("--top must be at least 1"))); }
                opts.report.top_n = n;
            }
            "-o" | "--out" => out = Some(PathBuf::from(next_value(&mut args, &a)?)),
            "--format" => {
                let v = next_value(&mut args, &a)?;
                format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(Error::Config(format!("Unknown format: {other}"))),
                };
            }
            "--list-categories" => list_categories = true,
            "--list-landmarks" => list_landmarks = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(Error::Config(format!("Unknown arg: {a}"))),
        }
    }

    if !categories.is_empty() {
        opts.report.categories = categories;
    }
    opts.export = out.map(|path| ExportOptions { path, format });

    Ok(Cli { opts, list_categories, list_landmarks })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::Config(format!("Missing value for {flag}")))
}

/// Status lines on stderr so stdout carries only the report.
#[derive(Default)]
pub struct StderrProgress {
    phase: String,
    total: usize,
    seen: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, phase: &str, total: usize) {
        self.phase = s!(phase);
        self.total = total;
        self.seen = 0;
        eprintln!("[{phase}] {total} to collect");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.seen += 1;
        eprintln!("[{}] {}/{} {label}", self.phase, self.seen, self.total);
    }

    fn item_failed(&mut self, label: &str, reason: &str) {
        self.seen += 1;
        eprintln!("[{}] {}/{} {label} skipped: {reason}", self.phase, self.seen, self.total);
    }

    fn finish(&mut self) {
        eprintln!("[{}] done", self.phase);
    }
}
