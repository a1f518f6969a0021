mod draw;
mod fixtures;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use shclip::api::{is_convex, polygon_from_pairs, polygon_to_pairs};
use shclip::intersect_polygons;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::{write_sidecar, ClipRecord};

#[derive(Parser)]
#[command(name = "shclip")]
#[command(about = "Polygon clipping fixtures, renders and one-off runs")]
struct Cmd {
    /// Maximum log level written to stderr
    #[arg(long, global = true, default_value = "info")]
    log: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the built-in fixture sets and print a per-case report
    Fixtures {
        /// JSON array of extra clip fixtures run as an additional set
        #[arg(long)]
        extra: Option<PathBuf>,
    },
    /// Clip one subject against one clip polygon read from JSON
    Clip {
        #[arg(long)]
        input: PathBuf,
        /// Write the result here (with a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render every built-in clip fixture to `test{k}.bmp`
    Draw {
        #[arg(long, default_value = "testy")]
        out_dir: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Deserialize)]
struct ClipInput {
    subject: Vec<[f64; 2]>,
    clip: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct ClipOutput {
    result: Vec<[f64; 2]>,
    area: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Fixtures { extra } => run_fixtures(extra.as_deref()),
        Action::Clip { input, out } => clip(&input, out.as_deref()),
        Action::Draw { out_dir } => draw_all(&out_dir),
        Action::Report => report(),
    }
}

fn run_fixtures(extra: Option<&Path>) -> Result<()> {
    let extra = match extra {
        Some(path) => fixtures::load_clip_fixtures(path)?,
        None => Vec::new(),
    };
    let reports = fixtures::run_all(&extra);
    for report in &reports {
        println!("{}", report.title);
        for (k, verdict) in report.verdicts.iter().enumerate() {
            println!("case {}: {verdict}", k + 1);
            if *verdict != fixtures::Verdict::Ok {
                tracing::warn!(set = report.title, case = k + 1, "fixture failed");
            }
        }
        println!("{}/{}", report.passed(), report.verdicts.len());
        println!();
    }
    let failed: Vec<&str> = reports
        .iter()
        .filter(|r| !r.all_passed())
        .map(|r| r.title)
        .collect();
    if !failed.is_empty() {
        bail!("fixture sets with failures: {}", failed.join(", "));
    }
    tracing::info!(sets = reports.len(), "all fixtures passed");
    Ok(())
}

fn clip(input: &Path, out: Option<&Path>) -> Result<()> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let parsed: ClipInput =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", input.display()))?;
    let subject = polygon_from_pairs(&parsed.subject);
    let clip = polygon_from_pairs(&parsed.clip);
    if !is_convex(&clip) {
        tracing::warn!(
            vertices = clip.len(),
            "clip polygon is not convex; the result is only meaningful for convex clips"
        );
    }
    let result = intersect_polygons(&subject, &clip)?;
    let record = ClipRecord::new(&subject, &clip, &result);
    let output = ClipOutput {
        area: record.result_area,
        result: polygon_to_pairs(&result),
    };
    tracing::info!(
        subject = record.subject_vertices,
        clip = record.clip_vertices,
        result = record.result_vertices,
        area = record.result_area,
        "clip"
    );
    let json = serde_json::to_string_pretty(&output)?;
    match out {
        None => println!("{json}"),
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
            write_sidecar(out, "clip", Some(input), &record)?;
        }
    }
    Ok(())
}

fn draw_all(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let cases = fixtures::clip_cases()
        .into_iter()
        .chain(fixtures::duplicate_clip_cases());
    for (k, case) in cases.enumerate() {
        let k = k + 1;
        let subject = polygon_from_pairs(&case.subject);
        let clip = polygon_from_pairs(&case.clip);
        let result = match intersect_polygons(&subject, &clip) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(case = k, error = %e, "skipping render");
                continue;
            }
        };
        let path = out_dir.join(format!("test{k}.bmp"));
        draw::save(&path, &subject, &clip, &result)?;
        let record = ClipRecord::new(&subject, &clip, &result).with_fixture(k);
        write_sidecar(&path, "draw", None, &record)?;
        tracing::info!(case = k, path = %path.display(), "rendered");
    }
    Ok(())
}

fn report() -> Result<()> {
    let sets: Vec<serde_json::Value> = fixtures::run_all(&[])
        .iter()
        .map(|r| {
            serde_json::json!({
                "set": r.title,
                "passed": r.passed(),
                "total": r.verdicts.len()
            })
        })
        .collect();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "shclip_version": shclip::VERSION,
        "fixtures": sets
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
