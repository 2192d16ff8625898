use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kinhull::api::{
    convex_hull_with, draw_cloud, hull_stats, is_closed_oriented, is_outward, parse_batches,
    write_faces, write_points, CloudKind, HullCfg, HullRecord, HullStats,
};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::HullProvenance;

#[derive(Parser)]
#[command(name = "kinhull")]
#[command(about = "Batch 3D convex hulls by kinetic divide and conquer")]
struct Cmd {
    /// Log verbosity on stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read point batches and write the faces of each hull
    Hull(HullArgs),
    /// Print seeded random point batches in the input format
    Gen {
        #[arg(long, value_enum, default_value_t = Kind::Sphere)]
        kind: Kind,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 1)]
        batches: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct HullArgs {
    /// Input file (stdin if omitted)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output file (stdout if omitted); also gets a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Rotation angle (radians) about each axis before the hull
    #[arg(long, default_value_t = HullCfg::default().angle)]
    angle: f64,
    /// Relative jitter amplitude after rotation (0 disables)
    #[arg(long, default_value_t = HullCfg::default().jitter)]
    jitter: f64,
    #[arg(long, default_value_t = HullCfg::default().seed)]
    seed: u64,
    /// Log Euler counts per batch and warn on open or inward hulls
    #[arg(long)]
    check: bool,
}

impl HullArgs {
    fn cfg(&self) -> HullCfg {
        HullCfg {
            angle: self.angle,
            jitter: self.jitter,
            seed: self.seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Format {
    fn name(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Sphere,
    Ball,
    Cube,
}

impl From<Kind> for CloudKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Sphere => CloudKind::Sphere,
            Kind::Ball => CloudKind::Ball,
            Kind::Cube => CloudKind::Cube,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);
    match cmd.action {
        Action::Hull(args) => hull(args),
        Action::Gen {
            kind,
            count,
            batches,
            seed,
        } => gen(kind.into(), count, batches, seed, &mut io::stdout().lock()),
        Action::Report => report(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // stdout carries data; logs go to stderr
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn hull(args: HullArgs) -> Result<()> {
    tracing::info!(input = ?args.input, out = ?args.out, format = ?args.format, "hull");
    let mut text = String::new();
    match &args.input {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("opening {}", path.display()))?
                .read_to_string(&mut text)
                .with_context(|| format!("reading {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
        }
    }

    let stats = match &args.out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            let stats = run_hull(&args, &text, &mut sink)?;
            sink.flush()?;
            let record = HullProvenance::new(
                args.input.as_deref(),
                path,
                args.format.name(),
                &args.cfg(),
                &stats,
            );
            let sidecar = provenance::write_sidecar(path, &record)?;
            tracing::info!(sidecar = %sidecar.display(), "provenance");
            stats
        }
        None => {
            let mut sink = BufWriter::new(io::stdout().lock());
            let stats = run_hull(&args, &text, &mut sink)?;
            sink.flush()?;
            stats
        }
    };
    tracing::info!(batches = stats.len(), "done");
    Ok(())
}

/// Parse `text`, hull every batch, write results to `out`.
fn run_hull<W: Write>(args: &HullArgs, text: &str, out: &mut W) -> Result<Vec<HullStats>> {
    let batches = parse_batches(text).context("parsing point batches")?;
    let cfg = args.cfg();
    let mut stats = Vec::with_capacity(batches.len());
    let mut records = Vec::new();
    for (b, points) in batches.iter().enumerate() {
        let faces = convex_hull_with(points, &cfg);
        let s = hull_stats(&faces);
        if args.check {
            let chi = s.euler_characteristic();
            tracing::info!(
                batch = b,
                points = points.len(),
                vertices = s.vertices,
                edges = s.edges,
                faces = s.faces,
                euler = chi,
                "batch"
            );
            if points.len() >= 4 && !(is_closed_oriented(&faces) && is_outward(&faces, points)) {
                tracing::warn!(batch = b, euler = chi, "hull is not a closed outward surface");
            }
        }
        match args.format {
            Format::Text => write_faces(out, &faces)?,
            Format::Json => records.push(HullRecord::new(b, points.len(), &faces, s)),
        }
        stats.push(s);
    }
    if args.format == Format::Json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
    }
    Ok(stats)
}

fn gen<W: Write>(kind: CloudKind, count: usize, batches: usize, seed: u64, out: &mut W) -> Result<()> {
    tracing::info!(%kind, count, batches, seed, "gen");
    writeln!(out, "{batches}")?;
    for b in 0..batches {
        let points = draw_cloud(kind, count, seed.wrapping_add(b as u64));
        write_points(out, &points)?;
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "tool": "kinhull",
        "version": kinhull::VERSION,
        "code_rev": provenance::current_git_rev(),
        "defaults": {
            "angle": HullCfg::default().angle,
            "jitter": HullCfg::default().jitter,
            "seed": HullCfg::default().seed,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: Format) -> HullArgs {
        HullArgs {
            input: None,
            out: None,
            format,
            angle: HullCfg::default().angle,
            jitter: HullCfg::default().jitter,
            seed: HullCfg::default().seed,
            check: true,
        }
    }

    const TETRA_AND_PAIR: &str = "2\n4\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n2\n0 0 0\n1 1 1\n";

    #[test]
    fn text_output_matches_batch_format() {
        let mut buf = Vec::new();
        let stats = run_hull(&args(Format::Text), TETRA_AND_PAIR, &mut buf).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].euler_characteristic(), 2);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "4\n3 0 1 3\n3 0 2 1\n3 0 3 2\n3 1 2 3\n0\n");
    }

    #[test]
    fn json_output_lists_records() {
        let mut buf = Vec::new();
        run_hull(&args(Format::Json), TETRA_AND_PAIR, &mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 2);
        assert_eq!(v[0]["faces"].as_array().unwrap().len(), 4);
        assert_eq!(v[0]["euler"], 2);
        assert_eq!(v[1]["faces"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn malformed_input_is_an_error() {
        let mut buf = Vec::new();
        let err = run_hull(&args(Format::Text), "1\n2\n0 0 zero", &mut buf).unwrap_err();
        assert!(format!("{err:#}").contains("invalid coordinate"));
    }

    #[test]
    fn generated_batches_round_trip_through_hull() {
        let mut input = Vec::new();
        gen(CloudKind::Sphere, 30, 3, 9, &mut input).unwrap();
        let mut buf = Vec::new();
        let stats = run_hull(
            &args(Format::Text),
            std::str::from_utf8(&input).unwrap(),
            &mut buf,
        )
        .unwrap();
        assert_eq!(stats.len(), 3);
        for s in stats {
            assert_eq!(s.vertices, 30);
            assert_eq!(s.euler_characteristic(), 2);
        }
    }

    #[test]
    fn file_to_file_run_writes_output_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.txt");
        let out = dir.path().join("faces.txt");
        std::fs::write(&input, TETRA_AND_PAIR).unwrap();
        let mut a = args(Format::Text);
        let input_name = input.display().to_string();
        a.input = Some(input);
        a.out = Some(out.clone());
        hull(a).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("4\n3 0 1 3\n"));
        let sidecar = std::fs::read(dir.path().join("faces.provenance.json")).unwrap();
        let sidecar: serde_json::Value = serde_json::from_slice(&sidecar).unwrap();
        assert_eq!(sidecar["input"], input_name);
        assert_eq!(sidecar["format"], "text");
        assert_eq!(sidecar["cfg"]["seed"], HullCfg::default().seed);
        assert_eq!(sidecar["batches"].as_array().unwrap().len(), 2);
        assert_eq!(sidecar["batches"][0]["faces"], 4);
        assert_eq!(sidecar["batches"][0]["euler"], 2);
    }

    #[test]
    fn cli_parses_hull_flags() {
        let cmd = Cmd::try_parse_from([
            "kinhull", "-vv", "hull", "--format", "json", "--jitter", "0", "--check",
        ])
        .unwrap();
        assert_eq!(cmd.verbose, 2);
        match cmd.action {
            Action::Hull(a) => {
                assert_eq!(a.format, Format::Json);
                assert_eq!(a.cfg().jitter, 0.0);
                assert_eq!(a.cfg().angle, HullCfg::default().angle);
                assert!(a.check);
            }
            _ => panic!("expected hull subcommand"),
        }
    }
}
