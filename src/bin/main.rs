use airfoil_import::outline::{ClosedOutline, LineSink};
use airfoil_import::placement::Placement;
use airfoil_import::profile::Profile;
use clap::Parser;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Read a Selig-style airfoil coordinate file and emit the section as a
/// closed polygon, placed between two anchor points or scaled in place.
#[derive(Parser)]
#[command(name = "airfoil-import", version)]
struct Args {
    /// Coordinate file (UIUC database .dat/.txt layout)
    file: PathBuf,

    /// Leading edge anchor as "x,y"
    #[arg(long, value_parser = parse_point, requires = "te", conflicts_with = "scale")]
    le: Option<Point2<f64>>,

    /// Trailing edge anchor as "x,y"
    #[arg(long, value_parser = parse_point, requires = "le", conflicts_with = "scale")]
    te: Option<Point2<f64>>,

    /// Uniform scale about the origin instead of anchor placement
    #[arg(long)]
    scale: Option<f64>,

    /// Emit the placed outline as a JSON document instead of segment lines
    #[arg(long)]
    json: bool,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_point(s: &str) -> Result<Point2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{s}\""))?;
    let x = x.trim().parse().map_err(|e| format!("bad x coordinate: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y coordinate: {e}"))?;

    Ok(Point2::new(x, y))
}

/// Renders each edge as one "x0, y0 -> x1, y1" text line.
struct SegmentWriter<W: Write> {
    out: W,
}

impl<W: Write> LineSink for SegmentWriter<W> {
    fn line(&mut self, a: &Point2<f64>, b: &Point2<f64>) -> Result<(), Box<dyn Error>> {
        writeln!(self.out, "{}, {} -> {}, {}", a.x, a.y, b.x, b.y)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PlacedOutline<'a> {
    name: &'a str,

    #[serde(with = "airfoil_import::serialize::points")]
    points: &'a [Point2<f64>],
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let text = fs::read_to_string(&args.file)?;
    let profile = Profile::parse(&text)?;
    info!(name = %profile.name, count = profile.points.len(), "imported profile");

    let placement = match (args.le, args.te, args.scale) {
        (Some(le), Some(te), None) => Placement::Anchors { le, te },
        (None, None, Some(factor)) => Placement::Scale(factor),
        // Unplaced profiles stay on their own unit chord
        _ => Placement::Anchors {
            le: Point2::new(0.0, 0.0),
            te: Point2::new(1.0, 0.0),
        },
    };

    let placed = placement.apply(&profile.points)?;
    let outline = ClosedOutline::new(placed)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };

    if args.json {
        let doc = PlacedOutline {
            name: &profile.name,
            points: outline.points(),
        };
        serde_json::to_writer_pretty(&mut out, &doc)?;
        writeln!(out)?;
    } else {
        let mut sink = SegmentWriter { out: &mut out };
        outline.draw_into(&mut sink)?;
    }

    Ok(())
}
