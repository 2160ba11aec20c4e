use std::error::Error;
use std::path::PathBuf;

use f_gen_sprite::session::{Session, SubmitOutcome};
use fishtank_core::classifier::{ClassifyFn, Verdict};

const TANK_WIDTH: u32 = 560;
const TANK_HEIGHT: u32 = 560;
const DEFAULT_OUTPUT: &str = "snapshot.json";

// The model is an external collaborator; offline every drawing passes.
fn accept_all() -> ClassifyFn {
    Box::new(|_| Verdict::from_confidence(1.0))
}

struct Args {
    drawings: Vec<PathBuf>,
    output: PathBuf,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut drawings = Vec::new();
    let mut output = PathBuf::from(DEFAULT_OUTPUT);

    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        if arg == "-o" || arg == "--output" {
            let value = raw
                .next()
                .ok_or_else(|| format!("{arg} expects a file path"))?;
            output = PathBuf::from(value);
        } else {
            drawings.push(PathBuf::from(arg));
        }
    }

    if drawings.is_empty() {
        return Err("usage: f-gen-sprite <drawing.png>... [-o snapshot.json]".into());
    }

    Ok(Args { drawings, output })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = parse_args()?;

    let mut session = Session::with_classifier(TANK_WIDTH, TANK_HEIGHT, accept_all());

    for path in &args.drawings {
        let canvas = image::open(path)
            .map_err(|err| format!("failed to read {}: {err}", path.display()))?
            .into_rgba8();

        match session.submit(&canvas)? {
            SubmitOutcome::Accepted {
                confidence,
                fish_count,
            } => println!(
                "{}: accepted ({:.0}%), tank holds {fish_count}",
                path.display(),
                confidence * 100.0
            ),
            SubmitOutcome::Rejected { confidence } => println!(
                "{}: rejected ({:.0}%)",
                path.display(),
                confidence * 100.0
            ),
            SubmitOutcome::EmptyCanvas => {
                println!("{}: no ink to extract, skipped", path.display());
            }
            SubmitOutcome::ClassifierUnavailable => {
                println!("{}: classifier unavailable, skipped", path.display());
            }
        }
    }

    let json = session.tank().snapshot().to_json_pretty()?;
    std::fs::write(&args.output, json)?;
    println!("wrote {}", args.output.display());

    Ok(())
}
