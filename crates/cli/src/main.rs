use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use vidcap_core::capture::domain::capture_session::CaptureSession;
use vidcap_core::capture::domain::writer_session::WriterSession;
use vidcap_core::capture::infrastructure::opencv_capture::OpencvCapture;
use vidcap_core::capture::infrastructure::opencv_writer::OpencvWriter;
use vidcap_core::shared::source::CaptureSource;

/// Probe a camera or video file and optionally copy its frames.
#[derive(Parser)]
#[command(name = "vidcap")]
struct Cli {
    /// Camera index (e.g. 0) or video file / stream URL.
    source: CaptureSource,

    /// Copy frames to this output file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Four-character codec tag for --output.
    #[arg(long, default_value = "MJPG")]
    fourcc: String,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,

    /// Grab a single frame by index (negative counts from the end).
    #[arg(long, allow_hyphen_values = true)]
    frame: Option<i64>,

    /// Where to save the frame grabbed with --frame.
    #[arg(long, default_value = "frame.png")]
    save_to: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut session = CaptureSession::new(OpencvCapture::from_source(&cli.source)?);
    if !session.is_opened() {
        return Err(format!("could not open {}", cli.source).into());
    }

    let (width, height) = session.shape();
    log::info!("{}: {width}x{height} @ {:.2} fps", cli.source, session.fps());
    match session.frame_count() {
        Ok(count) => log::info!("{count} frames"),
        Err(e) => log::info!("frame count unavailable: {e}"),
    }

    if let Some(index) = cli.frame {
        grab_frame(&mut session, index, &cli.save_to)?;
    } else if let Some(output) = &cli.output {
        copy_frames(&mut session, output, &cli.fourcc, cli.max_frames)?;
    } else {
        let read = drain(&mut session, cli.max_frames);
        log::info!("read {read} frames");
    }

    Ok(())
}

fn copy_frames(
    session: &mut CaptureSession<OpencvCapture>,
    output: &Path,
    fourcc: &str,
    max_frames: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Live devices often report 0 fps; the writer needs a real rate.
    let fps = session.fps();
    let fps = if fps > 0.0 { fps } else { 30.0 };

    let writer = OpencvWriter::create(&output.to_string_lossy(), fourcc, fps, session.shape())?;
    let mut sink = WriterSession::new(writer);
    if !sink.is_opened() {
        return Err(format!("could not open {} for writing", output.display()).into());
    }

    let limit = max_frames.unwrap_or(usize::MAX);
    let mut copied = 0usize;
    let mut dropped = 0usize;
    for frame in session.frames().take(limit) {
        if sink.write(&frame) {
            copied += 1;
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::warn!("writer rejected {dropped} frames");
    }
    log::info!("copied {copied} frames to {}", output.display());
    Ok(())
}

fn grab_frame(
    session: &mut CaptureSession<OpencvCapture>,
    index: i64,
    save_to: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = session.frame_at(index)?;
    let params = opencv::core::Vector::new();
    if !opencv::imgcodecs::imwrite(&save_to.to_string_lossy(), &frame, &params)? {
        return Err(format!("could not encode {}", save_to.display()).into());
    }
    log::info!("saved frame {index} to {}", save_to.display());
    Ok(())
}

fn drain(session: &mut CaptureSession<OpencvCapture>, max_frames: Option<usize>) -> usize {
    let limit = max_frames.unwrap_or(usize::MAX);
    session.frames().take(limit).count()
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.fourcc.chars().count() != 4 {
        return Err(format!("fourcc must be four characters, got '{}'", cli.fourcc).into());
    }
    if cli.frame.is_some() && cli.output.is_some() {
        return Err("--frame and --output are mutually exclusive".into());
    }
    Ok(())
}
