use clap::Parser;
use hulldraw::config::Args;
use hulldraw::render::{BrailleCanvas, Terminal};
use hulldraw::{AnimatedRenderer, Config, Scene};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
  let args = Args::parse();
  init_logging(args.verbose);

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!(error = %err, "aborting");
      eprintln!("hulldraw: {err}");
      ExitCode::FAILURE
    }
  }
}

// Logs go to stderr so they never land inside a frame.
fn init_logging(verbosity: u8) {
  tracing_subscriber::fmt()
    .with_max_level(hulldraw::config::log_level(verbosity))
    .with_writer(io::stderr)
    .init();
}

fn run(args: Args) -> hulldraw::Result<()> {
  let config = Config::try_from(args)?;
  // Both files are read before the first frame is drawn.
  let scene = Scene::from_config(&config)?;
  tracing::info!(
    points = scene.points().len(),
    vertices = scene.hull().len(),
    "playing"
  );

  let canvas = BrailleCanvas::new(config.width, config.height, config.resolution)?;
  let mut terminal = Terminal::new(canvas, io::stdout().lock(), config.delay);
  terminal.repaint()?;
  AnimatedRenderer::new(&scene, &mut terminal)?.run()?;
  drop(terminal);

  if config.wait {
    await_dismissal()?;
  }
  Ok(())
}

fn await_dismissal() -> hulldraw::Result<()> {
  let mut stdout = io::stdout();
  write!(stdout, "Press ENTER to close...").map_err(hulldraw::Error::Canvas)?;
  stdout.flush().map_err(hulldraw::Error::Canvas)?;
  let mut line = String::new();
  io::stdin()
    .lock()
    .read_line(&mut line)
    .map_err(hulldraw::Error::Canvas)?;
  Ok(())
}
