use std::error::Error;
use std::io::{self, BufWriter};

use clap::Parser;
use mandelbrot_explorer::{
    Args, GlyphTable, MandelbrotConfig, MandelbrotEscapeBands, PpmPresenter, RenderController,
    TextPresenter, UiKind, init_logging,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.ui {
        UiKind::Text { flat } => {
            let table = if flat { GlyphTable::flat() } else { GlyphTable::default() };
            RenderController::new(TextPresenter::new(table)).render(&config, &mut out)?;
        }
        UiKind::Ppm => {
            let presenter = PpmPresenter::new(MandelbrotEscapeBands);
            RenderController::new(presenter).render(&config, &mut out)?;
        }
        UiKind::Gui => run_gui(config)?,
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(config: MandelbrotConfig) -> Result<(), Box<dyn Error>> {
    mandelbrot_explorer::RunGuiCommand::new(config).execute()
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: MandelbrotConfig) -> Result<(), Box<dyn Error>> {
    Err("--ui gui requires the `gui` feature".into())
}
