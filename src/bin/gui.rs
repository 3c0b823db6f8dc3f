use clap::Parser;
use mandelbrot_explorer::{Args, RunGuiCommand, UiKind, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Args::parse();
    args.ui = UiKind::Gui;
    init_logging(args.verbose);

    RunGuiCommand::new(args.config()?).execute()
}
