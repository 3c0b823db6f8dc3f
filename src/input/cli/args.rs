use std::fmt;
use std::str::FromStr;

use clap::Parser;

use crate::core::data::area::{Area, DEFAULT_CENTER, DEFAULT_RADIUS};
use crate::core::data::errors::DataError;
use crate::core::data::grid::Grid;
use crate::core::data::point2d::Point2D;
use crate::core::data::steps::Steps;
use crate::core::fractals::mandelbrot::algorithm::DEFAULT_MAX_ITERATIONS;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_PIXEL_STEPS, DEFAULT_TEXT_STEPS, FULL_VIEW_CENTER, FULL_VIEW_RADIUS, MandelbrotConfig,
};

/// Output surface, from `--ui NAME[:OPT;OPT...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiKind {
    Text { flat: bool },
    Ppm,
    Gui,
}

impl UiKind {
    #[must_use]
    pub fn default_steps(self) -> Steps {
        match self {
            Self::Text { .. } => Steps::new(DEFAULT_TEXT_STEPS),
            Self::Ppm | Self::Gui => Steps::new(DEFAULT_PIXEL_STEPS),
        }
    }
}

impl Default for UiKind {
    fn default() -> Self {
        Self::Text { flat: false }
    }
}

impl FromStr for UiKind {
    type Err = DataError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (name, opts) = raw.split_once(':').unwrap_or((raw, ""));
        let opts: Vec<&str> = opts.split(';').filter(|opt| !opt.is_empty()).collect();

        let reject_opts = |kind: UiKind| match opts.first() {
            Some(opt) => Err(DataError::invalid_because(
                "ui",
                raw,
                format!("unknown option {opt:?}"),
            )),
            None => Ok(kind),
        };

        match name {
            "" | "text" => {
                let mut flat = false;
                for opt in &opts {
                    match *opt {
                        "flat" => flat = true,
                        other => {
                            return Err(DataError::invalid_because(
                                "ui",
                                raw,
                                format!("unknown option {other:?}"),
                            ));
                        }
                    }
                }
                Ok(Self::Text { flat })
            }
            "ppm" => reject_opts(Self::Ppm),
            "gui" => reject_opts(Self::Gui),
            _ => Err(DataError::invalid("ui", raw)),
        }
    }
}

impl fmt::Display for UiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { flat: false } => write!(f, "text"),
            Self::Text { flat: true } => write!(f, "text:flat"),
            Self::Ppm => write!(f, "ppm"),
            Self::Gui => write!(f, "gui"),
        }
    }
}

fn parse_max_iter(raw: &str) -> Result<u32, String> {
    let value: i64 = raw.trim().parse().map_err(|err| format!("{err}"))?;
    if value < 0 {
        return Err("got negative --max-iter".to_string());
    }
    u32::try_from(value).map_err(|err| format!("{err}"))
}

#[derive(Debug, Parser)]
#[command(name = "mandelbrot")]
#[command(about = "Render the Mandelbrot set as text, a PPM image or a window")]
#[command(version)]
pub struct Args {
    #[arg(long, help = "Show the whole set (overrides --center and --radius)")]
    pub full: bool,

    #[arg(long, help = "View center as \"x,y\", \"(x,y)\", \"[x,y]\" or \"a+bi\"")]
    pub center: Option<Point2D>,

    #[arg(long, help = "Half the side of the square view")]
    pub radius: Option<f64>,

    #[arg(long, help = "Subdivisions per axis [default: 40 for text, 400 otherwise]")]
    pub steps: Option<Steps>,

    #[arg(
        long = "max-iter",
        allow_negative_numbers = true,
        value_parser = parse_max_iter,
        help = "Iteration bound; 0 selects the default of 100"
    )]
    pub max_iter: Option<u32>,

    #[arg(long, default_value = "text", help = "text[:flat], ppm or gui")]
    pub ui: UiKind,

    #[arg(long, short = 'v', help = "Log debug output to stderr")]
    pub verbose: bool,
}

impl Args {
    /// Resolves the arguments against the render defaults.
    pub fn config(&self) -> Result<MandelbrotConfig, DataError> {
        let (center, radius) = if self.full {
            (FULL_VIEW_CENTER, FULL_VIEW_RADIUS)
        } else {
            (
                self.center.unwrap_or(DEFAULT_CENTER),
                self.radius.unwrap_or(DEFAULT_RADIUS),
            )
        };

        let steps = match self.steps {
            Some(steps) if steps.count() > 0 => steps,
            _ => self.ui.default_steps(),
        };

        Ok(MandelbrotConfig {
            area: Area::from_radius(radius, center)?,
            grid: Grid::square(steps),
            max_iterations: self.max_iter.unwrap_or(DEFAULT_MAX_ITERATIONS),
        })
    }
}
