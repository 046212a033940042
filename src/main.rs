use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use fractal_viewport::{
    EngineConfig, FilePresenterPort, FractalEngine, JsonFilePresenter, PpmFilePresenter,
};

/// Render one frame of the Mandelbrot set to a file.
#[derive(Parser, Debug)]
#[command(name = "fractal-viewport", version)]
struct Cli {
    /// Output raster width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output raster height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Real part of the view center, as a decimal string.
    #[arg(long, allow_hyphen_values = true)]
    center_re: Option<String>,

    /// Imaginary part of the view center, as a decimal string.
    #[arg(long, allow_hyphen_values = true)]
    center_im: Option<String>,

    /// Half-width of the view along the shorter raster side.
    #[arg(long)]
    zoom: Option<String>,

    #[arg(long)]
    max_iterations: Option<i64>,

    /// Palette name (classic, fire-gradient, blue-white-gradient).
    #[arg(long)]
    palette: Option<String>,

    /// Zoom into the square X,Y,SIZE of the output raster. Applied in order
    /// after the other view options.
    #[arg(long = "zoom-box", value_name = "X,Y,SIZE", allow_hyphen_values = true)]
    zoom_boxes: Vec<ZoomBox>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ppm)]
    format: OutputFormat,

    /// Output file path.
    #[arg(long, default_value = "output/mandelbrot.ppm")]
    out: PathBuf,

    /// Log mutations and parameter rejections.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Ppm,
    Json,
}

#[derive(Clone, Copy, Debug)]
struct ZoomBox {
    x: i32,
    y: i32,
    size: i32,
}

impl FromStr for ZoomBox {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        let [x, y, size] = parts.as_slice() else {
            return Err(format!("expected X,Y,SIZE, got {value:?}"));
        };
        let parse = |part: &str| {
            part.parse::<i32>()
                .map_err(|err| format!("{part:?} in {value:?}: {err}"))
        };

        Ok(Self {
            x: parse(*x)?,
            y: parse(*y)?,
            size: parse(*size)?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = FractalEngine::new(config).context("creating engine")?;

    if let Some(value) = &cli.center_re {
        engine.set_pos_re(value).context("--center-re")?;
    }
    if let Some(value) = &cli.center_im {
        engine.set_pos_im(value).context("--center-im")?;
    }
    if let Some(value) = &cli.zoom {
        engine.set_zoom(value).context("--zoom")?;
    }
    if let Some(value) = cli.max_iterations {
        engine.set_max_iterations(value).context("--max-iterations")?;
    }
    if let Some(value) = &cli.palette {
        engine.set_palette(value).context("--palette")?;
    }
    for zoom_box in &cli.zoom_boxes {
        engine
            .zoom_into_box(zoom_box.x, zoom_box.y, zoom_box.size, cli.width, cli.height)
            .with_context(|| format!("--zoom-box {},{},{}", zoom_box.x, zoom_box.y, zoom_box.size))?;
    }

    tracing::info!(
        center_re = engine.get_pos_re(),
        center_im = engine.get_pos_im(),
        zoom = engine.get_zoom(),
        max_iterations = engine.get_max_iterations(),
        palette = %engine.palette(),
        "rendering"
    );

    let frame = engine.render_frame(cli.width, cli.height)?;

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let written = match cli.format {
        OutputFormat::Ppm => PpmFilePresenter::new().present(&frame, &cli.out),
        OutputFormat::Json => JsonFilePresenter::new().present(&frame, &cli.out),
    };
    written.with_context(|| format!("writing {}", cli.out.display()))?;

    tracing::info!(path = %cli.out.display(), "saved");

    Ok(())
}
