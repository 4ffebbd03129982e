/// Spinview - terminal wireframe model viewer
///
/// Loads one or more JSON model files, then renders them as rotating
/// wireframes. Controls:
///   - U/J, I/K, O/L: rotate around x, y, z
///   - R: reset rotation and shape, D: disturb the shape
///   - Mouse wheel: zoom
///   - Q/ESC: quit

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config as LogConfig, WriteLogger};

use spinview_core::{store, Result};
use spinview_terminal::{App, Scene, ViewConfig};

#[derive(Parser, Debug)]
#[command(name = "spinview", about = "Terminal wireframe 3D model viewer")]
struct Args {
    /// Directory containing JSON model files
    #[arg(long, default_value = "assets/models")]
    models: PathBuf,

    /// Optional view configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load every model without prompting
    #[arg(long)]
    all: bool,

    /// Log file (stderr is unusable while the terminal is in raw mode)
    #[arg(long, default_value = "spinview.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _ = WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&args.log_file)?,
    );

    let config = match &args.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };

    let available = store::list_models(&args.models)?;
    if available.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no model files in {}", args.models.display()),
        )
        .into());
    }

    let selection = if args.all {
        available.clone()
    } else {
        prompt_selection(&available)?
    };

    let mut scene = Scene::new(&config);
    for path in &selection {
        let model = store::load_model(path)?;
        info!(
            "loaded {} with {} vertices",
            path.display(),
            model.shape().vertex_count()
        );
        scene.add_model(Rc::new(RefCell::new(model)))?;
    }

    let mut app = App::open(config, scene)?;
    app.run()
}

/// Numbered prompt over the available model files plus an "all" option.
fn prompt_selection(available: &[PathBuf]) -> Result<Vec<PathBuf>> {
    for (index, path) in available.iter().enumerate() {
        println!("{}) {}", index + 1, display_name(path));
    }
    println!("{}) all", available.len() + 1);

    print!("\n> ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let choice: usize = line
        .trim()
        .parse()
        .map_err(|_| invalid_selection(line.trim()))?;
    if choice == available.len() + 1 {
        Ok(available.to_vec())
    } else if (1..=available.len()).contains(&choice) {
        Ok(vec![available[choice - 1].clone()])
    } else {
        Err(invalid_selection(line.trim()))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn invalid_selection(input: &str) -> spinview_core::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("invalid selection: {input:?}"),
    )
    .into()
}
