/// Generate a sphere model file over a rings x rings parametric grid.
///
/// Usage: cargo run --example gen_sphere -- [output-path]
/// Prompts for radius, rings, and color; writes vertices only.

use std::io::{self, Write};
use std::path::PathBuf;

use spinview_core::{store, Result, Rgb};

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/models/sphere.json"));

    let radius: f64 = prompt("radius: ")?;
    let rings: u32 = prompt("rings: ")?;
    let color = prompt_color()?;

    let record = store::sphere_record(radius, rings, color);
    store::save_record(&output, &record)?;
    println!(
        "wrote {} vertices to {}",
        record.shape.vertices.len(),
        output.display()
    );
    Ok(())
}

fn prompt<T: std::str::FromStr>(label: &str) -> Result<T> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    line.trim()
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, format!("invalid {label:?}")).into())
}

fn prompt_color() -> Result<Rgb> {
    print!("color (r g b): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let parts: Vec<u8> = line
        .split_whitespace()
        .filter_map(|part| part.parse().ok())
        .collect();
    match parts[..] {
        [r, g, b] => Ok([r, g, b]),
        _ => Err(io::Error::new(io::ErrorKind::InvalidInput, "expected three 0-255 values").into()),
    }
}
