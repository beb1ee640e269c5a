// File: crates/stress-plot/src/main.rs
// Summary: CLI entry point: one CSV path argument in, one PNG and plain status lines out.

use std::path::Path;
use std::process::Command;

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        println!("Usage: stress-plot <path_to_csv>");
        return;
    };

    println!("Rendering HRV chart from {path} ...");
    match hrv_core::render(&path) {
        Ok(out) => {
            println!("Plot saved successfully as {}", out.display());
            if !try_open_viewer(&out) {
                println!("Note: could not open a viewer window. Image saved to file.");
            }
        }
        Err(err) => println!("Error: {err}"),
    }
}

/// Best-effort launch of the platform image viewer. Failure is benign; the
/// file on disk is already the real output.
fn try_open_viewer(path: &Path) -> bool {
    let spawned = if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()
    } else {
        Command::new("xdg-open").arg(path).spawn()
    };
    spawned.is_ok()
}
