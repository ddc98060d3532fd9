//! Compositing demo entry point.

#[cfg(target_os = "windows")]
mod windows_main;

#[cfg(target_os = "windows")]
fn main() {
    windows_main::run();
}

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("compositing requires Windows (DirectComposition)");
    std::process::exit(1);
}
