//! Windows entry point: COM, the shared graphics context, both windows and
//! the message loop.

use std::rc::Rc;

use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, DispatchMessageW, GetMessageW, IsWindow, TranslateMessage, MSG,
};

use compositing::platform::windows::{
    create_child, create_top_level, register_window_classes, GraphicsContext,
};
use compositing::storage::load_config;

/// Main entry point for Windows.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run_app() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run_app() -> compositing::Result<()> {
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);

        CoInitializeEx(None, COINIT_APARTMENTTHREADED)
            .ok()
            .map_err(|e| compositing::Error::factory("Unable to initialise COM.", e.code().0))?;

        let result = run_windows();

        CoUninitialize();
        result
    }
}

/// Everything that holds COM objects; they are all released before COM is
/// uninitialised.
unsafe fn run_windows() -> compositing::Result<()> {
    let config = load_config();
    log::debug!(
        "Window {}x{}, circle {}, child {}",
        config.window.width,
        config.window.height,
        config.circle.color.as_deref().unwrap_or("default"),
        if config.child.enabled { "enabled" } else { "disabled" }
    );
    let graphics = Rc::new(GraphicsContext::new()?);

    register_window_classes()?;
    let window = create_top_level(Rc::clone(&graphics), &config)?;
    if config.child.enabled {
        if let Err(e) = create_child(window, Rc::clone(&graphics), &config) {
            let _ = DestroyWindow(window);
            return Err(e);
        }
    }

    // Message loop
    let mut msg = MSG::default();
    while GetMessageW(&mut msg, None, 0, 0).as_bool() {
        let _ = TranslateMessage(&msg);
        DispatchMessageW(&msg);
    }

    if IsWindow(Some(window)).as_bool() {
        let _ = DestroyWindow(window);
    }
    log::info!("Exiting");
    Ok(())
}
