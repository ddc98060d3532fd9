//! Native windows hosting the two surfaces.
//!
//! Each window owns a boxed `RefCell<Surface<CompositionBackend>>` stored in
//! `GWLP_USERDATA`. The box is created right after the window and reclaimed
//! on `WM_NCDESTROY`, the last message a window receives.

use std::cell::RefCell;
use std::rc::Rc;

use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{BeginPaint, EndPaint, InvalidateRect, UpdateWindow, PAINTSTRUCT};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::GetDpiForWindow;
use windows::Win32::UI::Shell::{DragAcceptFiles, DragFinish, DragQueryFileW, HDROP};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, CreateWindowExW, DefWindowProcW, DestroyWindow, GetWindowLongPtrW,
    LoadCursorW, MoveWindow, PostQuitMessage, RegisterClassW, SetWindowLongPtrW, SetWindowPos,
    ShowWindow, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, GWLP_USERDATA, IDC_ARROW, SWP_NOMOVE,
    SWP_NOZORDER, SW_SHOW, WINDOW_STYLE, WM_DESTROY, WM_DISPLAYCHANGE,
    WM_DROPFILES, WM_KEYDOWN, WM_NCDESTROY, WM_PAINT, WM_SIZE, WNDCLASSW,
    WS_CHILD, WS_EX_NOREDIRECTIONBITMAP, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
};

use super::backend::CompositionBackend;
use super::graphics::GraphicsContext;
use crate::error::{Error, HResult, Result};
use crate::events::{EventResponse, SurfaceEvent};
use crate::model::constants::{CHILD_CLASS_NAME, MAX_DROPPED_PATH, TOP_LEVEL_CLASS_NAME};
use crate::model::geometry::scale_for_dpi;
use crate::model::image_source::dropped_path_from_wide;
use crate::render::{Surface, SurfaceOptions};
use crate::storage::AppConfig;

type WindowSurface = RefCell<Surface<CompositionBackend>>;

/// Register the top-level and child window classes. Call once per process.
pub fn register_window_classes() -> Result<()> {
    register_class(TOP_LEVEL_CLASS_NAME)?;
    register_class(CHILD_CLASS_NAME)
}

fn register_class(class: &str) -> Result<()> {
    let class_name = HSTRING::from(class);
    unsafe {
        let instance = GetModuleHandleW(None).map_err(window_error(class))?;
        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW).map_err(window_error(class))?,
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            return Err(window_error(class)(windows::core::Error::from_win32()));
        }
    }
    Ok(())
}

/// Create, size and show the top-level window. It accepts dropped files.
pub fn create_top_level(graphics: Rc<GraphicsContext>, config: &AppConfig) -> Result<HWND> {
    let class = TOP_LEVEL_CLASS_NAME;
    unsafe {
        let hwnd = create_window(
            class,
            &config.window.title,
            WS_OVERLAPPEDWINDOW,
            None,
        )?;

        destroy_on_error(hwnd, || {
            let font = (config.text.font_family.as_str(), config.text.font_size);
            attach_surface(hwnd, graphics, config.top_level_options(), Some(font))?;

            DragAcceptFiles(hwnd, true);

            let dpi = GetDpiForWindow(hwnd);
            SetWindowPos(
                hwnd,
                None,
                0,
                0,
                scale_for_dpi(config.window.width, dpi),
                scale_for_dpi(config.window.height, dpi),
                SWP_NOMOVE | SWP_NOZORDER,
            )
            .map_err(window_error(class))
        })?;

        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);

        log::info!("Top-level window created");
        Ok(hwnd)
    }
}

/// Create the child window inside `parent`, sized so its client area matches
/// the configured logical size.
pub fn create_child(
    parent: HWND,
    graphics: Rc<GraphicsContext>,
    config: &AppConfig,
) -> Result<HWND> {
    let class = CHILD_CLASS_NAME;
    let style = WS_CHILD | WS_VISIBLE;
    unsafe {
        let hwnd = create_window(class, "", style, Some(parent))?;
        destroy_on_error(hwnd, || {
            attach_surface(hwnd, graphics, config.child_options(), None)?;

            let dpi = GetDpiForWindow(hwnd);
            let mut rect = RECT {
                left: 0,
                top: 0,
                right: scale_for_dpi(config.child.width, dpi),
                bottom: scale_for_dpi(config.child.height, dpi),
            };
            AdjustWindowRectEx(&mut rect, style, false, WS_EX_NOREDIRECTIONBITMAP)
                .map_err(window_error(class))?;

            MoveWindow(
                hwnd,
                scale_for_dpi(config.child.x, dpi),
                scale_for_dpi(config.child.y, dpi),
                rect.right - rect.left,
                rect.bottom - rect.top,
                true,
            )
            .map_err(window_error(class))
        })?;

        let _ = ShowWindow(hwnd, SW_SHOW);

        log::info!("Child window created");
        Ok(hwnd)
    }
}

unsafe fn create_window(
    class: &str,
    title: &str,
    style: WINDOW_STYLE,
    parent: Option<HWND>,
) -> Result<HWND> {
    let instance = GetModuleHandleW(None).map_err(window_error(class))?;
    // Child windows are positioned once their surface exists.
    let origin = if parent.is_some() { 0 } else { CW_USEDEFAULT };
    CreateWindowExW(
        WS_EX_NOREDIRECTIONBITMAP,
        &HSTRING::from(class),
        &HSTRING::from(title),
        style,
        origin,
        origin,
        origin,
        origin,
        parent,
        None,
        Some(instance.into()),
        None,
    )
    .map_err(window_error(class))
}

/// Build the window's surface and hand its ownership to the window.
unsafe fn attach_surface(
    hwnd: HWND,
    graphics: Rc<GraphicsContext>,
    options: SurfaceOptions,
    font: Option<(&str, f32)>,
) -> Result<()> {
    let backend = CompositionBackend::new(hwnd, graphics, font)?;
    let surface: Box<WindowSurface> = Box::new(RefCell::new(Surface::new(backend, options)));
    SetWindowLongPtrW(hwnd, GWLP_USERDATA, Box::into_raw(surface) as isize);
    Ok(())
}

/// Run the setup steps of a freshly created window. The window is destroyed
/// if any of them fails, which also frees an attached surface.
unsafe fn destroy_on_error<T>(hwnd: HWND, setup: impl FnOnce() -> Result<T>) -> Result<T> {
    let result = setup();
    if result.is_err() {
        let _ = DestroyWindow(hwnd);
    }
    result
}

fn window_error(class: &str) -> impl Fn(windows::core::Error) -> Error + '_ {
    move |e| Error::Window {
        class: class.to_string(),
        code: HResult(e.code().0),
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        let surface = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowSurface;

        if msg == WM_NCDESTROY {
            if !surface.is_null() {
                SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
                drop(Box::from_raw(surface));
            }
            return DefWindowProcW(hwnd, msg, wparam, lparam);
        }

        if surface.is_null() {
            return DefWindowProcW(hwnd, msg, wparam, lparam);
        }

        if msg == WM_PAINT {
            let mut ps = PAINTSTRUCT::default();
            let _hdc = BeginPaint(hwnd, &mut ps);
            dispatch(&*surface, SurfaceEvent::Paint);
            let _ = EndPaint(hwnd, &ps);
            return LRESULT(0);
        }

        let Some(event) = translate(msg, wparam, lparam) else {
            return DefWindowProcW(hwnd, msg, wparam, lparam);
        };

        match dispatch(&*surface, event) {
            EventResponse::Handled => LRESULT(0),
            EventResponse::Redraw => {
                let _ = InvalidateRect(Some(hwnd), None, false);
                LRESULT(0)
            }
            EventResponse::Quit => {
                PostQuitMessage(0);
                LRESULT(0)
            }
            EventResponse::Unhandled => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}

/// Deliver `event`, leaving re-entrant messages to default processing.
fn dispatch(surface: &WindowSurface, event: SurfaceEvent) -> EventResponse {
    match surface.try_borrow_mut() {
        Ok(mut surface) => {
            log::trace!("{:?}: {}", surface.kind(), event.description());
            surface.handle(event)
        }
        Err(_) => EventResponse::Unhandled,
    }
}

unsafe fn translate(msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<SurfaceEvent> {
    match msg {
        WM_SIZE => Some(SurfaceEvent::Resized {
            width: (lparam.0 & 0xFFFF) as u32,
            height: ((lparam.0 >> 16) & 0xFFFF) as u32,
        }),
        WM_DISPLAYCHANGE => Some(SurfaceEvent::DisplayChanged),
        WM_DROPFILES => {
            let drop = HDROP(wparam.0 as *mut _);
            let mut buffer = [0u16; MAX_DROPPED_PATH];
            let copied = DragQueryFileW(drop, 0, Some(&mut buffer)) as usize;
            DragFinish(drop);
            dropped_path_from_wide(&buffer[..copied.min(buffer.len())], MAX_DROPPED_PATH)
                .map(SurfaceEvent::FileDropped)
        }
        WM_KEYDOWN => Some(SurfaceEvent::KeyDown(wparam.0 as u32)),
        WM_DESTROY => Some(SurfaceEvent::Destroyed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::core::w;
    use windows::Win32::UI::WindowsAndMessaging::{IsWindow, WINDOW_EX_STYLE};

    fn static_control() -> HWND {
        unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                w!("STATIC"),
                w!(""),
                WINDOW_STYLE(0),
                0,
                0,
                16,
                16,
                None,
                None,
                None,
                None,
            )
            .expect("static control")
        }
    }

    #[test]
    fn failed_setup_destroys_the_window() {
        let hwnd = static_control();
        let result: Result<()> = unsafe {
            destroy_on_error(hwnd, || {
                Err(Error::Window {
                    class: "STATIC".into(),
                    code: HResult(-1),
                })
            })
        };

        assert!(result.is_err());
        assert!(!unsafe { IsWindow(Some(hwnd)) }.as_bool());
    }

    #[test]
    fn successful_setup_keeps_the_window() {
        let hwnd = static_control();
        let result = unsafe { destroy_on_error(hwnd, || Ok(7)) };

        assert_eq!(result.ok(), Some(7));
        assert!(unsafe { IsWindow(Some(hwnd)) }.as_bool());
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
    }
}
