//! Direct2D + DirectComposition implementation of [`Backend`].
//!
//! Per window, the Direct2D device and the DirectComposition device are
//! created once; the device context, swap chain, composition target and
//! visual, and brush form the [`CompositionTarget`] that a surface builds and
//! drops as one unit.

use std::mem::ManuallyDrop;
use std::rc::Rc;

use windows::core::HRESULT;
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_PIXEL_FORMAT, D2D_RECT_F,
};
use windows::Win32::Graphics::Direct2D::{
    ID2D1Bitmap1, ID2D1Device, ID2D1DeviceContext, ID2D1Image, ID2D1SolidColorBrush,
    D2D1_BITMAP_OPTIONS_CANNOT_DRAW, D2D1_BITMAP_OPTIONS_TARGET, D2D1_BITMAP_PROPERTIES1,
    D2D1_DEVICE_CONTEXT_OPTIONS_NONE, D2D1_DRAW_TEXT_OPTIONS_NONE, D2D1_ELLIPSE,
    D2D1_INTERPOLATION_MODE_LINEAR, D2DERR_RECREATE_TARGET,
};
use windows::Win32::Graphics::DirectComposition::{
    DCompositionCreateDevice, IDCompositionDevice, IDCompositionTarget, IDCompositionVisual,
};
use windows::Win32::Graphics::DirectWrite::{IDWriteTextFormat, DWRITE_MEASURING_MODE_NATURAL};
use windows::Win32::Graphics::Dxgi::Common::{DXGI_FORMAT_B8G8R8A8_UNORM, DXGI_FORMAT_UNKNOWN};
use windows::Win32::Graphics::Dxgi::{
    IDXGIDevice, IDXGISurface, IDXGISwapChain1, DXGI_ERROR_DEVICE_REMOVED,
    DXGI_ERROR_DEVICE_RESET, DXGI_PRESENT, DXGI_STATUS_OCCLUDED, DXGI_SWAP_CHAIN_FLAG,
};
use windows::Win32::Graphics::Imaging::IWICBitmapSource;
use windows::Win32::UI::HiDpi::GetDpiForWindow;
use windows::Win32::UI::WindowsAndMessaging::GetClientRect;
use windows_numerics::{Matrix3x2, Vector2};

use super::graphics::GraphicsContext;
use crate::error::{Error, HResult, SurfaceError};
use crate::model::constants::{BASE_DPI, TEXT_COLOR};
use crate::model::{Color, ImageSource, PixelSize, RectF, SizeF};
use crate::render::{Backend, DrawCommand, PresentOutcome};

/// Device-dependent resources of one window.
pub struct CompositionTarget {
    dc: ID2D1DeviceContext,
    swap_chain: IDXGISwapChain1,
    // Kept alive so the visual tree stays bound to the window.
    _target: IDCompositionTarget,
    _visual: IDCompositionVisual,
    brush: ID2D1SolidColorBrush,
}

/// A decoded image and the name it is reported under.
pub struct DecodedImage {
    source: IWICBitmapSource,
    name: String,
}

pub struct CompositionBackend {
    hwnd: HWND,
    graphics: Rc<GraphicsContext>,
    dxgi_device: IDXGIDevice,
    d2d_device: ID2D1Device,
    composition: IDCompositionDevice,
    text_format: Option<IDWriteTextFormat>,
}

impl CompositionBackend {
    /// Create the per-window devices. `font` is the status text font; `None`
    /// for surfaces that draw no text.
    pub fn new(
        hwnd: HWND,
        graphics: Rc<GraphicsContext>,
        font: Option<(&str, f32)>,
    ) -> Result<Self, Error> {
        let dxgi_device = graphics
            .direct3d
            .dxgi_device()
            .map_err(|e| Error::factory("Unable to query DXGI device.", e.code().0))?;
        let d2d_device = graphics
            .direct2d
            .create_device(&dxgi_device)
            .map_err(|e| Error::factory("Unable to create Direct2D device.", e.code().0))?;
        let composition: IDCompositionDevice = unsafe { DCompositionCreateDevice(&dxgi_device) }
            .map_err(|e| Error::factory("Unable to create composition device.", e.code().0))?;

        let text_format = font.and_then(|(family, size)| {
            match graphics.direct_write.create_text_format(family, size) {
                Ok(format) => Some(format),
                Err(e) => {
                    log::warn!("Text format {:?} {}: {}", family, size, e);
                    None
                }
            }
        });

        Ok(Self {
            hwnd,
            graphics,
            dxgi_device,
            d2d_device,
            composition,
            text_format,
        })
    }

    fn dpi(&self) -> f32 {
        match unsafe { GetDpiForWindow(self.hwnd) } {
            0 => BASE_DPI as f32,
            dpi => dpi as f32,
        }
    }
}

impl Backend for CompositionBackend {
    type Target = CompositionTarget;
    type Source = DecodedImage;
    type Bitmap = ID2D1Bitmap1;

    fn client_size(&self) -> PixelSize {
        let mut rect = RECT::default();
        if unsafe { GetClientRect(self.hwnd, &mut rect) }.is_err() {
            return PixelSize::default();
        }
        PixelSize::new(
            (rect.right - rect.left).max(0) as u32,
            (rect.bottom - rect.top).max(0) as u32,
        )
    }

    fn create_target(&mut self, size: PixelSize) -> Result<CompositionTarget, SurfaceError> {
        unsafe {
            let dc = self
                .d2d_device
                .CreateDeviceContext(D2D1_DEVICE_CONTEXT_OPTIONS_NONE)
                .map_err(device_error("CreateDeviceContext"))?;

            let swap_chain = self
                .graphics
                .dxgi
                .create_swap_chain(&self.dxgi_device, size)
                .map_err(device_error("CreateSwapChainForComposition"))?;

            bind_back_buffer(&dc, &swap_chain, self.dpi())?;

            let target = self
                .composition
                .CreateTargetForHwnd(self.hwnd, true)
                .map_err(device_error("CreateTargetForHwnd"))?;
            let visual = self
                .composition
                .CreateVisual()
                .map_err(device_error("CreateVisual"))?;
            visual
                .SetContent(&swap_chain)
                .map_err(device_error("SetContent"))?;
            target
                .SetRoot(&visual)
                .map_err(device_error("SetRoot"))?;
            self.composition
                .Commit()
                .map_err(device_error("Commit"))?;

            let brush = dc
                .CreateSolidColorBrush(&d2d_color(TEXT_COLOR), None)
                .map_err(device_error("CreateSolidColorBrush"))?;

            Ok(CompositionTarget {
                dc,
                swap_chain,
                _target: target,
                _visual: visual,
                brush,
            })
        }
    }

    fn resize_target(
        &mut self,
        target: &mut CompositionTarget,
        size: PixelSize,
    ) -> Result<(), SurfaceError> {
        unsafe {
            // The swap chain cannot resize while its buffers are referenced.
            target.dc.SetTarget(None::<&ID2D1Image>);
            target
                .swap_chain
                .ResizeBuffers(
                    0,
                    size.width,
                    size.height,
                    DXGI_FORMAT_UNKNOWN,
                    DXGI_SWAP_CHAIN_FLAG(0),
                )
                .map_err(device_error("ResizeBuffers"))?;
            bind_back_buffer(&target.dc, &target.swap_chain, self.dpi())
        }
    }

    fn target_size(&self, target: &CompositionTarget) -> SizeF {
        let size = unsafe { target.dc.GetSize() };
        SizeF::new(size.width, size.height)
    }

    fn load_source(&mut self, image: &ImageSource) -> Result<DecodedImage, SurfaceError> {
        let name = image.to_string();
        match self.graphics.direct2d.load(image) {
            Ok(source) => Ok(DecodedImage { source, name }),
            Err(e) => Err(SurfaceError::Image {
                source_name: name,
                code: HResult(e.code().0),
            }),
        }
    }

    fn source_size(&self, source: &DecodedImage) -> Result<PixelSize, SurfaceError> {
        let (mut width, mut height) = (0u32, 0u32);
        unsafe { source.source.GetSize(&mut width, &mut height) }
            .map_err(|e| image_error(&source.name, e))?;
        Ok(PixelSize::new(width, height))
    }

    fn create_bitmap(
        &mut self,
        target: &CompositionTarget,
        source: &DecodedImage,
        scale_to: Option<PixelSize>,
    ) -> Result<ID2D1Bitmap1, SurfaceError> {
        let direct2d = &self.graphics.direct2d;
        let scaled = match scale_to {
            Some(size) => direct2d
                .create_scaler(&source.source, size)
                .map_err(|e| image_error(&source.name, e))?,
            None => source.source.clone(),
        };
        direct2d
            .create_bitmap(&scaled, &target.dc)
            .map_err(|e| image_error(&source.name, e))
    }

    fn bitmap_size(&self, bitmap: &ID2D1Bitmap1) -> SizeF {
        let size = unsafe { bitmap.GetSize() };
        SizeF::new(size.width, size.height)
    }

    fn draw(
        &mut self,
        target: &mut CompositionTarget,
        commands: &[DrawCommand],
        bitmap: Option<&ID2D1Bitmap1>,
    ) -> Result<(), SurfaceError> {
        let dc = &target.dc;
        unsafe {
            dc.BeginDraw();
            dc.SetTransform(&Matrix3x2::identity());

            for command in commands {
                match command {
                    DrawCommand::Clear(color) => dc.Clear(Some(&d2d_color(*color))),
                    DrawCommand::FillEllipse {
                        center,
                        radius,
                        color,
                    } => {
                        target.brush.SetColor(&d2d_color(*color));
                        let ellipse = D2D1_ELLIPSE {
                            point: Vector2::new(center.x, center.y),
                            radiusX: *radius,
                            radiusY: *radius,
                        };
                        dc.FillEllipse(&ellipse, &target.brush);
                    }
                    DrawCommand::DrawBitmap { dest } => {
                        if let Some(bitmap) = bitmap {
                            dc.DrawBitmap(
                                bitmap,
                                Some(&d2d_rect(*dest)),
                                1.0,
                                D2D1_INTERPOLATION_MODE_LINEAR,
                                None,
                                None,
                            );
                        }
                    }
                    DrawCommand::DrawText {
                        text,
                        layout,
                        color,
                    } => {
                        if let Some(format) = &self.text_format {
                            target.brush.SetColor(&d2d_color(*color));
                            let wide: Vec<u16> = text.encode_utf16().collect();
                            dc.DrawText(
                                &wide,
                                format,
                                &d2d_rect(*layout),
                                &target.brush,
                                D2D1_DRAW_TEXT_OPTIONS_NONE,
                                DWRITE_MEASURING_MODE_NATURAL,
                            );
                        }
                    }
                }
            }

            dc.EndDraw(None, None).map_err(device_error("EndDraw"))
        }
    }

    fn present(&mut self, target: &mut CompositionTarget) -> Result<PresentOutcome, SurfaceError> {
        let hr = unsafe { target.swap_chain.Present(1, DXGI_PRESENT(0)) };
        if hr == DXGI_STATUS_OCCLUDED {
            return Ok(PresentOutcome::Occluded);
        }
        hr.ok().map_err(device_error("Present"))?;
        Ok(PresentOutcome::Presented)
    }
}

/// Wrap the swap chain's back buffer in a target bitmap at the window's DPI
/// and make it the device context's target.
unsafe fn bind_back_buffer(
    dc: &ID2D1DeviceContext,
    swap_chain: &IDXGISwapChain1,
    dpi: f32,
) -> Result<(), SurfaceError> {
    let surface: IDXGISurface = swap_chain
        .GetBuffer(0)
        .map_err(device_error("GetBuffer"))?;

    let properties = D2D1_BITMAP_PROPERTIES1 {
        pixelFormat: D2D1_PIXEL_FORMAT {
            format: DXGI_FORMAT_B8G8R8A8_UNORM,
            alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
        },
        dpiX: dpi,
        dpiY: dpi,
        bitmapOptions: D2D1_BITMAP_OPTIONS_TARGET | D2D1_BITMAP_OPTIONS_CANNOT_DRAW,
        colorContext: ManuallyDrop::new(None),
    };

    let bitmap = dc
        .CreateBitmapFromDxgiSurface(&surface, Some(&properties))
        .map_err(device_error("CreateBitmapFromDxgiSurface"))?;

    dc.SetDpi(dpi, dpi);
    dc.SetTarget(&bitmap);
    Ok(())
}

fn device_error(operation: &'static str) -> impl Fn(windows::core::Error) -> SurfaceError {
    move |e| SurfaceError::device(operation, e.code().0)
}

/// WIC failures are image errors unless the device went away underneath.
fn image_error(name: &str, e: windows::core::Error) -> SurfaceError {
    if is_device_loss(e.code()) {
        SurfaceError::device("CreateBitmapFromWicBitmap", e.code().0)
    } else {
        SurfaceError::Image {
            source_name: name.to_string(),
            code: HResult(e.code().0),
        }
    }
}

fn is_device_loss(code: HRESULT) -> bool {
    code == D2DERR_RECREATE_TARGET
        || code == DXGI_ERROR_DEVICE_REMOVED
        || code == DXGI_ERROR_DEVICE_RESET
}

fn d2d_color(color: Color) -> D2D1_COLOR_F {
    D2D1_COLOR_F {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

fn d2d_rect(rect: RectF) -> D2D_RECT_F {
    D2D_RECT_F {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}
