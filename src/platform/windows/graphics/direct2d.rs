//! Direct2D factory and WIC image pipeline.
//!
//! Decoding stays on the CPU side (WIC), so the decoded sources survive a
//! device loss; only the device bitmaps created from them are recreated.

use std::path::Path;

use windows::core::{Interface, Result, HSTRING};
use windows::Win32::Foundation::{ERROR_RESOURCE_NAME_NOT_FOUND, GENERIC_READ};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1Bitmap1, ID2D1Device, ID2D1DeviceContext, ID2D1Factory1,
    D2D1_FACTORY_TYPE_SINGLE_THREADED,
};
use windows::Win32::Graphics::Dxgi::IDXGIDevice;
use windows::Win32::Graphics::Imaging::{
    CLSID_WICImagingFactory, GUID_WICPixelFormat32bppPBGRA, IWICBitmapDecoder, IWICBitmapSource,
    IWICImagingFactory, WICBitmapDitherTypeNone, WICBitmapInterpolationModeFant,
    WICBitmapPaletteTypeMedianCut, WICDecodeMetadataCacheOnDemand,
};
use windows::Win32::System::Com::{CoCreateInstance, CLSCTX_INPROC_SERVER};

use crate::model::{assets, ImageSource, PixelSize};

pub struct Direct2D {
    factory: ID2D1Factory1,
    imaging: IWICImagingFactory,
}

impl Direct2D {
    /// Requires COM to be initialised on the calling thread.
    pub fn new() -> Result<Self> {
        unsafe {
            let factory: ID2D1Factory1 =
                D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
            let imaging: IWICImagingFactory =
                CoCreateInstance(&CLSID_WICImagingFactory, None, CLSCTX_INPROC_SERVER)?;
            Ok(Self { factory, imaging })
        }
    }

    pub fn create_device(&self, dxgi_device: &IDXGIDevice) -> Result<ID2D1Device> {
        unsafe { self.factory.CreateDevice(dxgi_device) }
    }

    /// Decode the first frame of `image`.
    pub fn load(&self, image: &ImageSource) -> Result<IWICBitmapSource> {
        match image {
            ImageSource::File(path) => self.load_file(path),
            ImageSource::Resource(_) => match image.resource_id() {
                Some((name, category)) => self.load_resource(&name, category),
                None => Err(not_found()),
            },
        }
    }

    pub fn load_file(&self, path: &Path) -> Result<IWICBitmapSource> {
        unsafe {
            let decoder = self.imaging.CreateDecoderFromFilename(
                &HSTRING::from(path.as_os_str()),
                None,
                GENERIC_READ,
                WICDecodeMetadataCacheOnDemand,
            )?;
            first_frame(&decoder)
        }
    }

    /// Decode one of the images built into the executable.
    pub fn load_resource(&self, name: &str, category: &str) -> Result<IWICBitmapSource> {
        let bytes = assets::find(name, category).ok_or_else(not_found)?;
        unsafe {
            let stream = self.imaging.CreateStream()?;
            stream.InitializeFromMemory(bytes)?;
            let decoder = self.imaging.CreateDecoderFromStream(
                &stream,
                None,
                WICDecodeMetadataCacheOnDemand,
            )?;
            first_frame(&decoder)
        }
    }

    /// Wrap `source` in a high quality scaler producing `size` pixels.
    pub fn create_scaler(
        &self,
        source: &IWICBitmapSource,
        size: PixelSize,
    ) -> Result<IWICBitmapSource> {
        unsafe {
            let scaler = self.imaging.CreateBitmapScaler()?;
            scaler.Initialize(
                source,
                size.width,
                size.height,
                WICBitmapInterpolationModeFant,
            )?;
            scaler.cast()
        }
    }

    /// Convert `source` to premultiplied BGRA and upload it to the device.
    pub fn create_bitmap(
        &self,
        source: &IWICBitmapSource,
        dc: &ID2D1DeviceContext,
    ) -> Result<ID2D1Bitmap1> {
        unsafe {
            let converter = self.imaging.CreateFormatConverter()?;
            converter.Initialize(
                source,
                &GUID_WICPixelFormat32bppPBGRA,
                WICBitmapDitherTypeNone,
                None,
                0.0,
                WICBitmapPaletteTypeMedianCut,
            )?;
            dc.CreateBitmapFromWicBitmap(&converter, None)
        }
    }
}

unsafe fn first_frame(decoder: &IWICBitmapDecoder) -> Result<IWICBitmapSource> {
    decoder.GetFrame(0)?.cast()
}

fn not_found() -> windows::core::Error {
    ERROR_RESOURCE_NAME_NOT_FOUND.to_hresult().into()
}
