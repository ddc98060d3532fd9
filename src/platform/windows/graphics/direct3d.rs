//! Direct3D 11 device.
//!
//! The device only exists to give Direct2D and DirectComposition a DXGI
//! device; nothing is drawn through Direct3D directly.

use windows::core::{Interface, Result};
use windows::Win32::Graphics::Direct3D::D3D_DRIVER_TYPE_HARDWARE;
use windows::Win32::Graphics::Direct3D11::{
    D3D11CreateDevice, ID3D11Device, D3D11_CREATE_DEVICE_BGRA_SUPPORT, D3D11_CREATE_DEVICE_FLAG,
    D3D11_SDK_VERSION,
};
use windows::Win32::Graphics::Dxgi::IDXGIDevice;

#[cfg(feature = "debug-layer")]
use windows::Win32::Graphics::Direct3D11::D3D11_CREATE_DEVICE_DEBUG;

/// Hardware Direct3D 11 device with BGRA support (required for Direct2D interop).
pub struct Direct3D {
    device: ID3D11Device,
}

impl Direct3D {
    pub fn new() -> Result<Self> {
        let mut device: Option<ID3D11Device> = None;

        unsafe {
            D3D11CreateDevice(
                None,
                D3D_DRIVER_TYPE_HARDWARE,
                Default::default(),
                creation_flags(),
                None,
                D3D11_SDK_VERSION,
                Some(&mut device as *mut _),
                None,
                None,
            )?;
        }

        let device = device.ok_or_else(windows::core::Error::from_win32)?;
        Ok(Self { device })
    }

    /// The DXGI view of the device, shared by Direct2D, DXGI and DirectComposition.
    pub fn dxgi_device(&self) -> Result<IDXGIDevice> {
        self.device.cast()
    }
}

#[cfg(feature = "debug-layer")]
fn creation_flags() -> D3D11_CREATE_DEVICE_FLAG {
    D3D11_CREATE_DEVICE_BGRA_SUPPORT | D3D11_CREATE_DEVICE_DEBUG
}

#[cfg(not(feature = "debug-layer"))]
fn creation_flags() -> D3D11_CREATE_DEVICE_FLAG {
    D3D11_CREATE_DEVICE_BGRA_SUPPORT
}
