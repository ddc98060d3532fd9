//! DXGI factory and composition swap chains.

use windows::core::Result;
use windows::Win32::Graphics::Dxgi::Common::{
    DXGI_ALPHA_MODE_PREMULTIPLIED, DXGI_FORMAT_B8G8R8A8_UNORM, DXGI_SAMPLE_DESC,
};
use windows::Win32::Graphics::Dxgi::{
    IDXGIDevice, IDXGIFactory2, IDXGISwapChain1, DXGI_SCALING_STRETCH, DXGI_SWAP_CHAIN_DESC1,
    DXGI_SWAP_EFFECT_FLIP_DISCARD, DXGI_USAGE_RENDER_TARGET_OUTPUT,
};

use crate::model::PixelSize;

/// The factory that created the Direct3D device's adapter.
pub struct Dxgi {
    factory: IDXGIFactory2,
}

impl Dxgi {
    /// Walk from the device to its adapter's parent factory.
    pub fn new(dxgi_device: &IDXGIDevice) -> Result<Self> {
        let factory = unsafe { dxgi_device.GetAdapter()?.GetParent()? };
        Ok(Self { factory })
    }

    /// Create a swap chain for composition.
    ///
    /// - BGRA format (compatible with Direct2D)
    /// - Premultiplied alpha, so uncovered pixels stay transparent
    /// - Flip discard presentation
    pub fn create_swap_chain(
        &self,
        dxgi_device: &IDXGIDevice,
        size: PixelSize,
    ) -> Result<IDXGISwapChain1> {
        let desc = DXGI_SWAP_CHAIN_DESC1 {
            Width: size.width,
            Height: size.height,
            Format: DXGI_FORMAT_B8G8R8A8_UNORM,
            Stereo: false.into(),
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: 1,
                Quality: 0,
            },
            BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
            BufferCount: 2,
            Scaling: DXGI_SCALING_STRETCH,
            SwapEffect: DXGI_SWAP_EFFECT_FLIP_DISCARD,
            AlphaMode: DXGI_ALPHA_MODE_PREMULTIPLIED,
            Flags: 0,
        };

        unsafe {
            self.factory
                .CreateSwapChainForComposition(dxgi_device, &desc, None)
        }
    }
}
