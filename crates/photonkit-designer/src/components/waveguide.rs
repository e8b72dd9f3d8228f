use tracing::debug;

use photonkit_core::{CommonLayer, Result};

use super::delegate_layout;
use crate::device::{Device, DeviceEntry};
use crate::layout::Layout;
use crate::pattern::Pattern;

/// Rib waveguide cross section: a ridge waveguide with an optional wider slab.
///
/// Ports `a0`/`b0` are copied from the ridge waveguide; the slab never
/// defines ports.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveguideDevice {
    device: Device,
}

impl WaveguideDevice {
    pub fn new(ridge_waveguide: Pattern, slab_waveguide: Option<Pattern>) -> Result<Self> {
        Self::with_layers(
            ridge_waveguide,
            slab_waveguide,
            CommonLayer::RidgeSi.as_str(),
            CommonLayer::RibSi.as_str(),
            "rib_wg",
        )
    }

    pub fn with_layers(
        ridge_waveguide: Pattern,
        slab_waveguide: Option<Pattern>,
        ridge: &str,
        slab: &str,
        name: &str,
    ) -> Result<Self> {
        let a0 = ridge_waveguide.port("a0")?;
        let b0 = ridge_waveguide.port("b0")?;

        let mut entries = vec![DeviceEntry::from((ridge_waveguide, ridge))];
        if let Some(slab_waveguide) = slab_waveguide {
            entries.push(DeviceEntry::from((slab_waveguide, slab)));
        }
        let mut device = Device::new(name, entries);
        device.set_port("a0", a0).set_port("b0", b0);

        debug!("Built waveguide device '{}' on {:?}", name, device.layers());
        Ok(Self { device })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

delegate_layout!(WaveguideDevice, device);

impl From<WaveguideDevice> for Device {
    fn from(wg: WaveguideDevice) -> Self {
        wg.device
    }
}

impl From<WaveguideDevice> for DeviceEntry {
    fn from(wg: WaveguideDevice) -> Self {
        DeviceEntry::Device(wg.device)
    }
}
