use tracing::debug;

use photonkit_core::{CommonLayer, Result};

use super::coupler::Dc;
use super::grating::Grating;
use crate::device::{Device, DeviceEntry};
use crate::layout::Layout;
use crate::model::{Bounds, PortMap, Transform};
use crate::pattern::Pattern;

/// Tap coupler: a directional coupler whose upper arm ends in two gratings.
///
/// Copies of the grating are docked onto the coupler ports `b1` and `a1`.
/// Only the through ports `a0`/`b0` are exposed; the gratings terminate the
/// tapped arm.
#[derive(Debug, Clone, PartialEq)]
pub struct TapDc {
    dc: Dc,
    device: Device,
}

impl TapDc {
    pub fn new(dc: &Dc, grating: &Grating) -> Result<Self> {
        let mut in_grating = grating.clone();
        in_grating.to(dc.port("b1")?)?;
        let mut out_grating = grating.clone();
        out_grating.to(dc.port("a1")?)?;

        let mut device = Device::new(
            "tap_dc",
            [
                DeviceEntry::from((dc.pattern().clone(), CommonLayer::RidgeSi)),
                DeviceEntry::from(in_grating),
                DeviceEntry::from(out_grating),
            ],
        );
        device
            .set_port("a0", dc.port("a0")?)
            .set_port("b0", dc.port("b0")?);

        debug!(
            "Built tap DC: {} members, bounds {:?}",
            device.entries().len(),
            device.bounds()
        );
        Ok(Self {
            dc: dc.clone(),
            device,
        })
    }

    pub fn dc(&self) -> &Dc {
        &self.dc
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// The coupler's through waveguide
    pub fn wg_path(&self) -> Result<&Pattern> {
        self.dc.lower_path()
    }
}

impl Layout for TapDc {
    fn apply(&mut self, t: &Transform) {
        self.dc.apply(t);
        self.device.apply(t);
    }

    fn bounds(&self) -> Bounds {
        self.device.bounds()
    }

    fn ports(&self) -> &PortMap {
        self.device.ports()
    }

    fn ports_mut(&mut self) -> &mut PortMap {
        self.device.ports_mut()
    }
}
