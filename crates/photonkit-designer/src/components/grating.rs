//! Grating couplers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use photonkit_core::data::materials::{OXIDE_N, SILICON_N};
use photonkit_core::{CommonLayer, Result, ValidationError};

use super::delegate_layout;
use super::waveguide::WaveguideDevice;
use crate::curves::{self, grating_arc, GratingArcParams};
use crate::device::{Device, DeviceEntry};
use crate::layout::Layout;
use crate::model::{Bounds, Point, Port, PortMap, Transform};
use crate::pattern::Pattern;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightGratingParams {
    /// Width and height of the grating box
    pub extent: (f64, f64),
    pub pitch: f64,
    pub duty_cycle: f64,
    /// Growth of the slab box beyond the grating box
    pub rib_grow: f64,
    /// Grating length in periods, replacing `extent.0` when set
    pub num_periods: Option<usize>,
    pub name: String,
    pub ridge: String,
    pub slab: String,
}

impl StraightGratingParams {
    pub fn new(extent: (f64, f64), pitch: f64) -> Self {
        Self {
            extent,
            pitch,
            duty_cycle: 0.5,
            rib_grow: 0.0,
            num_periods: None,
            name: "straight_grating".to_string(),
            ridge: CommonLayer::RidgeSi.into(),
            slab: CommonLayer::RibSi.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ValidationError::require_positive("extent_x", self.extent.0)?;
        ValidationError::require_positive("extent_y", self.extent.1)?;
        ValidationError::require_positive("pitch", self.pitch)?;
        ValidationError::require_open_range("duty_cycle", self.duty_cycle, 0.0, 1.0)?;
        ValidationError::require_non_negative("rib_grow", self.rib_grow)?;
        if self.num_periods == Some(0) {
            return Err(ValidationError::InvalidValue {
                param: "num_periods".to_string(),
                reason: "a grating needs at least one period".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Etched stripe width of one period
    pub fn stripe_w(&self) -> f64 {
        self.pitch * (1.0 - self.duty_cycle)
    }

    pub fn length(&self) -> f64 {
        self.num_periods
            .map_or(self.extent.0, |n| n as f64 * self.pitch)
    }
}

/// Straight partially etched grating at the end of a waveguide.
///
/// The grating box sits to the right of the waveguide. Members are the slab
/// box, the striped ridge box and the waveguide, in that order. `a0` is the
/// waveguide's `a0`.
#[derive(Debug, Clone, PartialEq)]
pub struct StraightGrating {
    params: StraightGratingParams,
    device: Device,
}

impl StraightGrating {
    pub fn new(params: StraightGratingParams, waveguide: &Pattern) -> Result<Self> {
        params.validate()?;
        let a0 = waveguide.port("a0")?;

        let mut grating_box = Pattern::rect(params.length(), params.extent.1)?;
        grating_box.hstack(waveguide, false);

        let slab = grating_box.buffer(params.rib_grow);
        let teeth = grating_box.striped(params.stripe_w(), (params.pitch, 0.0), false)?;

        let mut device = Device::new(
            params.name.clone(),
            [
                DeviceEntry::from((slab, params.slab.clone())),
                DeviceEntry::from((teeth, params.ridge.clone())),
                DeviceEntry::from((waveguide.copy(), params.ridge.clone())),
            ],
        );
        device.set_port("a0", a0);

        debug!(
            "Built straight grating '{}': {} teeth regions, bounds {:?}",
            params.name,
            device.entries()[1].pattern.polygons().len(),
            device.bounds()
        );
        Ok(Self { params, device })
    }

    pub fn params(&self) -> &StraightGratingParams {
        &self.params
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

delegate_layout!(StraightGrating, device);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusingGratingParams {
    /// Opening angle in degrees
    pub angle: f64,
    pub waveguide_w: f64,
    pub waveguide_l: f64,
    pub n_clad: f64,
    pub n_core: f64,
    /// Period index of the innermost tooth
    pub min_period: usize,
    pub num_periods: usize,
    pub wavelength: f64,
    /// Fiber tilt in degrees
    pub fiber_angle: f64,
    pub duty_cycle: f64,
    /// Samples per tooth edge
    pub num_evaluations: usize,
    pub rib_grow: f64,
    pub name: String,
    pub ridge: String,
    pub slab: String,
}

impl FocusingGratingParams {
    pub fn new(angle: f64, waveguide_w: f64, waveguide_l: f64) -> Self {
        Self {
            angle,
            waveguide_w,
            waveguide_l,
            n_clad: OXIDE_N,
            n_core: SILICON_N,
            min_period: 10,
            num_periods: 20,
            wavelength: 1.55,
            fiber_angle: 8.0,
            duty_cycle: 0.5,
            num_evaluations: 16,
            rib_grow: 1.0,
            name: "focusing_grating".to_string(),
            ridge: CommonLayer::RidgeSi.into(),
            slab: CommonLayer::RibSi.into(),
        }
    }

    pub fn arc_params(&self) -> GratingArcParams {
        GratingArcParams {
            angle: self.angle,
            duty_cycle: self.duty_cycle,
            n_core: self.n_core,
            n_clad: self.n_clad,
            fiber_angle: self.fiber_angle,
            wavelength: self.wavelength,
            num_evaluations: self.num_evaluations,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.arc_params().validate()?;
        ValidationError::require_positive("waveguide_w", self.waveguide_w)?;
        ValidationError::require_positive("waveguide_l", self.waveguide_l)?;
        ValidationError::require_positive("min_period", self.min_period as f64)?;
        ValidationError::require_positive("num_periods", self.num_periods as f64)?;
        ValidationError::require_non_negative("rib_grow", self.rib_grow)?;
        Ok(())
    }

    /// Distance from the sector apex at which the sector is as wide as the
    /// waveguide
    pub fn throat_offset(&self) -> f64 {
        self.waveguide_w / (2.0 * (self.angle.to_radians() / 2.0).tan())
    }
}

/// Focusing grating: concentric radiating teeth fed through a sector by a
/// straight waveguide stub.
///
/// Members are the slab (teeth and sector grown by `rib_grow`), the ridge
/// teeth and sector, and the stub. The stub ends where the sector width
/// equals the waveguide width. The finished device is shifted so its left
/// edge sits at `x = 0`; with a stub longer than the slab margin this is the
/// stub's `a0`, which then lands on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusingGrating {
    params: FocusingGratingParams,
    device: Device,
    apex: Point,
    throat: Port,
}

impl FocusingGrating {
    pub fn new(params: FocusingGratingParams) -> Result<Self> {
        params.validate()?;
        let arc_params = params.arc_params();

        let mut regions = Vec::with_capacity(params.num_periods + 1);
        let mut sector = None;
        for m in params.min_period..params.min_period + params.num_periods {
            let arc = grating_arc(&arc_params, m)?;
            if sector.is_none() {
                sector = Some(arc.sector());
            }
            regions.push(arc.region());
        }
        regions.extend(sector);
        let grating = Pattern::from_regions(regions);

        let stub = curves::straight(params.waveguide_l)?.path(params.waveguide_w)?;
        let mut waveguide = WaveguideDevice::with_layers(stub, None, &params.ridge, &params.slab, "rib_wg")?;
        waveguide.halign(params.throat_offset(), false);
        let a0 = waveguide.port("a0")?;
        let throat = waveguide.port("b0")?;

        let mut device = Device::new(
            params.name.clone(),
            [
                DeviceEntry::from((grating.buffer(params.rib_grow), params.slab.clone())),
                DeviceEntry::from((grating, params.ridge.clone())),
                DeviceEntry::from(waveguide),
            ],
        );
        device.set_port("a0", a0);

        let mut focusing = Self {
            params,
            device,
            apex: Point::origin(),
            throat,
        };
        focusing.halign(0.0, true);

        debug!(
            "Built focusing grating '{}': {} periods, apex at ({:.3}, {:.3}), size {:?}",
            focusing.params.name,
            focusing.params.num_periods,
            focusing.apex.x,
            focusing.apex.y,
            focusing.size()
        );
        Ok(focusing)
    }

    pub fn params(&self) -> &FocusingGratingParams {
        &self.params
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Apex of the sector, where all teeth are centered
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// Far end of the stub, on the sector throat
    pub fn throat(&self) -> Port {
        self.throat
    }
}

impl Layout for FocusingGrating {
    fn apply(&mut self, t: &Transform) {
        self.device.apply(t);
        self.apex = t.apply(self.apex);
        self.throat = self.throat.transformed(t);
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

/// Grating coupler of either kind
#[derive(Debug, Clone, PartialEq)]
pub enum Grating {
    Straight(StraightGrating),
    Focusing(FocusingGrating),
}

impl Grating {
    pub fn device(&self) -> &Device {
        match self {
            Grating::Straight(g) => g.device(),
            Grating::Focusing(g) => g.device(),
        }
    }
}

impl Layout for Grating {
    fn apply(&mut self, t: &Transform) {
        match self {
            Grating::Straight(g) => g.apply(t),
            Grating::Focusing(g) => g.apply(t),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Grating::Straight(g) => g.bounds(),
            Grating::Focusing(g) => g.bounds(),
        }
    }

    fn ports(&self) -> &PortMap {
        match self {
            Grating::Straight(g) => g.ports(),
            Grating::Focusing(g) => g.ports(),
        }
    }

    fn ports_mut(&mut self) -> &mut PortMap {
        match self {
            Grating::Straight(g) => g.ports_mut(),
            Grating::Focusing(g) => g.ports_mut(),
        }
    }
}

impl From<StraightGrating> for Grating {
    fn from(g: StraightGrating) -> Self {
        Grating::Straight(g)
    }
}

impl From<FocusingGrating> for Grating {
    fn from(g: FocusingGrating) -> Self {
        Grating::Focusing(g)
    }
}

impl From<Grating> for DeviceEntry {
    fn from(g: Grating) -> Self {
        match g {
            Grating::Straight(g) => DeviceEntry::Device(g.device),
            Grating::Focusing(g) => DeviceEntry::Device(g.device),
        }
    }
}
