use serde::{Deserialize, Serialize};
use tracing::debug;

use photonkit_core::{Result, ValidationError};

use super::delegate_layout;
use crate::curves::{self, Curve};
use crate::layout::Layout;
use crate::model::{Point, Port};
use crate::pattern::Pattern;

pub const LOWER_PATH: &str = "lower_path";
pub const UPPER_PATH: &str = "upper_path";

/// Directional coupler parameters.
///
/// The arms run `interport_distance` apart at the ports and come within
/// `gap_w` of each other over `interaction_l`. Arm separation in the
/// interaction region is computed for `coupler_waveguide_w`, which falls back
/// to `waveguide_w` when unset. Setting `bend_l` switches the bends from Euler
/// s-bends of `bend_radius` to bezier s-bends of that length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcParams {
    pub waveguide_w: f64,
    pub bend_radius: f64,
    pub interport_distance: f64,
    pub gap_w: f64,
    pub interaction_l: f64,
    pub euler: f64,
    /// Straight extension at each of the four ends
    pub end_l: f64,
    pub coupler_waveguide_w: Option<f64>,
    pub bend_l: Option<f64>,
}

impl DcParams {
    pub fn new(waveguide_w: f64, bend_radius: f64, interport_distance: f64, gap_w: f64, interaction_l: f64) -> Self {
        Self {
            waveguide_w,
            bend_radius,
            interport_distance,
            gap_w,
            interaction_l,
            euler: 0.2,
            end_l: 0.0,
            coupler_waveguide_w: None,
            bend_l: None,
        }
    }

    pub fn with_euler(mut self, euler: f64) -> Self {
        self.euler = euler;
        self
    }

    pub fn with_end_l(mut self, end_l: f64) -> Self {
        self.end_l = end_l;
        self
    }

    pub fn with_coupler_waveguide_w(mut self, w: f64) -> Self {
        self.coupler_waveguide_w = Some(w);
        self
    }

    pub fn with_bend_l(mut self, bend_l: f64) -> Self {
        self.bend_l = Some(bend_l);
        self
    }

    pub fn coupler_waveguide_w(&self) -> f64 {
        self.coupler_waveguide_w.unwrap_or(self.waveguide_w)
    }

    /// Lateral travel of each arm from its port to the interaction region
    pub fn dy(&self) -> f64 {
        (self.interport_distance - self.gap_w - self.coupler_waveguide_w()) / 2.0
    }

    pub fn validate(&self) -> Result<()> {
        ValidationError::require_positive("waveguide_w", self.waveguide_w)?;
        ValidationError::require_positive("interport_distance", self.interport_distance)?;
        ValidationError::require_positive("interaction_l", self.interaction_l)?;
        ValidationError::require_positive("coupler_waveguide_w", self.coupler_waveguide_w())?;
        ValidationError::require_non_negative("end_l", self.end_l)?;
        match self.bend_l {
            Some(bend_l) => {
                ValidationError::require_positive("bend_l", bend_l)?;
            }
            None => {
                ValidationError::require_positive("bend_radius", self.bend_radius)?;
                ValidationError::require_closed_range("euler", self.euler, 0.0, 1.0)?;
            }
        }
        if self.dy() <= 0.0 {
            return Err(ValidationError::InvalidValue {
                param: "gap_w".to_string(),
                reason: format!(
                    "gap {} plus coupler width {} leaves no room within interport distance {}",
                    self.gap_w,
                    self.coupler_waveguide_w(),
                    self.interport_distance
                ),
            }
            .into());
        }
        Ok(())
    }

    fn arm(&self, dy: f64) -> Result<Curve> {
        let coupler = match self.bend_l {
            Some(bend_l) => curves::bezier_dc(bend_l, dy, self.interaction_l)?,
            None => curves::dc(self.bend_radius, dy, self.interaction_l, self.euler)?,
        };
        if self.end_l > 0.0 {
            Curve::link([
                curves::straight(self.end_l)?,
                coupler,
                curves::straight(self.end_l)?,
            ])
        } else {
            Ok(coupler)
        }
    }
}

/// Directional coupler.
///
/// Regions are the lower arm followed by the upper arm. Ports `a0`/`a1` are
/// the left ends of the lower/upper arm and `b0`/`b1` the right ends. The
/// arms are kept as the `lower_path` and `upper_path` references, each with
/// its own `a0`/`b0` ports.
#[derive(Debug, Clone, PartialEq)]
pub struct Dc {
    params: DcParams,
    pattern: Pattern,
}

impl Dc {
    pub fn new(params: DcParams) -> Result<Self> {
        params.validate()?;
        let dy = params.dy();
        let w = params.waveguide_w;
        let d = params.interport_distance;

        let mut lower = params.arm(dy)?.path(w)?;
        let mut upper = params.arm(-dy)?.path(w)?;
        upper.translate(0.0, d);

        let mut pattern = Pattern::compose([lower.clone(), upper.clone()]);
        let size_x = pattern.size().0;
        let a0 = Port::new(0.0, 0.0, 180.0, w);
        let a1 = Port::new(0.0, d, 180.0, w);
        let b0 = Port::new(size_x, 0.0, 0.0, w);
        let b1 = Port::new(size_x, d, 0.0, w);
        pattern
            .set_port("a0", a0)
            .set_port("a1", a1)
            .set_port("b0", b0)
            .set_port("b1", b1);

        lower.clear_ports().set_port("a0", a0).set_port("b0", b0);
        upper.clear_ports().set_port("a0", a1).set_port("b0", b1);
        pattern
            .add_reference(LOWER_PATH, lower)
            .add_reference(UPPER_PATH, upper);

        debug!(
            "Built DC: {} regions, size {:?}, dy {}",
            pattern.polygons().len(),
            pattern.size(),
            dy
        );
        Ok(Self { params, pattern })
    }

    pub fn params(&self) -> &DcParams {
        &self.params
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn lower_path(&self) -> Result<&Pattern> {
        self.pattern.reference(LOWER_PATH)
    }

    pub fn upper_path(&self) -> Result<&Pattern> {
        self.pattern.reference(UPPER_PATH)
    }

    /// Corners of the interaction region around the arm centerlines, in the
    /// order bottom-left, top-left, bottom-right, top-right
    pub fn interaction_points(&self) -> [Point; 4] {
        let c = self.center();
        let span = self.params.coupler_waveguide_w() + self.params.gap_w;
        let bl = Point::new(c.x - self.params.interaction_l / 2.0, c.y - span / 2.0);
        let tl = bl.offset(0.0, span);
        let br = bl.offset(self.params.interaction_l, 0.0);
        let tr = tl.offset(self.params.interaction_l, 0.0);
        [bl, tl, br, tr]
    }
}

delegate_layout!(Dc, pattern);

impl From<Dc> for Pattern {
    fn from(dc: Dc) -> Self {
        dc.pattern
    }
}
