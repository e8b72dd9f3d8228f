//! # PhotonKit Designer
//!
//! Parametric layout generation for photonic integrated-circuit components.
//! Curves are swept into waveguide polygons, combined into patterns with named
//! ports, and assembled into layered devices ready for mask export.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Curves**: straights, partial Euler bends, s-bends, bezier s-bends,
//!   coupler trajectories and focusing grating arcs
//! - **Paths**: sweeping a curve by a constant or tapered width
//! - **Ops**: boolean operations and isotropic buffering of regions
//!
//! ### Composition
//! - **Pattern**: regions plus ports and named child references
//! - **Device**: patterns tagged with fabrication layers
//! - **Layout**: shared translate/rotate/reflect/align/dock operations
//!
//! ### Components
//! - Directional coupler, crossing, lattice array, rib waveguide, straight and
//!   focusing gratings, tap coupler
//!
//! ## Architecture
//!
//! ```text
//! Curve (trajectory)
//!   └── path(width) -> Pattern (regions + a0/b0 ports)
//!         ├── Layout (transforms, alignment, docking)
//!         └── Device (layer-tagged patterns)
//!               └── LayoutSnapshot (JSON for exporters)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use photonkit_designer::{Dc, DcParams, Layout};
//!
//! let dc = Dc::new(DcParams::new(0.5, 5.0, 10.0, 0.3, 4.0))?;
//! let b1 = dc.port("b1")?;
//! ```

pub mod arrays;
pub mod components;
pub mod curves;
pub mod device;
pub mod layout;
pub mod model;
pub mod ops;
pub mod path;
pub mod pattern;
pub mod serialization;

pub use arrays::{GridArrayParams, Pitch};
pub use components::{
    Array, Cross, Dc, DcParams, FocusingGrating, FocusingGratingParams, Grating, StraightGrating,
    StraightGratingParams, TapDc, WaveguideDevice,
};
pub use curves::{Curve, CurveSegment};
pub use device::{Device, DeviceEntry, LayeredPattern};
pub use layout::{Layout, DOCKING_PORT};
pub use model::{Bounds, Point, Port, PortMap, ReflectAxis, Region, Transform};
pub use ops::BooleanOp;
pub use path::{taper, Width};
pub use pattern::Pattern;
pub use serialization::{LayerData, LayoutSnapshot};
