//! Composite photonic components.
//!
//! Each component is fully determined by its parameters at construction and
//! afterwards only moves through the [`Layout`](crate::layout::Layout)
//! operations.

mod array;
mod coupler;
mod cross;
mod grating;
mod tap;
mod waveguide;

pub use array::Array;
pub use coupler::{Dc, DcParams};
pub use cross::Cross;
pub use grating::{FocusingGrating, FocusingGratingParams, Grating, StraightGrating, StraightGratingParams};
pub use tap::TapDc;
pub use waveguide::WaveguideDevice;

/// Forward `Layout` to a field holding the component geometry.
macro_rules! delegate_layout {
    ($ty:ty, $field:ident) => {
        impl $crate::layout::Layout for $ty {
            fn apply(&mut self, t: &$crate::model::Transform) {
                self.$field.apply(t)
            }

            fn bounds(&self) -> $crate::model::Bounds {
                self.$field.bounds()
            }

            fn ports(&self) -> &$crate::model::PortMap {
                self.$field.ports()
            }

            fn ports_mut(&mut self) -> &mut $crate::model::PortMap {
                self.$field.ports_mut()
            }
        }
    };
}

pub(crate) use delegate_layout;
