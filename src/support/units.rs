//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (flow rate, length,
//! temperature). This module adds quantities that are useful for
//! hydraulic design but aren't named in [`uom`].
//!
//! ## Velocity gradient
//!
//! [`VelocityGradient`] is the root-mean-square shear rate imparted to water by
//! headloss dissipation. It has the dimension of a frequency, so the
//! [`frequency`](uom::si::frequency) units apply:
//!
//! ```
//! use etf_sizing::support::units::VelocityGradient;
//! use uom::si::frequency::hertz;
//!
//! let g = VelocityGradient::new::<hertz>(100.0);
//! assert_eq!(g.get::<hertz>(), 100.0);
//! ```
//!
//! ## Kinematic viscosity
//!
//! [`KinematicViscosity`] (m²/s) is the ratio of dynamic viscosity to density.
//! It has the dimension of a diffusion coefficient:
//!
//! ```
//! use etf_sizing::support::units::KinematicViscosity;
//! use uom::si::diffusion_coefficient::square_meter_per_second;
//!
//! let nu = KinematicViscosity::new::<square_meter_per_second>(1.0e-6);
//! assert_eq!(nu.get::<square_meter_per_second>(), 1.0e-6);
//! ```

mod quantities;

pub use quantities::{KinematicViscosity, VelocityGradient};
