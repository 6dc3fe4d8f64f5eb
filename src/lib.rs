//! # ETF Sizing
//!
//! Hydraulic sizing of an entrance tank + flocculator (ETF) unit, built as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! Given the plant flow rate, target headloss, collision potential (Gt),
//! water temperature, and the water depth at the end of the flocculator, the
//! sizing engine derives the channel count and width, the baffle layout, and
//! the entrance tank plate settler geometry.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] adapter and its sizing results.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use etf_sizing::models::treatment::etf::{DesignInputs, Etf};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, Ratio, ThermodynamicTemperature, VolumeRate},
//!     length::{centimeter, meter},
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::liter_per_second,
//! };
//!
//! let inputs = DesignInputs::new(
//!     VolumeRate::new::<liter_per_second>(20.0),
//!     Length::new::<centimeter>(40.0),
//!     Ratio::new::<ratio>(37_000.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(15.0),
//!     Length::new::<meter>(2.0),
//! )
//! .unwrap();
//!
//! let result = Etf::default().call(&inputs).unwrap();
//! assert_eq!(result.num_chan, 2);
//! ```
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
