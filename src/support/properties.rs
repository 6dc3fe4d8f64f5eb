//! Temperature dependent fluid properties.
//!
//! The sizing formulas only need the kinematic viscosity of the water being
//! treated, so the property capability is a single trait,
//! [`KinematicViscosityModel`]. [`Water`] implements it with an empirical
//! viscosity correlation and a tabulated density.

mod error;
mod water;

pub use error::PropertyError;
pub use water::{LiquidWater, Water};

use uom::si::f64::ThermodynamicTemperature;

use crate::support::units::KinematicViscosity;

/// A fluid whose kinematic viscosity is known as a function of temperature.
pub trait KinematicViscosityModel {
    /// Returns the kinematic viscosity at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the temperature is outside the model's
    /// valid domain.
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError>;
}
