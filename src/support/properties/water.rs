use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, ConstraintError},
    units::KinematicViscosity,
};

use super::{KinematicViscosityModel, PropertyError};

/// Density of liquid water at atmospheric pressure, as (K, kg/m³) pairs.
const DENSITY_TABLE: [(f64, f64); 13] = [
    (273.15, 999.9),
    (278.15, 1000.0),
    (283.15, 999.7),
    (293.15, 998.2),
    (303.15, 995.7),
    (313.15, 992.2),
    (323.15, 988.1),
    (333.15, 983.2),
    (343.15, 977.8),
    (353.15, 971.8),
    (363.15, 965.3),
    (372.15, 958.8),
    (373.15, 958.4),
];

const T_MIN_KELVIN: f64 = DENSITY_TABLE[0].0;
const T_MAX_KELVIN: f64 = DENSITY_TABLE[DENSITY_TABLE.len() - 1].0;

/// Liquid water at atmospheric pressure.
///
/// Dynamic viscosity follows the Vogel-type correlation
/// `μ = 2.414e-5 · 10^(247.8 / (T − 140))` Pa·s with `T` in kelvin,
/// and density is linearly interpolated from tabulated values between
/// 0 °C and 100 °C.
///
/// # Example
///
/// ```
/// use etf_sizing::support::properties::{KinematicViscosityModel, Water};
/// use uom::si::{
///     diffusion_coefficient::square_meter_per_second,
///     f64::ThermodynamicTemperature,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let nu = Water
///     .kinematic_viscosity(ThermodynamicTemperature::new::<degree_celsius>(20.0))
///     .unwrap();
/// assert!((nu.get::<square_meter_per_second>() - 1.0e-6).abs() < 1.0e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl Water {
    /// Returns the dynamic viscosity at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] outside the liquid range.
    pub fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        let t = liquid_kelvin(temperature)?;
        let mu = 2.414e-5 * 10_f64.powf(247.8 / (t - 140.0));
        Ok(DynamicViscosity::new::<pascal_second>(mu))
    }

    /// Returns the density at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] outside the liquid range.
    pub fn density(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        let t = liquid_kelvin(temperature)?;

        let rho = DENSITY_TABLE
            .windows(2)
            .find(|pair| t <= pair[1].0)
            .map(|pair| {
                let ((t0, rho0), (t1, rho1)) = (pair[0], pair[1]);
                rho0 + (rho1 - rho0) * (t - t0) / (t1 - t0)
            })
            .ok_or_else(|| PropertyError::Calculation {
                context: format!("no density entry brackets {t} K"),
            })?;

        Ok(MassDensity::new::<kilogram_per_cubic_meter>(rho))
    }
}

impl KinematicViscosityModel for Water {
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        Ok(self.dynamic_viscosity(temperature)? / self.density(temperature)?)
    }
}

/// Marker type bounding a temperature to the range where [`Water`] is liquid.
///
/// # Examples
///
/// ```
/// use etf_sizing::support::{constraint::Constrained, properties::LiquidWater};
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
///
/// let t = ThermodynamicTemperature::new::<degree_celsius>(15.0);
/// assert!(Constrained::<_, LiquidWater>::new(t).is_ok());
///
/// let t = ThermodynamicTemperature::new::<degree_celsius>(-5.0);
/// assert!(Constrained::<_, LiquidWater>::new(t).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LiquidWater;

impl Constraint<ThermodynamicTemperature> for LiquidWater {
    fn check(value: &ThermodynamicTemperature) -> Result<(), ConstraintError> {
        let t = value.get::<kelvin>();
        if t.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if t < T_MIN_KELVIN {
            Err(ConstraintError::BelowMinimum)
        } else if t > T_MAX_KELVIN {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

fn liquid_kelvin(temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
    LiquidWater::check(&temperature).map_err(|err| PropertyError::OutOfDomain {
        context: format!("water at {} K: {err}", temperature.get::<kelvin>()),
    })?;
    Ok(temperature.get::<kelvin>())
}
