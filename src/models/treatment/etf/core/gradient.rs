//! Velocity gradient and flocculator volume.

use uom::si::f64::{Time, Volume};

use crate::support::{
    properties::KinematicViscosityModel,
    units::{KinematicViscosity, VelocityGradient},
};

use super::{Constants, DesignInputs, SizingError};

/// Returns the kinematic viscosity of the fluid at the design temperature.
pub(super) fn viscosity<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
) -> Result<KinematicViscosity, SizingError> {
    Ok(constants
        .fluid
        .kinematic_viscosity(inputs.temperature())?)
}

/// Returns the average velocity gradient of the flocculator, `G = g·hl / (Gt·ν)`.
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn g_avg<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
) -> Result<VelocityGradient, SizingError> {
    let nu = viscosity(inputs, constants)?;
    Ok(constants.gravity * inputs.hl() / (inputs.gt() * nu))
}

/// Returns the hydraulic residence time implied by the collision potential, `Gt / G`.
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn residence_time<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
) -> Result<Time, SizingError> {
    Ok(inputs.gt() / g_avg(inputs, constants)?)
}

/// Returns the total flocculator volume, `(Gt / G)·q_plant`.
///
/// The residence time ignores the drop in water depth caused by headloss
/// along the flocculator, so the volume is an estimate good to a few percent.
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn vol_floc<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
) -> Result<Volume, SizingError> {
    Ok(residence_time(inputs, constants)? * inputs.q_plant())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{frequency::hertz, time::second, volume::cubic_meter};

    use crate::models::treatment::etf::core::test_support::{constants, inputs};

    #[test]
    fn velocity_gradient_at_design_point() {
        let g = g_avg(&inputs(20.0, 15.0), &constants()).unwrap();
        assert_relative_eq!(g.get::<hertz>(), 93.230_14, max_relative = 1e-5);

        let g = g_avg(&inputs(20.0, 20.0), &constants()).unwrap();
        assert_relative_eq!(g.get::<hertz>(), 105.642_26, max_relative = 1e-5);
    }

    #[test]
    fn gradient_is_independent_of_flow() {
        let low = g_avg(&inputs(5.0, 15.0), &constants()).unwrap();
        let high = g_avg(&inputs(500.0, 15.0), &constants()).unwrap();
        assert_relative_eq!(low.get::<hertz>(), high.get::<hertz>());
    }

    #[test]
    fn volume_is_residence_time_times_flow() {
        let inputs = inputs(20.0, 15.0);
        let theta = residence_time(&inputs, &constants()).unwrap();
        assert_relative_eq!(theta.get::<second>(), 396.867_4, max_relative = 1e-5);

        let vol = vol_floc(&inputs, &constants()).unwrap();
        assert_relative_eq!(vol.get::<cubic_meter>(), 7.937_347, max_relative = 1e-5);
    }

    #[test]
    fn volume_never_decreases_with_flow() {
        let volumes: Vec<f64> = [1.0, 6.0, 20.0, 60.0, 150.0]
            .into_iter()
            .map(|q| {
                vol_floc(&inputs(q, 15.0), &constants())
                    .unwrap()
                    .get::<cubic_meter>()
            })
            .collect();

        assert!(volumes.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
