//! Channel width and channel count.

use uom::si::f64::Length;

use crate::support::properties::KinematicViscosityModel;

use super::{
    Constants, DesignInputs, SizingError,
    gradient::{g_avg, viscosity},
};

/// Returns the narrowest channel that keeps `H/S` at or above the minimum.
///
/// The narrowest channel occurs with a single expansion per baffle, where the
/// distance between expansions equals the water depth at the end of the
/// flocculator:
///
/// `W = Π_HS_min · (K_e / (2·H·G²·ν))^(1/3) · q / H`
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn width_hs_min<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
) -> Result<Length, SizingError> {
    let nu = viscosity(inputs, constants)?;
    let g = g_avg(inputs, constants)?;
    let depth = inputs.depth_end();

    let dissipation = depth * g * g * nu * 2.0;
    let spacing_per_velocity = (constants.k_e / dissipation).cbrt();

    Ok(spacing_per_velocity * inputs.q_plant() / depth * constants.hs_ratio_min)
}

/// Returns the minimum channel width.
///
/// This is the larger of the hydraulic minimum ([`width_hs_min`]) and the
/// construction minimum, which always wins for small plants.
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn width_floc_min<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
) -> Result<Length, SizingError> {
    Ok(width_hs_min(inputs, constants)?.max(constants.width_min_construct))
}

/// Returns the number of channels that fit in the total width `w_tot`.
///
/// The count is rounded down to an even number so the inlet and outlet sit on
/// the same side of the tank, and never drops below two.
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated, or
/// [`SizingError::DegenerateGeometry`] if `w_tot` is not a finite width.
pub fn num_channel<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    w_tot: Length,
) -> Result<u32, SizingError> {
    let fit = (w_tot / width_floc_min(inputs, constants)?).value;
    if !fit.is_finite() {
        return Err(SizingError::degenerate(format!(
            "total width {w_tot:?} does not give a channel count"
        )));
    }

    let pairs = (fit / 2.0).floor().max(0.0);
    Ok((pairs as u32).saturating_mul(2).max(2))
}
