//! Baffle spacing and baffle counts.
//!
//! Flow in a hydraulic flocculator snakes around baffles. Each 180° turn is a
//! flow expansion that dissipates energy; obstacles between baffles add extra
//! expansions when the water is much deeper than the baffle spacing. The
//! ratio of the distance between expansions (H) to the baffle spacing (S)
//! must stay within the design bounds for the mixing to be uniform.

use uom::si::{f64::Length, length::meter};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    properties::KinematicViscosityModel,
};

use super::{
    Constants, DesignInputs, PlantLayout, SizingError,
    gradient::{g_avg, viscosity},
};

/// Returns the largest distance between expansions that keeps `H/S` at or below the maximum.
///
/// `H_max = (K_e / (2·G²·ν))^(1/4) · (Π_HS_max · q / W_chan)^(3/4)`
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn exp_dist_max<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    w_chan: Constrained<Length, StrictlyPositive>,
) -> Result<Length, SizingError> {
    let nu = viscosity(inputs, constants)?;
    let g = g_avg(inputs, constants)?;

    let loss_per_dissipation = constants.k_e / (g * g * nu * 2.0);
    let flow_per_width = inputs.q_plant() / w_chan.get() * constants.hs_ratio_max;

    let h4 = loss_per_dissipation * flow_per_width * flow_per_width * flow_per_width;
    Ok(h4.sqrt().sqrt())
}

/// Returns the minimum number of expansions per baffle space.
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn num_expansions<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    w_chan: Constrained<Length, StrictlyPositive>,
) -> Result<u32, SizingError> {
    let h_max = exp_dist_max(inputs, constants, w_chan)?;
    let count = (inputs.depth_end() / h_max).value.ceil();

    if !count.is_finite() || count < 1.0 {
        return Err(SizingError::degenerate(format!(
            "{count} expansions for a maximum spacing of {} m",
            h_max.get::<meter>()
        )));
    }
    Ok(count as u32)
}

/// Returns the actual distance between expansions once their count is rounded up.
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn height_exp<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    w_chan: Constrained<Length, StrictlyPositive>,
) -> Result<Length, SizingError> {
    Ok(inputs.depth_end() / f64::from(num_expansions(inputs, constants, w_chan)?))
}

/// Returns the spacing between baffles that produces the target velocity gradient.
///
/// `S = (K_e / (2·H_max·G²·ν))^(1/3) · q / W_chan`
///
/// # Errors
///
/// Returns [`SizingError::Property`] if the viscosity cannot be evaluated.
pub fn baffle_spacing<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    w_chan: Constrained<Length, StrictlyPositive>,
) -> Result<Length, SizingError> {
    let nu = viscosity(inputs, constants)?;
    let g = g_avg(inputs, constants)?;
    let h_max = exp_dist_max(inputs, constants, w_chan)?;

    let spacing_per_velocity = (constants.k_e / (h_max * g * g * nu * 2.0)).cbrt();
    Ok(spacing_per_velocity * inputs.q_plant() / w_chan.get())
}

/// Returns the number of baffles that fit in a channel of `length`.
///
/// A channel holds one more baffle space than it has baffles, so the rounded
/// space count is reduced by one.
///
/// # Errors
///
/// Returns [`SizingError::DegenerateGeometry`] if the channel cannot hold a
/// single baffle space, or [`SizingError::Property`] if the viscosity cannot
/// be evaluated.
pub fn num_baffles<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    w_chan: Constrained<Length, StrictlyPositive>,
    length: Length,
    baffle_thickness: Length,
) -> Result<u32, SizingError> {
    let pitch = baffle_spacing(inputs, constants, w_chan)? + baffle_thickness;
    let spaces = (length / pitch).value.round();

    if !spaces.is_finite() || spaces < 1.0 {
        return Err(SizingError::degenerate(format!(
            "a {} m channel cannot hold one {} m baffle space",
            length.get::<meter>(),
            pitch.get::<meter>()
        )));
    }
    Ok(spaces as u32 - 1)
}

/// Baffle geometry of the flocculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaffleLayout {
    /// Actual distance between flow expansions.
    pub expansion_spacing: Length,

    /// Number of expansions per baffle space.
    pub num_expansions: u32,

    /// Center distance between adjacent baffles, less the baffle thickness.
    pub baffle_spacing: Length,

    /// Baffles in the first channel, which runs the full sedimentation length.
    pub num_baffles_chan_1: u32,

    /// Baffles in each remaining channel, shortened by the entrance tank.
    pub num_baffles_chan_n: u32,
}

impl BaffleLayout {
    /// Computes the baffle layout for channels of width `w_chan`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::DegenerateGeometry`] if a channel cannot hold a
    /// baffle space, or [`SizingError::Property`] if the viscosity cannot be
    /// evaluated.
    pub fn compute<Fluid: KinematicViscosityModel>(
        inputs: &DesignInputs,
        constants: &Constants<Fluid>,
        layout: &PlantLayout,
        w_chan: Constrained<Length, StrictlyPositive>,
    ) -> Result<Self, SizingError> {
        let num_expansions = num_expansions(inputs, constants, w_chan)?;
        let thickness = layout.baffle_thickness();

        Ok(Self {
            expansion_spacing: inputs.depth_end() / f64::from(num_expansions),
            num_expansions,
            baffle_spacing: baffle_spacing(inputs, constants, w_chan)?,
            num_baffles_chan_1: num_baffles(inputs, constants, w_chan, layout.l_sed(), thickness)?,
            num_baffles_chan_n: num_baffles(
                inputs,
                constants,
                w_chan,
                layout.l_chan_n(),
                thickness,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    use crate::models::treatment::etf::core::test_support::{constants, inputs};

    fn width(w: f64) -> Constrained<Length, StrictlyPositive> {
        StrictlyPositive::new(Length::new::<meter>(w)).unwrap()
    }

    // Converged channel width for 20 L/s at 15 °C.
    const W_CHAN_REF: f64 = 0.288_714_046;

    #[test]
    fn max_expansion_distance() {
        let h = exp_dist_max(&inputs(20.0, 15.0), &constants(), width(W_CHAN_REF)).unwrap();
        assert_relative_eq!(h.get::<meter>(), 1.701_758, max_relative = 1e-5);
    }

    #[test]
    fn max_expansion_distance_round_trips() {
        let inputs = inputs(20.0, 15.0);
        let constants = constants();

        for w in [0.1, W_CHAN_REF, 0.66, 1.5] {
            let h = exp_dist_max(&inputs, &constants, width(w)).unwrap();
            let at_max = inputs.with_depth_end(h).unwrap();
            assert_eq!(num_expansions(&at_max, &constants, width(w)).unwrap(), 1);
        }
    }

    #[test]
    fn expansions_round_up() {
        let inputs = inputs(20.0, 15.0);
        let constants = constants();

        // 2 m of water over 1.70 m maximum spacing needs two expansions.
        assert_eq!(num_expansions(&inputs, &constants, width(W_CHAN_REF)).unwrap(), 2);

        let h = height_exp(&inputs, &constants, width(W_CHAN_REF)).unwrap();
        assert_relative_eq!(h.get::<meter>(), 1.0);
    }

    #[test]
    fn spacing_for_reference_plant() {
        let s = baffle_spacing(&inputs(20.0, 15.0), &constants(), width(W_CHAN_REF)).unwrap();
        assert_relative_eq!(s.get::<meter>(), 0.283_626, max_relative = 1e-5);
    }

    #[test]
    fn baffle_count_fills_channel() {
        let inputs = inputs(20.0, 15.0);
        let constants = constants();
        let t = Length::new::<millimeter>(2.0);
        let pitch = baffle_spacing(&inputs, &constants, width(W_CHAN_REF)).unwrap() + t;

        for l in [1.0, 2.2, 5.15, 7.35, 12.0] {
            let length = Length::new::<meter>(l);
            let n = num_baffles(&inputs, &constants, width(W_CHAN_REF), length, t).unwrap();
            let filled = pitch * f64::from(n + 1);
            assert!(
                (filled - length).abs() <= pitch / 2.0,
                "l={l} n={n} filled={filled:?}"
            );
        }
    }

    #[test]
    fn channel_too_short_for_a_baffle_space() {
        let result = num_baffles(
            &inputs(20.0, 15.0),
            &constants(),
            width(W_CHAN_REF),
            Length::new::<meter>(0.1),
            Length::new::<millimeter>(2.0),
        );
        assert!(matches!(result, Err(SizingError::DegenerateGeometry { .. })));
    }

    #[test]
    fn single_space_channel_has_no_baffles() {
        let n = num_baffles(
            &inputs(20.0, 15.0),
            &constants(),
            width(W_CHAN_REF),
            Length::new::<meter>(0.3),
            Length::new::<millimeter>(2.0),
        )
        .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn layout_for_reference_plant() {
        let layout = BaffleLayout::compute(
            &inputs(20.0, 15.0),
            &constants(),
            &PlantLayout::default(),
            width(W_CHAN_REF),
        )
        .unwrap();

        assert_eq!(layout.num_expansions, 2);
        assert_relative_eq!(layout.expansion_spacing.get::<meter>(), 1.0);
        assert_eq!(layout.num_baffles_chan_1, 25);
        assert_eq!(layout.num_baffles_chan_n, 17);
    }
}
