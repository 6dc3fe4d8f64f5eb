//! Fixed-point iteration for the entrance tank planview area.
//!
//! The entrance tank shares the first flocculator channel, so its planview
//! area depends on the channel width. The channel width in turn depends on the
//! total planview area of the entrance tank and flocculator, which includes the
//! entrance tank. This module resolves that coupling by repeated substitution:
//!
//! 1. `A_ETF = A_ET + vol_floc / (H_end + hl/2)`
//! 2. `W_tot = A_ETF / L_sed`, split into an even number of channels
//! 3. `A_ET = L_ET_max · W_chan`
//!
//! until two successive entrance tank areas agree within a relative tolerance.
//!
//! Rounding the channel count down to an even number makes the substitution
//! discontinuous. Near a count boundary the count computed at the two-channel
//! fixed point can be four while the count computed at the four-channel fixed
//! point is two, and the iteration cycles instead of converging. When an area
//! repeats with a different count in between, the count is pinned to the
//! smallest count in the cycle and the iteration continues at that count. The
//! smallest count is the one whose channels stay at or above the minimum width.

mod config;
mod state;

pub use config::ConvergenceConfig;
pub use state::{ConvergenceState, Phase};

use log::{debug, warn};
use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::support::properties::KinematicViscosityModel;

use super::{
    Constants, DesignInputs, PlantLayout, SizingError, channel::num_channel, gradient::vol_floc,
};

/// Converged entrance tank area and the channel layout it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSolution {
    /// The converged state.
    pub state: ConvergenceState,

    /// Every iteration in order, ending with the converged state.
    pub history: Vec<ConvergenceState>,

    /// Channel count the iteration was pinned to after it began to cycle.
    pub pinned_num_chan: Option<u32>,
}

impl AreaSolution {
    /// Entrance tank planview area.
    #[must_use]
    pub fn area(&self) -> Area {
        self.state.a_new
    }

    /// Iteration count performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.state.iteration
    }
}

/// Solves for the entrance tank planview area.
///
/// # Errors
///
/// Returns [`SizingError::ConvergenceFailure`] if the areas have not agreed
/// within `config.tolerance` after `config.max_iters` iterations, or any error
/// raised while evaluating the flocculator volume or channel count.
pub fn area_ent_tank<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    layout: &PlantLayout,
    config: &ConvergenceConfig,
) -> Result<AreaSolution, SizingError> {
    let a_floc = vol_floc(inputs, constants)? / (inputs.depth_end() + inputs.hl() / 2.0);

    let mut state = ConvergenceState::seed(config.seed_area);
    let mut history = Vec::new();
    let mut pinned_num_chan = None;

    while history.len() < config.max_iters {
        state = iterate(inputs, constants, layout, &state, a_floc, pinned_num_chan)?;
        history.push(state);

        debug!(
            "area iteration {}: a_new={:.6} m², w_tot={:.6} m, num_chan={}, area_ratio={:.6}",
            state.iteration,
            state.a_new.get::<square_meter>(),
            state.w_tot.get::<meter>(),
            state.num_chan,
            state.area_ratio,
        );

        if state.phase(config.tolerance) == Phase::Converged {
            return Ok(AreaSolution {
                state,
                history,
                pinned_num_chan,
            });
        }

        if pinned_num_chan.is_none() {
            pinned_num_chan = cycle_num_chan(&history, config.tolerance);
            if let Some(num_chan) = pinned_num_chan {
                warn!(
                    "channel count cycles at iteration {}, pinning num_chan={num_chan}",
                    state.iteration
                );
            }
        }
    }

    warn!(
        "area iteration stopped after {} iterations with area_ratio={}",
        history.len(),
        state.area_ratio
    );

    Err(SizingError::ConvergenceFailure {
        iters: history.len(),
        area_ratio: state.area_ratio,
    })
}

/// Returns the smallest channel count of a cycle ending at the latest state.
///
/// A cycle is an earlier state with the same channel count and an area within
/// `tolerance` of the latest one, separated from it by a different count.
fn cycle_num_chan(history: &[ConvergenceState], tolerance: f64) -> Option<u32> {
    let (latest, earlier) = history.split_last()?;

    earlier.iter().enumerate().rev().find_map(|(i, past)| {
        let between = &history[i + 1..];
        let repeats = past.num_chan == latest.num_chan
            && ((latest.a_new / past.a_new).value - 1.0).abs() <= tolerance
            && between.iter().any(|s| s.num_chan != latest.num_chan);

        if repeats {
            between.iter().map(|s| s.num_chan).min()
        } else {
            None
        }
    })
}

/// Performs one substitution step starting from the previous area estimate.
///
/// A pinned channel count replaces the count derived from the total width.
fn iterate<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    layout: &PlantLayout,
    previous: &ConvergenceState,
    a_floc: Area,
    pinned_num_chan: Option<u32>,
) -> Result<ConvergenceState, SizingError> {
    let a_prev = previous.a_new;

    let w_tot: Length = (a_prev + a_floc) / layout.l_sed();
    let num_chan = match pinned_num_chan {
        Some(num_chan) => num_chan,
        None => num_channel(inputs, constants, w_tot)?,
    };
    let w_chan = w_tot / f64::from(num_chan);
    let a_new: Area = layout.l_ent_tank_max() * w_chan;

    Ok(ConvergenceState {
        iteration: previous.iteration + 1,
        a_prev,
        a_new,
        w_tot,
        num_chan,
        w_chan,
        area_ratio: (a_new / a_prev).value,
    })
}
