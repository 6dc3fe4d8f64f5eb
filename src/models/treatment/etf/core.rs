//! Hydraulic sizing of an entrance tank and flocculator.
//!
//! Each step is a free function over [`DesignInputs`] and [`Constants`], so it
//! can be evaluated and tested on its own. [`size`] chains them into a full
//! [`SizingResult`].

mod area;
mod baffle;
mod channel;
mod constants;
mod error;
mod gradient;
mod input;
mod plate;
mod sizing;

#[cfg(test)]
mod test_support;

pub use area::{AreaSolution, ConvergenceConfig, ConvergenceState, Phase, area_ent_tank};
pub use baffle::{
    BaffleLayout, baffle_spacing, exp_dist_max, height_exp, num_baffles, num_expansions,
};
pub use channel::{num_channel, width_floc_min, width_hs_min};
pub use constants::{Constants, PlateSettler, VENA_CONTRACTA_RATIO_ORIFICE, expansion_minor_loss};
pub use error::SizingError;
pub use gradient::{g_avg, residence_time, vol_floc};
pub use input::{DesignInputs, PlantLayout};
pub use plate::{PlateLayout, l_plate_et, num_plates_et};
pub use sizing::{SizingResult, size};
