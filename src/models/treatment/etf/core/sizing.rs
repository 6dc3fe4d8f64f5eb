use log::debug;
use uom::si::{
    f64::{Area, Length, Time, Volume},
    length::meter,
    volume_rate::liter_per_second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    properties::KinematicViscosityModel,
    units::VelocityGradient,
};

use super::{
    AreaSolution, BaffleLayout, Constants, ConvergenceConfig, ConvergenceState, DesignInputs,
    PlantLayout, PlateLayout, PlateSettler, SizingError, area_ent_tank, g_avg, residence_time,
    vol_floc,
};

/// Complete hydraulic design of an entrance tank and flocculator.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingResult {
    /// Average velocity gradient in the flocculator.
    pub g_avg: VelocityGradient,

    /// Hydraulic residence time of the flocculator.
    pub residence_time: Time,

    /// Flocculator water volume.
    pub vol_floc: Volume,

    /// Entrance tank planview area.
    pub area_ent_tank: Area,

    /// Total width of all flocculator channels.
    pub w_tot: Length,

    /// Number of flocculator channels, always even.
    pub num_chan: u32,

    /// Width of one flocculator channel.
    pub w_chan: Length,

    /// Channel wall height: end depth plus head loss plus freeboard.
    pub h_chan: Length,

    /// Baffle spacing, expansions and per-channel baffle counts.
    pub baffles: BaffleLayout,

    /// Length of the baffles hung from the top of the channel.
    pub l_top_baffle: Length,

    /// Length of the baffles rising from the channel floor.
    pub l_bottom_baffle: Length,

    /// Entrance tank plate settler count and length.
    pub plates: PlateLayout,

    /// Whether obstacles are placed between baffles.
    pub obstacles: bool,

    /// Area iterations, ending with the converged state.
    pub history: Vec<ConvergenceState>,

    /// Channel count the area iteration was pinned to, if it cycled.
    pub pinned_num_chan: Option<u32>,
}

impl SizingResult {
    /// Iteration count the area solve needed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.history.len()
    }
}

/// Sizes an entrance tank and flocculator for one set of design inputs.
///
/// The planview area is solved first. Everything downstream (baffles, plates,
/// baffle lengths) is then evaluated once at the converged channel width.
///
/// # Errors
///
/// Returns the first error raised by any step; no partial result is produced.
pub fn size<Fluid: KinematicViscosityModel>(
    inputs: &DesignInputs,
    constants: &Constants<Fluid>,
    layout: &PlantLayout,
    plates: &PlateSettler,
    config: &ConvergenceConfig,
) -> Result<SizingResult, SizingError> {
    let AreaSolution {
        state,
        history,
        pinned_num_chan,
    } = area_ent_tank(inputs, constants, layout, config)?;

    let w_chan = StrictlyPositive::new(state.w_chan)
        .map_err(|_| SizingError::degenerate("channel width is not positive"))?;

    let baffles = BaffleLayout::compute(inputs, constants, layout, w_chan)?;
    let h_chan = inputs.depth_end() + inputs.hl() + layout.freeboard();
    let (l_top_baffle, l_bottom_baffle) =
        baffle_lengths(inputs.depth_end(), h_chan, baffles.baffle_spacing)?;

    let result = SizingResult {
        g_avg: g_avg(inputs, constants)?,
        residence_time: residence_time(inputs, constants)?,
        vol_floc: vol_floc(inputs, constants)?,
        area_ent_tank: state.a_new,
        w_tot: state.w_tot,
        num_chan: state.num_chan,
        w_chan: state.w_chan,
        h_chan,
        baffles,
        l_top_baffle,
        l_bottom_baffle,
        plates: PlateLayout::compute(inputs.q_plant(), w_chan, plates)?,
        obstacles: inputs.q_plant() <= layout.obstacle_flow_max(),
        history,
        pinned_num_chan,
    };

    debug!(
        "sized etf: q={:.3} L/s num_chan={} w_chan={:.4} m baffles={}/{} plates={} iters={}",
        inputs.q_plant().get::<liter_per_second>(),
        result.num_chan,
        result.w_chan.get::<meter>(),
        result.baffles.num_baffles_chan_1,
        result.baffles.num_baffles_chan_n,
        result.plates.num_plates,
        result.iters(),
    );

    Ok(result)
}

/// Top and bottom baffle lengths, each leaving one baffle spacing open.
fn baffle_lengths(
    depth_end: Length,
    h_chan: Length,
    baffle_spacing: Length,
) -> Result<(Length, Length), SizingError> {
    let top = h_chan - baffle_spacing;
    let bottom = depth_end - baffle_spacing;

    if StrictlyPositive::check(&bottom).is_err() {
        return Err(SizingError::degenerate(format!(
            "baffle spacing {:.3} m leaves no bottom baffle in {:.3} m of water",
            baffle_spacing.get::<meter>(),
            depth_end.get::<meter>(),
        )));
    }

    Ok((top, bottom))
}
