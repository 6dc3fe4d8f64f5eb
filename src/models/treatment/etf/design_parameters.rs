use serde::Serialize;
use uom::si::{
    area::square_meter, frequency::hertz, length::meter, time::second, volume::cubic_meter,
};

use super::SizingResult;

/// Flat record of a sized unit, for drawing templates and reports.
///
/// Lengths are in metres, counts are integers, and the obstacle flag is `0` or
/// `1` so every value can be dropped into a parametric drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignParameters {
    pub g_avg_per_s: f64,
    pub residence_time_s: f64,
    pub vol_floc_m3: f64,
    pub area_ent_tank_m2: f64,
    pub w_tot_m: f64,
    pub num_chan: u32,
    pub w_chan_m: f64,
    pub h_chan_m: f64,
    pub expansion_spacing_m: f64,
    pub num_expansions: u32,
    pub baffle_spacing_m: f64,
    pub num_baffles_chan_1: u32,
    pub num_baffles_chan_n: u32,
    pub l_top_baffle_m: f64,
    pub l_bottom_baffle_m: f64,
    pub num_plates: u32,
    pub plate_length_m: f64,
    pub obstacles: u8,
}

impl From<&SizingResult> for DesignParameters {
    fn from(result: &SizingResult) -> Self {
        Self {
            g_avg_per_s: result.g_avg.get::<hertz>(),
            residence_time_s: result.residence_time.get::<second>(),
            vol_floc_m3: result.vol_floc.get::<cubic_meter>(),
            area_ent_tank_m2: result.area_ent_tank.get::<square_meter>(),
            w_tot_m: result.w_tot.get::<meter>(),
            num_chan: result.num_chan,
            w_chan_m: result.w_chan.get::<meter>(),
            h_chan_m: result.h_chan.get::<meter>(),
            expansion_spacing_m: result.baffles.expansion_spacing.get::<meter>(),
            num_expansions: result.baffles.num_expansions,
            baffle_spacing_m: result.baffles.baffle_spacing.get::<meter>(),
            num_baffles_chan_1: result.baffles.num_baffles_chan_1,
            num_baffles_chan_n: result.baffles.num_baffles_chan_n,
            l_top_baffle_m: result.l_top_baffle.get::<meter>(),
            l_bottom_baffle_m: result.l_bottom_baffle.get::<meter>(),
            num_plates: result.plates.num_plates,
            plate_length_m: result.plates.plate_length.get::<meter>(),
            obstacles: u8::from(result.obstacles),
        }
    }
}
