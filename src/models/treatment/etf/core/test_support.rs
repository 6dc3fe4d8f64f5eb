//! Shared fixtures for the sizing tests.

use uom::si::{
    f64::{Length, Ratio, ThermodynamicTemperature, VolumeRate},
    length::{centimeter, meter},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_second,
};

use crate::support::properties::Water;

use super::{Constants, DesignInputs};

pub(super) fn constants() -> Constants<Water> {
    Constants::default()
}

/// Design inputs with 40 cm of headloss, `Gt = 37000` and a 2 m end depth.
pub(super) fn inputs(q_lps: f64, t_celsius: f64) -> DesignInputs {
    DesignInputs::new(
        VolumeRate::new::<liter_per_second>(q_lps),
        Length::new::<centimeter>(40.0),
        Ratio::new::<ratio>(37_000.0),
        ThermodynamicTemperature::new::<degree_celsius>(t_celsius),
        Length::new::<meter>(2.0),
    )
    .unwrap()
}
