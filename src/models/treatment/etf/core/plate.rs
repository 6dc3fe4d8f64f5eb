//! Entrance tank plate settlers.

use uom::si::{
    angle::radian,
    f64::{Length, VolumeRate},
    length::meter,
};

use crate::support::constraint::{Constrained, Constraint, StrictlyPositive};

use super::{PlateSettler, SizingError};

/// Returns the number of plates that minimizes the length of the plate stack.
///
/// `N = ceil(sqrt(q / (d_center · W_chan · v_capture · sin θ)))`
///
/// # Errors
///
/// Returns [`SizingError::DegenerateGeometry`] if the plate geometry does not
/// give a finite, positive plate count.
pub fn num_plates_et(
    q_plant: VolumeRate,
    w_chan: Constrained<Length, StrictlyPositive>,
    plates: &PlateSettler,
) -> Result<u32, SizingError> {
    let sin = plates.angle.get::<radian>().sin();
    let capture_area = plates.center_distance() * w_chan.get() * plates.capture_velocity * sin;
    let count = (q_plant / capture_area).value.sqrt().ceil();

    if !count.is_finite() || count < 1.0 {
        return Err(SizingError::degenerate(format!(
            "plate settler geometry gives {count} plates"
        )));
    }
    Ok(count as u32)
}

/// Returns the length of each entrance tank plate.
///
/// The flow is split evenly across the plates; the length needed to capture
/// particles at the capture velocity is reduced by the horizontal projection
/// of the plate spacing, `S · tan θ`.
///
/// # Errors
///
/// Returns [`SizingError::DegenerateGeometry`] if the plate length would not
/// be positive.
pub fn l_plate_et(
    q_plant: VolumeRate,
    w_chan: Constrained<Length, StrictlyPositive>,
    plates: &PlateSettler,
) -> Result<Length, SizingError> {
    let num_plates = num_plates_et(q_plant, w_chan, plates)?;
    let angle = plates.angle.get::<radian>();

    let capture_length: Length = q_plant / (w_chan.get() * plates.capture_velocity)
        / (f64::from(num_plates) * angle.cos());
    let l_plate = capture_length - plates.spacing * angle.tan();

    if StrictlyPositive::check(&l_plate).is_err() {
        return Err(SizingError::degenerate(format!(
            "plate length of {} m",
            l_plate.get::<meter>()
        )));
    }
    Ok(l_plate)
}

/// Plate settler geometry of the entrance tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateLayout {
    /// Number of plates.
    pub num_plates: u32,

    /// Length of each plate.
    pub plate_length: Length,
}

impl PlateLayout {
    /// Computes the plate layout for a channel of width `w_chan`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::DegenerateGeometry`] if the plate count or length
    /// is not physical.
    pub fn compute(
        q_plant: VolumeRate,
        w_chan: Constrained<Length, StrictlyPositive>,
        plates: &PlateSettler,
    ) -> Result<Self, SizingError> {
        Ok(Self {
            num_plates: num_plates_et(q_plant, w_chan, plates)?,
            plate_length: l_plate_et(q_plant, w_chan, plates)?,
        })
    }
}
