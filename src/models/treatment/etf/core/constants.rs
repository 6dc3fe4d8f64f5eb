//! Design constants shared by every sizing formula.

use uom::si::{
    acceleration::meter_per_second_squared,
    angle::degree,
    f64::{Acceleration, Angle, Length, Ratio, Velocity},
    length::{centimeter, millimeter},
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    properties::Water,
};

use super::SizingError;

/// Ratio of the vena contracta area to the orifice area.
pub const VENA_CONTRACTA_RATIO_ORIFICE: f64 = 0.63;

/// Returns the minor loss coefficient of a flow expansion, `(1/Π_vc² − 1)²`.
///
/// A 180° bend around a baffle behaves like the expansion downstream of an
/// orifice with vena contracta ratio `Π_vc`.
#[must_use]
pub fn expansion_minor_loss(vena_contracta_ratio: f64) -> Ratio {
    Ratio::new::<ratio>((1.0 / vena_contracta_ratio.powi(2) - 1.0).powi(2))
}

/// Constants of a design standard.
///
/// A value of this type is passed explicitly to every sizing formula, so
/// designs under different standards can be evaluated side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants<Fluid = Water> {
    /// Minor loss coefficient of the flow expansion at each baffle.
    pub k_e: Ratio,

    /// Smallest allowed ratio of water depth to baffle spacing (H/S).
    pub hs_ratio_min: Ratio,

    /// Largest allowed ratio of water depth to expansion spacing (H/S).
    pub hs_ratio_max: Ratio,

    /// Narrowest channel a worker can stand in.
    pub width_min_construct: Length,

    /// Gravitational acceleration.
    pub gravity: Acceleration,

    /// Fluid providing the kinematic viscosity.
    pub fluid: Fluid,
}

impl<Fluid> Constants<Fluid> {
    /// Constructs validated constants.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if a coefficient is not strictly
    /// positive, `hs_ratio_max` is below `hs_ratio_min`, or the construction
    /// width is negative.
    pub fn new(
        k_e: Ratio,
        hs_ratio_min: Ratio,
        hs_ratio_max: Ratio,
        width_min_construct: Length,
        gravity: Acceleration,
        fluid: Fluid,
    ) -> Result<Self, SizingError> {
        StrictlyPositive::new(k_e).map_err(SizingError::invalid("k_e"))?;
        StrictlyPositive::new(hs_ratio_min).map_err(SizingError::invalid("hs_ratio_min"))?;
        StrictlyPositive::new(hs_ratio_max).map_err(SizingError::invalid("hs_ratio_max"))?;
        if hs_ratio_max < hs_ratio_min {
            return Err(SizingError::InvalidInput {
                name: "hs_ratio_max",
                source: ConstraintError::BelowMinimum,
            });
        }
        NonNegative::new(width_min_construct)
            .map_err(SizingError::invalid("width_min_construct"))?;
        StrictlyPositive::new(gravity).map_err(SizingError::invalid("gravity"))?;

        Ok(Self {
            k_e,
            hs_ratio_min,
            hs_ratio_max,
            width_min_construct,
            gravity,
            fluid,
        })
    }

    /// Returns these constants with a different fluid.
    #[must_use]
    pub fn with_fluid<Other>(self, fluid: Other) -> Constants<Other> {
        Constants {
            k_e: self.k_e,
            hs_ratio_min: self.hs_ratio_min,
            hs_ratio_max: self.hs_ratio_max,
            width_min_construct: self.width_min_construct,
            gravity: self.gravity,
            fluid,
        }
    }
}

impl Default for Constants<Water> {
    /// Returns the standard constants: `H/S` between 3 and 6, a 45 cm
    /// construction width, and standard gravity.
    fn default() -> Self {
        Self {
            k_e: expansion_minor_loss(VENA_CONTRACTA_RATIO_ORIFICE),
            hs_ratio_min: Ratio::new::<ratio>(3.0),
            hs_ratio_max: Ratio::new::<ratio>(6.0),
            width_min_construct: Length::new::<centimeter>(45.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.806_65),
            fluid: Water,
        }
    }
}

/// Plate settler geometry of the entrance tank.
///
/// The plates capture large particles (grit) before the flow enters the
/// flocculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateSettler {
    /// Clear spacing between adjacent plates.
    pub spacing: Length,

    /// Plate thickness.
    pub thickness: Length,

    /// Plate angle from horizontal.
    pub angle: Angle,

    /// Settling velocity of the smallest particle the plates must capture.
    pub capture_velocity: Velocity,
}

impl PlateSettler {
    /// Distance between the center lines of adjacent plates.
    #[must_use]
    pub fn center_distance(&self) -> Length {
        self.spacing + self.thickness
    }
}

impl Default for PlateSettler {
    fn default() -> Self {
        Self {
            spacing: Length::new::<centimeter>(2.5),
            thickness: Length::new::<millimeter>(2.0),
            angle: Angle::new::<degree>(50.0),
            capture_velocity: Velocity::new::<meter_per_second>(0.008),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    #[test]
    fn expansion_minor_loss_of_orifice() {
        let k_e = expansion_minor_loss(VENA_CONTRACTA_RATIO_ORIFICE);
        assert_relative_eq!(k_e.get::<ratio>(), 2.308_960, max_relative = 1e-6);
    }

    #[test]
    fn plate_center_distance() {
        let plates = PlateSettler::default();
        assert_relative_eq!(plates.center_distance().get::<meter>(), 0.027, epsilon = 1e-12);
    }

    #[test]
    fn rejects_inverted_hs_bounds() {
        let defaults = Constants::default();
        let result = Constants::new(
            defaults.k_e,
            Ratio::new::<ratio>(6.0),
            Ratio::new::<ratio>(3.0),
            defaults.width_min_construct,
            defaults.gravity,
            Water,
        );
        assert!(matches!(
            result,
            Err(SizingError::InvalidInput {
                name: "hs_ratio_max",
                ..
            })
        ));
    }

    #[test]
    fn equal_hs_bounds_are_allowed() {
        let defaults = Constants::default();
        let three = Ratio::new::<ratio>(3.0);
        assert!(
            Constants::new(
                defaults.k_e,
                three,
                three,
                defaults.width_min_construct,
                defaults.gravity,
                Water,
            )
            .is_ok()
        );
    }
}
