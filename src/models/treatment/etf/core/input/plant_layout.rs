use uom::si::{
    f64::{Length, VolumeRate},
    length::{centimeter, meter, millimeter},
    volume_rate::liter_per_second,
};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive};

use crate::models::treatment::etf::core::SizingError;

/// Plant dimensions that bound the entrance tank and flocculator.
///
/// The flocculator channels run alongside the sedimentation tanks, so their
/// length is set by the sedimentation unit. The first channel also houses the
/// entrance tank, which shortens every other channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantLayout {
    l_sed: Length,
    l_ent_tank_max: Length,
    baffle_thickness: Length,
    freeboard: Length,
    obstacle_flow_max: VolumeRate,
}

impl PlantLayout {
    /// Constructs a validated plant layout.
    ///
    /// # Parameters
    ///
    /// - `l_sed`: Length of the sedimentation unit, including channels.
    /// - `l_ent_tank_max`: Maximum length of the entrance tank.
    /// - `baffle_thickness`: Thickness of one baffle sheet.
    /// - `freeboard`: Height between the water surface and the channel wall top.
    /// - `obstacle_flow_max`: Largest plant flow for which flow obstacles are installed.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if a length is out of range or
    /// the entrance tank is not shorter than the sedimentation unit.
    pub fn new(
        l_sed: Length,
        l_ent_tank_max: Length,
        baffle_thickness: Length,
        freeboard: Length,
        obstacle_flow_max: VolumeRate,
    ) -> Result<Self, SizingError> {
        let l_sed = StrictlyPositive::new(l_sed).map_err(SizingError::invalid("l_sed"))?;
        let l_ent_tank_max = StrictlyPositive::new(l_ent_tank_max)
            .map_err(SizingError::invalid("l_ent_tank_max"))?;
        let baffle_thickness = NonNegative::new(baffle_thickness)
            .map_err(SizingError::invalid("baffle_thickness"))?;
        let freeboard = NonNegative::new(freeboard).map_err(SizingError::invalid("freeboard"))?;
        let obstacle_flow_max = NonNegative::new(obstacle_flow_max)
            .map_err(SizingError::invalid("obstacle_flow_max"))?;

        if l_ent_tank_max.get() >= l_sed.get() {
            return Err(SizingError::InvalidInput {
                name: "l_ent_tank_max",
                source: ConstraintError::AboveMaximum,
            });
        }

        Ok(Self {
            l_sed: l_sed.into_inner(),
            l_ent_tank_max: l_ent_tank_max.into_inner(),
            baffle_thickness: baffle_thickness.into_inner(),
            freeboard: freeboard.into_inner(),
            obstacle_flow_max: obstacle_flow_max.into_inner(),
        })
    }

    /// Length of the sedimentation tank, which the first channel spans.
    #[must_use]
    pub fn l_sed(&self) -> Length {
        self.l_sed
    }

    /// Largest entrance tank length.
    #[must_use]
    pub fn l_ent_tank_max(&self) -> Length {
        self.l_ent_tank_max
    }

    /// Thickness of one baffle.
    #[must_use]
    pub fn baffle_thickness(&self) -> Length {
        self.baffle_thickness
    }

    /// Wall height above the water at the start of the flocculator.
    #[must_use]
    pub fn freeboard(&self) -> Length {
        self.freeboard
    }

    /// Largest plant flow for which obstacles are installed.
    #[must_use]
    pub fn obstacle_flow_max(&self) -> VolumeRate {
        self.obstacle_flow_max
    }

    /// Length of every channel after the first, which gives up the entrance tank.
    #[must_use]
    pub fn l_chan_n(&self) -> Length {
        self.l_sed - self.l_ent_tank_max
    }
}

impl Default for PlantLayout {
    fn default() -> Self {
        Self {
            l_sed: Length::new::<meter>(7.35),
            l_ent_tank_max: Length::new::<meter>(2.2),
            baffle_thickness: Length::new::<millimeter>(2.0),
            freeboard: Length::new::<centimeter>(10.0),
            obstacle_flow_max: VolumeRate::new::<liter_per_second>(50.0),
        }
    }
}
