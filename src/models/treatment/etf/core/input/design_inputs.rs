use uom::si::f64::{Length, Ratio, ThermodynamicTemperature, VolumeRate};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    properties::LiquidWater,
};

use crate::models::treatment::etf::core::SizingError;

/// Hydraulic design inputs for one sizing run.
///
/// All values are validated on construction: the flow rate, headloss,
/// collision potential and end depth are strictly positive and the
/// temperature lies in the liquid water range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignInputs {
    q_plant: VolumeRate,
    hl: Length,
    gt: Ratio,
    temperature: ThermodynamicTemperature,
    depth_end: Length,
}

impl DesignInputs {
    /// Constructs validated design inputs.
    ///
    /// # Parameters
    ///
    /// - `q_plant`: Plant flow rate.
    /// - `hl`: Headloss through the flocculator.
    /// - `gt`: Target collision potential (dimensionless `G·θ`).
    /// - `temperature`: Design water temperature.
    /// - `depth_end`: Water depth at the end of the flocculator.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] naming the first input that is not
    /// strictly positive, or the temperature if water would not be liquid.
    pub fn new(
        q_plant: VolumeRate,
        hl: Length,
        gt: Ratio,
        temperature: ThermodynamicTemperature,
        depth_end: Length,
    ) -> Result<Self, SizingError> {
        let q_plant = StrictlyPositive::new(q_plant).map_err(SizingError::invalid("q_plant"))?;
        let hl = StrictlyPositive::new(hl).map_err(SizingError::invalid("hl"))?;
        let gt = StrictlyPositive::new(gt).map_err(SizingError::invalid("gt"))?;
        let temperature = Constrained::<_, LiquidWater>::new(temperature)
            .map_err(SizingError::invalid("temperature"))?;
        let depth_end =
            StrictlyPositive::new(depth_end).map_err(SizingError::invalid("depth_end"))?;

        Ok(Self {
            q_plant: q_plant.into_inner(),
            hl: hl.into_inner(),
            gt: gt.into_inner(),
            temperature: temperature.into_inner(),
            depth_end: depth_end.into_inner(),
        })
    }

    /// Returns a copy with a different plant flow rate.
    ///
    /// Useful for parametric sweeps over flow.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the flow rate is not strictly positive.
    pub fn with_q_plant(self, q_plant: VolumeRate) -> Result<Self, SizingError> {
        Self::new(q_plant, self.hl, self.gt, self.temperature, self.depth_end)
    }

    /// Returns a copy with a different end depth.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the depth is not strictly positive.
    pub fn with_depth_end(self, depth_end: Length) -> Result<Self, SizingError> {
        Self::new(self.q_plant, self.hl, self.gt, self.temperature, depth_end)
    }

    /// Returns the plant flow rate.
    #[must_use]
    pub fn q_plant(&self) -> VolumeRate {
        self.q_plant
    }

    /// Returns the flocculator headloss.
    #[must_use]
    pub fn hl(&self) -> Length {
        self.hl
    }

    /// Returns the target collision potential.
    #[must_use]
    pub fn gt(&self) -> Ratio {
        self.gt
    }

    /// Returns the design temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the water depth at the end of the flocculator.
    #[must_use]
    pub fn depth_end(&self) -> Length {
        self.depth_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::{centimeter, meter},
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
        volume_rate::liter_per_second,
    };

    use crate::support::constraint::ConstraintError;

    fn build(q: f64, hl: f64, gt: f64, t: f64, depth: f64) -> Result<DesignInputs, SizingError> {
        DesignInputs::new(
            VolumeRate::new::<liter_per_second>(q),
            Length::new::<centimeter>(hl),
            Ratio::new::<ratio>(gt),
            ThermodynamicTemperature::new::<degree_celsius>(t),
            Length::new::<meter>(depth),
        )
    }

    fn rejected_name(result: Result<DesignInputs, SizingError>) -> (&'static str, ConstraintError) {
        match result {
            Err(SizingError::InvalidInput { name, source }) => (name, source),
            other => panic!("Expected InvalidInput, got: {other:?}"),
        }
    }

    #[test]
    fn accepts_typical_design() {
        let inputs = build(20.0, 40.0, 37_000.0, 15.0, 2.0).unwrap();
        assert_relative_eq!(inputs.hl().get::<meter>(), 0.4);
        assert_relative_eq!(inputs.depth_end().get::<meter>(), 2.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(
            rejected_name(build(0.0, 40.0, 37_000.0, 15.0, 2.0)),
            ("q_plant", ConstraintError::Zero)
        );
        assert_eq!(
            rejected_name(build(20.0, -1.0, 37_000.0, 15.0, 2.0)),
            ("hl", ConstraintError::Negative)
        );
        assert_eq!(
            rejected_name(build(20.0, 40.0, 0.0, 15.0, 2.0)),
            ("gt", ConstraintError::Zero)
        );
    }

    #[test]
    fn rejects_vanishing_depth() {
        assert_eq!(
            rejected_name(build(20.0, 40.0, 37_000.0, 15.0, 0.0)),
            ("depth_end", ConstraintError::Zero)
        );

        let inputs = build(20.0, 40.0, 37_000.0, 15.0, 2.0).unwrap();
        assert!(matches!(
            inputs.with_depth_end(Length::new::<meter>(0.0)),
            Err(SizingError::InvalidInput {
                name: "depth_end",
                ..
            })
        ));
    }

    #[test]
    fn rejects_frozen_or_boiling_water() {
        assert_eq!(
            rejected_name(build(20.0, 40.0, 37_000.0, -4.0, 2.0)),
            ("temperature", ConstraintError::BelowMinimum)
        );
        assert_eq!(
            rejected_name(build(20.0, 40.0, 37_000.0, 105.0, 2.0)),
            ("temperature", ConstraintError::AboveMaximum)
        );
    }
}
