//! Entrance tank and flocculator (ETF) sizing model.
//!
//! [`Etf`] bundles the design constants, the plant layout, the entrance tank
//! plate settler and the iteration settings, and implements
//! [`twine_core::Model`] over [`DesignInputs`]. The individual sizing steps are
//! re-exported for callers that only need part of the design.
//!
//! A [`BasisOfDesign`] reads the same settings from a TOML document, and
//! [`DesignParameters`] flattens a [`SizingResult`] into plain numbers for
//! reporting.

mod basis;
mod core;
mod design_parameters;

pub use self::core::{
    AreaSolution, BaffleLayout, Constants, ConvergenceConfig, ConvergenceState, DesignInputs,
    Phase, PlantLayout, PlateLayout, PlateSettler, SizingError, SizingResult,
    VENA_CONTRACTA_RATIO_ORIFICE, area_ent_tank, baffle_spacing, exp_dist_max,
    expansion_minor_loss, g_avg, height_exp, l_plate_et, num_baffles, num_channel,
    num_expansions, num_plates_et, residence_time, size, vol_floc, width_floc_min, width_hs_min,
};
pub use basis::{BasisError, BasisOfDesign};
pub use design_parameters::DesignParameters;

use rayon::prelude::*;
use twine_core::Model;

use crate::support::properties::{KinematicViscosityModel, Water};

/// Entrance tank and flocculator sizing model.
#[derive(Debug, Clone, PartialEq)]
pub struct Etf<Fluid = Water> {
    /// Design constants and the fluid.
    pub constants: Constants<Fluid>,

    /// Sedimentation tank, baffle and freeboard dimensions.
    pub layout: PlantLayout,

    /// Entrance tank plate settler geometry.
    pub plates: PlateSettler,

    /// Area iteration settings.
    pub convergence: ConvergenceConfig,
}

impl Default for Etf<Water> {
    fn default() -> Self {
        Self {
            constants: Constants::default(),
            layout: PlantLayout::default(),
            plates: PlateSettler::default(),
            convergence: ConvergenceConfig::default(),
        }
    }
}

impl<Fluid: KinematicViscosityModel> Etf<Fluid> {
    /// Sizes one unit.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the design cannot be completed.
    pub fn size(&self, inputs: &DesignInputs) -> Result<SizingResult, SizingError> {
        size(
            inputs,
            &self.constants,
            &self.layout,
            &self.plates,
            &self.convergence,
        )
    }
}

impl<Fluid: KinematicViscosityModel + Sync> Etf<Fluid> {
    /// Sizes many independent units in parallel.
    ///
    /// Results are returned in input order. A failed design does not affect
    /// the others.
    pub fn size_all(&self, inputs: &[DesignInputs]) -> Vec<Result<SizingResult, SizingError>> {
        inputs.par_iter().map(|inputs| self.size(inputs)).collect()
    }
}

impl<Fluid: KinematicViscosityModel> Model for Etf<Fluid> {
    type Input = DesignInputs;
    type Output = SizingResult;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.size(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second,
        f64::{Length, Ratio, ThermodynamicTemperature, VolumeRate},
        length::{centimeter, meter},
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
        volume_rate::liter_per_second,
    };

    use crate::support::{properties::PropertyError, units::KinematicViscosity};

    fn inputs(q_lps: f64, t_celsius: f64) -> DesignInputs {
        DesignInputs::new(
            VolumeRate::new::<liter_per_second>(q_lps),
            Length::new::<centimeter>(40.0),
            Ratio::new::<ratio>(37_000.0),
            ThermodynamicTemperature::new::<degree_celsius>(t_celsius),
            Length::new::<meter>(2.0),
        )
        .unwrap()
    }

    /// A fluid with the same viscosity at every temperature.
    struct FixedViscosity(KinematicViscosity);

    impl KinematicViscosityModel for FixedViscosity {
        fn kinematic_viscosity(
            &self,
            _temperature: ThermodynamicTemperature,
        ) -> Result<KinematicViscosity, PropertyError> {
            Ok(self.0)
        }
    }

    /// A fluid whose viscosity is never available.
    struct Unavailable;

    impl KinematicViscosityModel for Unavailable {
        fn kinematic_viscosity(
            &self,
            _temperature: ThermodynamicTemperature,
        ) -> Result<KinematicViscosity, PropertyError> {
            Err(PropertyError::OutOfDomain {
                context: "no data".into(),
            })
        }
    }

    fn etf_with<Fluid>(fluid: Fluid) -> Etf<Fluid> {
        let etf = Etf::default();
        Etf {
            constants: etf.constants.with_fluid(fluid),
            layout: etf.layout,
            plates: etf.plates,
            convergence: etf.convergence,
        }
    }

    #[test]
    fn model_call_matches_direct_sizing() {
        let etf = Etf::default();
        let inputs = inputs(20.0, 15.0);

        let via_model = etf.call(&inputs).unwrap();
        let direct = size(
            &inputs,
            &Constants::default(),
            &PlantLayout::default(),
            &PlateSettler::default(),
            &ConvergenceConfig::default(),
        )
        .unwrap();

        assert_eq!(via_model, direct);
    }

    #[test]
    fn size_all_keeps_input_order() {
        let batch = [inputs(20.0, 15.0), inputs(100.0, 15.0), inputs(6.0, 20.0)];

        let results = Etf::default().size_all(&batch);

        let channels: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().map(|r| r.num_chan).unwrap())
            .collect();
        assert_eq!(channels, [2, 4, 2]);

        let w_6lps = results[2].as_ref().unwrap().w_chan.get::<meter>();
        assert_relative_eq!(w_6lps, 0.076_444, max_relative = 1e-4);
    }

    #[test]
    fn size_all_isolates_failures() {
        let etf = Etf {
            convergence: ConvergenceConfig {
                max_iters: 4,
                ..ConvergenceConfig::default()
            },
            ..Etf::default()
        };

        // 20 L/s at 15 °C converges in 4 iterations, 6 L/s at 20 °C needs 5.
        let results = etf.size_all(&[inputs(20.0, 15.0), inputs(6.0, 20.0)]);

        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(SizingError::ConvergenceFailure { iters: 4, .. })
        ));
    }

    #[test]
    fn accepts_custom_fluid() {
        let nu_20c = KinematicViscosity::new::<square_meter_per_second>(1.003_555_158_7e-6);
        let etf = etf_with(FixedViscosity(nu_20c));

        // The fixed fluid ignores the inputs' temperature.
        let custom = etf.call(&inputs(20.0, 5.0)).unwrap();
        let water = Etf::default().call(&inputs(20.0, 20.0)).unwrap();

        assert_eq!(custom.num_chan, water.num_chan);
        assert_relative_eq!(
            custom.w_chan.get::<meter>(),
            water.w_chan.get::<meter>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn propagates_property_errors() {
        let err = etf_with(Unavailable).call(&inputs(20.0, 15.0)).unwrap_err();
        assert!(matches!(err, SizingError::Property(_)));
    }
}
