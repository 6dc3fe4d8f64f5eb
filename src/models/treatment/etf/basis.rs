use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Length, Ratio, ThermodynamicTemperature, Velocity, VolumeRate},
    length::{centimeter, meter, millimeter},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    velocity::millimeter_per_second,
    volume_rate::liter_per_second,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    properties::Water,
};

use super::{
    Constants, ConvergenceConfig, DesignInputs, Etf, PlantLayout, PlateSettler, SizingError,
};

/// Errors raised while loading a [`BasisOfDesign`].
#[derive(Debug, Error)]
pub enum BasisError {
    #[error("failed to read basis of design from `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse basis of design")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize basis of design")]
    Serialize(#[from] toml::ser::Error),

    /// The document parsed but a value is out of range.
    #[error("invalid basis of design")]
    Invalid(#[from] SizingError),
}

/// Design settings shared by every unit of a plant.
///
/// Each field carries its unit in its name. Missing fields take the default
/// value, so a document only needs to list what it overrides:
///
/// ```
/// use etf_sizing::models::treatment::etf::BasisOfDesign;
///
/// let basis = BasisOfDesign::from_toml_str("headloss_cm = 35.0\ntemperature_c = 10.0").unwrap();
/// assert_eq!(basis.headloss_cm, 35.0);
/// assert_eq!(basis.collision_potential, 37_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BasisOfDesign {
    pub headloss_cm: f64,
    pub collision_potential: f64,
    pub temperature_c: f64,
    pub freeboard_cm: f64,
    pub hs_ratio_min: f64,
    pub hs_ratio_max: f64,
    pub width_min_construct_cm: f64,
    pub l_ent_tank_max_m: f64,
    pub l_sed_m: f64,
    pub baffle_thickness_mm: f64,
    pub obstacle_flow_max_lps: f64,
    pub plate_spacing_cm: f64,
    pub plate_thickness_mm: f64,
    pub plate_angle_deg: f64,
    pub capture_velocity_mm_s: f64,
    pub max_iters: usize,
    pub area_tolerance: f64,
}

impl Default for BasisOfDesign {
    fn default() -> Self {
        Self {
            headloss_cm: 40.0,
            collision_potential: 37_000.0,
            temperature_c: 15.0,
            freeboard_cm: 10.0,
            hs_ratio_min: 3.0,
            hs_ratio_max: 6.0,
            width_min_construct_cm: 45.0,
            l_ent_tank_max_m: 2.2,
            l_sed_m: 7.35,
            baffle_thickness_mm: 2.0,
            obstacle_flow_max_lps: 50.0,
            plate_spacing_cm: 2.5,
            plate_thickness_mm: 2.0,
            plate_angle_deg: 50.0,
            capture_velocity_mm_s: 8.0,
            max_iters: 100,
            area_tolerance: 0.01,
        }
    }
}

impl BasisOfDesign {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::Parse`] for malformed TOML or unknown fields, and
    /// [`BasisError::Invalid`] if a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, BasisError> {
        let basis: Self = toml::from_str(content)?;
        basis.etf()?;
        Ok(basis)
    }

    /// Reads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::Io`] if the file cannot be read, otherwise as
    /// [`BasisOfDesign::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BasisError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BasisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Renders this basis as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, BasisError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the design inputs of one unit under this basis.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if any input is out of range.
    pub fn inputs(
        &self,
        q_plant: VolumeRate,
        depth_end: Length,
    ) -> Result<DesignInputs, SizingError> {
        DesignInputs::new(
            q_plant,
            Length::new::<centimeter>(self.headloss_cm),
            Ratio::new::<ratio>(self.collision_potential),
            ThermodynamicTemperature::new::<degree_celsius>(self.temperature_c),
            depth_end,
        )
    }

    /// Design constants for water.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if a constant is out of range.
    pub fn constants(&self) -> Result<Constants<Water>, SizingError> {
        let standard = Constants::default();
        Constants::new(
            standard.k_e,
            Ratio::new::<ratio>(self.hs_ratio_min),
            Ratio::new::<ratio>(self.hs_ratio_max),
            Length::new::<centimeter>(self.width_min_construct_cm),
            standard.gravity,
            standard.fluid,
        )
    }

    /// Plant layout dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if a dimension is out of range.
    pub fn layout(&self) -> Result<PlantLayout, SizingError> {
        PlantLayout::new(
            Length::new::<meter>(self.l_sed_m),
            Length::new::<meter>(self.l_ent_tank_max_m),
            Length::new::<millimeter>(self.baffle_thickness_mm),
            Length::new::<centimeter>(self.freeboard_cm),
            VolumeRate::new::<liter_per_second>(self.obstacle_flow_max_lps),
        )
    }

    /// Entrance tank plate settler.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the spacing or capture velocity
    /// is not positive, the thickness is negative, or the angle is not strictly
    /// between horizontal and vertical.
    pub fn plates(&self) -> Result<PlateSettler, SizingError> {
        let spacing = StrictlyPositive::new(Length::new::<centimeter>(self.plate_spacing_cm))
            .map_err(SizingError::invalid("plate_spacing"))?;
        let thickness = NonNegative::new(Length::new::<millimeter>(self.plate_thickness_mm))
            .map_err(SizingError::invalid("plate_thickness"))?;
        let angle = StrictlyPositive::new(Angle::new::<degree>(self.plate_angle_deg))
            .map_err(SizingError::invalid("plate_angle"))?;
        if angle.get() >= Angle::new::<degree>(90.0) {
            return Err(SizingError::InvalidInput {
                name: "plate_angle",
                source: ConstraintError::AboveMaximum,
            });
        }
        let capture_velocity =
            StrictlyPositive::new(Velocity::new::<millimeter_per_second>(self.capture_velocity_mm_s))
                .map_err(SizingError::invalid("capture_velocity"))?;

        Ok(PlateSettler {
            spacing: spacing.into_inner(),
            thickness: thickness.into_inner(),
            angle: angle.into_inner(),
            capture_velocity: capture_velocity.into_inner(),
        })
    }

    /// Area iteration settings.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the tolerance is not positive
    /// or the iteration cap is zero.
    pub fn convergence(&self) -> Result<ConvergenceConfig, SizingError> {
        let tolerance = StrictlyPositive::new(self.area_tolerance)
            .map_err(SizingError::invalid("area_tolerance"))?;
        if self.max_iters == 0 {
            return Err(SizingError::InvalidInput {
                name: "max_iters",
                source: ConstraintError::Zero,
            });
        }

        Ok(ConvergenceConfig {
            max_iters: self.max_iters,
            tolerance: tolerance.into_inner(),
            seed_area: Area::new::<square_meter>(1.0),
        })
    }

    /// Builds the sizing model configured by this basis.
    ///
    /// # Errors
    ///
    /// Returns the first [`SizingError::InvalidInput`] found.
    pub fn etf(&self) -> Result<Etf<Water>, SizingError> {
        Ok(Etf {
            constants: self.constants()?,
            layout: self.layout()?,
            plates: self.plates()?,
            convergence: self.convergence()?,
        })
    }
}
