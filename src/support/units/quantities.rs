use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P2, Z0},
};

/// Velocity gradient, 1/s in SI.
pub type VelocityGradient = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
///
/// Shares its dimension with [`DiffusionCoefficient`](uom::si::f64::DiffusionCoefficient),
/// so the [`diffusion_coefficient`](uom::si::diffusion_coefficient) units apply.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared,
        diffusion_coefficient::square_meter_per_second,
        dynamic_viscosity::pascal_second,
        f64::{Acceleration, DynamicViscosity, Length, MassDensity, Ratio},
        frequency::hertz,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        ratio::ratio,
    };

    #[test]
    fn kinematic_viscosity_is_dynamic_viscosity_over_density() {
        let mu = DynamicViscosity::new::<pascal_second>(1.0e-3);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1000.0);

        let nu: KinematicViscosity = mu / rho;
        assert_relative_eq!(nu.get::<square_meter_per_second>(), 1.0e-6);
    }

    #[test]
    fn gravity_headloss_over_viscosity_is_a_velocity_gradient() {
        let g = Acceleration::new::<meter_per_second_squared>(10.0);
        let hl = Length::new::<meter>(0.5);
        let gt = Ratio::new::<ratio>(5_000.0);
        let nu = KinematicViscosity::new::<square_meter_per_second>(1.0e-6);

        let gradient: VelocityGradient = g * hl / (gt * nu);
        assert_relative_eq!(gradient.get::<hertz>(), 1_000.0, max_relative = 1e-12);
    }
}
