use uom::si::{area::square_meter, f64::Area};

/// Iteration settings for the planview area fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceConfig {
    /// Maximum iteration count before giving up.
    pub max_iters: usize,

    /// Largest accepted `|A_new / A_prev − 1|` between successive estimates.
    pub tolerance: f64,

    /// Initial guess for the entrance tank planview area.
    pub seed_area: Area,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 0.01,
            seed_area: Area::new::<square_meter>(1.0),
        }
    }
}
