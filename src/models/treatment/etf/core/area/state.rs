use uom::{
    ConstZero,
    si::f64::{Area, Length},
};

/// Where an area iteration stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Only the seed area is known.
    Initializing,

    /// Successive area estimates still differ by more than the tolerance.
    Iterating,

    /// Successive area estimates agree within the tolerance.
    Converged,
}

/// One estimate of the entrance tank planview area and the channel layout
/// it implies.
///
/// States are created fresh for every sizing call and never shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceState {
    /// Iteration that produced this state; zero for the seed.
    pub iteration: usize,

    /// Entrance tank area used as input to this iteration.
    pub a_prev: Area,

    /// Entrance tank area produced by this iteration.
    pub a_new: Area,

    /// Total width of all channels.
    pub w_tot: Length,

    /// Number of channels.
    pub num_chan: u32,

    /// Width of one channel.
    pub w_chan: Length,

    /// `a_new / a_prev`, or zero for the seed.
    pub area_ratio: f64,
}

impl ConvergenceState {
    /// Returns the seed state holding only the initial area guess.
    ///
    /// The zero area ratio forces at least one iteration.
    #[must_use]
    pub fn seed(area: Area) -> Self {
        Self {
            iteration: 0,
            a_prev: area,
            a_new: area,
            w_tot: Length::ZERO,
            num_chan: 0,
            w_chan: Length::ZERO,
            area_ratio: 0.0,
        }
    }

    /// Returns the phase of this state for the given tolerance.
    ///
    /// The tolerance is checked in both directions, so an estimate that
    /// overshoots is treated the same as one that falls short.
    #[must_use]
    pub fn phase(&self, tolerance: f64) -> Phase {
        if self.iteration == 0 {
            Phase::Initializing
        } else if (self.area_ratio - 1.0).abs() <= tolerance {
            Phase::Converged
        } else {
            Phase::Iterating
        }
    }
}
