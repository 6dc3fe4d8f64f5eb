//! Water treatment unit process models.
//!
//! This module contains models for the hydraulic design of treatment plant
//! unit processes, starting with the entrance tank and flocculator.

pub mod etf;
