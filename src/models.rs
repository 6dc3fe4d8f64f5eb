//! Public Twine models.
//!
//! Models are organized into domain-specific submodules (e.g., `treatment`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; only the types needed to drive it are re-exported.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model-specific core API.

pub mod treatment;
