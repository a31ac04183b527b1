//! Compass drivers

pub mod hmc5883l;

pub use hmc5883l::{Hmc5883l, Hmc5883lConfig};
