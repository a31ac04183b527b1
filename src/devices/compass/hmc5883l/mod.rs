//! HMC5883L three-axis magnetometer driver

mod driver;
pub mod registers;

pub use driver::{Hmc5883l, Hmc5883lConfig};
