//! Primitive Components
//!
//! Basic building blocks like buttons and steppers.

pub mod button;
pub mod checkbox;
pub mod stepper;
