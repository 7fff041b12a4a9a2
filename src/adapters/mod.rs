//! Adapters. Infrastructure implementations of the ports.

pub mod ai;
pub mod fs;
pub mod ui;
