//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod clipboard;
pub mod generation_gateway;
pub mod page;
pub mod renderer;
pub mod submission_logger;
pub mod tab_widget;
