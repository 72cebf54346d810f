//! Result views shown in the tabbed interface.

pub mod tab;
