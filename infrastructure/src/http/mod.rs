//! HTTP adapter for the generation endpoint

mod gateway;

pub use gateway::HttpGenerationGateway;
