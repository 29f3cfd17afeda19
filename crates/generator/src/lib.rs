//! HTTP client for the external boilerplate generator service.
//!
//! The generator is an opaque collaborator: one `POST` with the requested
//! configuration, one JSON response carrying the produced artifact record.
//! [`GeneratorClient`] owns the connection settings (base URL, timeout,
//! retry budget) and is shared across requests via the API state.

pub mod client;

pub use client::{GenerateRequest, GeneratedProject, GeneratorClient, GeneratorError};
