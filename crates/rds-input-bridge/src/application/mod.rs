//! Application layer: the inject-input use case.

pub mod inject_service;

pub use inject_service::{InjectError, InjectInputUseCase, ServiceError, WindowInjector};
