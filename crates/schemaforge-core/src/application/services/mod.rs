//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a resource" or "register its routes".

pub mod generate_service;
pub mod register_service;

pub use generate_service::GenerateService;
pub use register_service::RegisterService;
