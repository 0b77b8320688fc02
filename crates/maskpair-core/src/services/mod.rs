//! Core services.
//!
//! Services are thin orchestrators over ports. Adapters construct them at
//! their composition root with concrete repository implementations.

mod image_pair_service;

pub use image_pair_service::ImagePairService;
