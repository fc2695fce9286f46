pub mod domain;
pub mod repository;
pub mod service;

pub use domain::PecaInput;
pub use repository::{PecaRepository, SeaOrmPecaRepository};
pub use service::PecaService;

/// Type name used in error messages.
pub const ENTITY: &str = "Peca";
