pub mod domain;
pub mod repository;
pub mod service;

pub use domain::ModeloInput;
pub use repository::{ModeloRepository, SeaOrmModeloRepository};
pub use service::ModeloService;

pub const ENTITY: &str = "Modelo";
