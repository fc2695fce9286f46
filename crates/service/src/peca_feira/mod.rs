pub mod domain;
pub mod repository;
pub mod service;

pub use domain::PecaFeiraInput;
pub use repository::{PecaFeiraRepository, SeaOrmPecaFeiraRepository};
pub use service::PecaFeiraService;

pub const ENTITY: &str = "PecaFeira";
