//! Service layer providing business-oriented CRUD operations on top of models.
//! - One repository trait per entity, with a SeaORM implementation.
//! - Services add existence checks and update-by-id semantics.
//! - Errors are classified here so the HTTP layer can translate them once.

pub mod errors;
pub mod peca;
pub mod modelo;
pub mod peca_feira;
#[cfg(test)]
pub mod test_support;
