/// Writable fields of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeloInput {
    pub nome: String,
    pub peca_id: i32,
}
