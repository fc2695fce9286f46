/// Writable fields of a part; the id always comes from the path or the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PecaInput {
    pub nome: String,
    pub tamanho: i32,
}
