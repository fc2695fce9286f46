/// Writable fields of a fair stock row. `deletado` is only changed by delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PecaFeiraInput {
    pub modelo_id: i32,
    pub quantidade: i32,
}
