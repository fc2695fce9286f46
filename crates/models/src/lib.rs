pub mod errors;
pub mod db;
pub mod peca;
pub mod modelo;
pub mod peca_feira;

#[cfg(test)]
mod tests;
