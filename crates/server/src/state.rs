use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    modelo::{ModeloService, SeaOrmModeloRepository},
    peca::{PecaService, SeaOrmPecaRepository},
    peca_feira::{PecaFeiraService, SeaOrmPecaFeiraRepository},
};

/// Shared handler state: one service per resource, all over the same pool.
#[derive(Clone)]
pub struct AppState {
    pub peca: Arc<PecaService<SeaOrmPecaRepository>>,
    pub peca_feira: Arc<PecaFeiraService<SeaOrmPecaFeiraRepository>>,
    pub modelo: Arc<ModeloService<SeaOrmModeloRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            peca: Arc::new(PecaService::new(Arc::new(SeaOrmPecaRepository { db: db.clone() }))),
            peca_feira: Arc::new(PecaFeiraService::new(Arc::new(SeaOrmPecaFeiraRepository { db: db.clone() }))),
            modelo: Arc::new(ModeloService::new(Arc::new(SeaOrmModeloRepository { db }))),
        }
    }
}
