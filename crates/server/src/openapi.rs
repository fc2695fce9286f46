use utoipa::OpenApi;

use crate::errors::ErrorBody;
use crate::routes::{
    modelo::{ModeloBody, ModeloView},
    peca::{PecaBody, PecaView},
    peca_feira::{PecaFeiraBody, PecaFeiraResumo},
    IdRef,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::peca::find,
        crate::routes::peca::find_all,
        crate::routes::peca::insert,
        crate::routes::peca::update,
        crate::routes::peca::delete,
        crate::routes::peca_feira::find,
        crate::routes::peca_feira::find_all,
        crate::routes::peca_feira::insert,
        crate::routes::peca_feira::update,
        crate::routes::peca_feira::delete,
        crate::routes::modelo::find,
        crate::routes::modelo::find_all,
        crate::routes::modelo::insert,
        crate::routes::modelo::delete,
    ),
    components(
        schemas(
            ErrorBody,
            IdRef,
            PecaBody,
            PecaView,
            PecaFeiraBody,
            PecaFeiraResumo,
            ModeloBody,
            ModeloView,
        )
    ),
    tags(
        (name = "health"),
        (name = "peca", description = "Catálogo de peças"),
        (name = "pecasfeira", description = "Estoque de peças da feira"),
        (name = "modelo", description = "Modelos de peças")
    )
)]
pub struct ApiDoc;
