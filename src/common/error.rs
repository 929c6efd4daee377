use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens Display são exatamente o que a API devolve no campo "erro".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Nome e categoria são obrigatórios")]
    CamposObrigatorios,

    #[error("Dados não fornecidos")]
    DadosNaoFornecidos,

    #[error("Valores numéricos inválidos")]
    ValoresNumericosInvalidos,

    #[error("Item não encontrado")]
    ItemNaoEncontrado,

    // Variante para erros de banco de dados (sqlx)
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("{0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::CamposObrigatorios
            | AppError::DadosNaoFornecidos
            | AppError::ValoresNumericosInvalidos => StatusCode::BAD_REQUEST,

            AppError::ItemNaoEncontrado => StatusCode::NOT_FOUND,

            // Falhas de persistência e erros inesperados viram 500,
            // com o texto bruto do erro no corpo.
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                tracing::error!("Erro interno do servidor: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "erro": self.to_string() }));
        (status, body).into_response()
    }
}
