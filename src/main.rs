//src/main.rs

use axum::{
    Router,
    routing::{delete, get, put},
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // CORS liberado: qualquer origem pode consumir a API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    // Rotas da lista de compras
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/itens",
            get(handlers::itens::listar_itens).post(handlers::itens::adicionar_item),
        )
        .route(
            "/itens/{id}",
            put(handlers::itens::atualizar_item).delete(handlers::itens::deletar_item),
        )
        .route("/categorias", get(handlers::itens::listar_categorias))
        .route("/resumo", get(handlers::itens::resumo_compras))
        .route("/limpar", delete(handlers::itens::limpar_lista))
        .layer(cors)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
