use crate::{common::error::AppError, models::item::Item};
use sqlx::PgPool;

// O repositório de itens, responsável por todas as interações com a tabela 'itens'
#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca todos os itens, na ordem natural do banco
    pub async fn listar_todos(&self) -> Result<Vec<Item>, AppError> {
        let itens = sqlx::query_as::<_, Item>("SELECT * FROM itens")
            .fetch_all(&self.pool)
            .await?;
        Ok(itens)
    }

    // Busca um item pelo seu ID
    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Item>, AppError> {
        let item = sqlx::query_as::<_, Item>("SELECT * FROM itens WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    // Insere um novo item; os campos numéricos, o status e as datas
    // ficam com os defaults definidos no schema
    pub async fn inserir(&self, nome: &str, categoria: &str) -> Result<Item, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO itens (nome, categoria) VALUES ($1, $2) RETURNING *",
        )
        .bind(nome)
        .bind(categoria)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    // Persiste o estado atual de um item, refrescando data_atualizacao
    pub async fn salvar(&self, item: &Item) -> Result<Item, AppError> {
        let atualizado = sqlx::query_as::<_, Item>(
            "UPDATE itens
             SET nome = $1, categoria = $2, quantidade = $3,
                 valor_unitario = $4, comprado = $5, data_atualizacao = NOW()
             WHERE id = $6
             RETURNING *",
        )
        .bind(&item.nome)
        .bind(&item.categoria)
        .bind(item.quantidade)
        .bind(item.valor_unitario)
        .bind(item.comprado)
        .bind(item.id)
        .fetch_one(&self.pool)
        .await?;
        Ok(atualizado)
    }

    // Remove um item pelo seu ID
    pub async fn deletar(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM itens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // Remove todos os itens da lista
    pub async fn limpar(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM itens").execute(&self.pool).await?;
        Ok(())
    }
}
