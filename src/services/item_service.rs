// src/services/item_service.rs

use crate::{
    common::error::AppError,
    db::ItemRepository,
    models::item::{AlteracoesItem, Item, Resumo},
};

#[derive(Clone)]
pub struct ItemService {
    item_repo: ItemRepository,
}

impl ItemService {
    pub fn new(item_repo: ItemRepository) -> Self {
        Self { item_repo }
    }

    pub async fn listar_itens(&self) -> Result<Vec<Item>, AppError> {
        self.item_repo.listar_todos().await
    }

    // Cria um item com os campos obrigatórios já validados pelo handler.
    // Quantidade, valor e status ficam nos defaults.
    pub async fn criar_item(&self, nome: &str, categoria: &str) -> Result<Item, AppError> {
        self.item_repo.inserir(nome.trim(), categoria.trim()).await
    }

    // Atualização parcial: só os campos presentes nas alterações são tocados.
    // data_atualizacao é refrescada pelo repositório a cada persistência.
    pub async fn atualizar_item(
        &self,
        id: i32,
        alteracoes: AlteracoesItem,
    ) -> Result<Item, AppError> {
        let mut item = self
            .item_repo
            .buscar_por_id(id)
            .await?
            .ok_or(AppError::ItemNaoEncontrado)?;

        if let Some(nome) = alteracoes.nome {
            item.nome = nome.trim().to_string();
        }
        if let Some(categoria) = alteracoes.categoria {
            item.categoria = categoria.trim().to_string();
        }
        if let Some(quantidade) = alteracoes.quantidade {
            item.quantidade = quantidade;
        }
        if let Some(valor_unitario) = alteracoes.valor_unitario {
            item.valor_unitario = valor_unitario;
        }
        if let Some(comprado) = alteracoes.comprado {
            item.comprado = comprado;
        }

        self.item_repo.salvar(&item).await
    }

    pub async fn remover_item(&self, id: i32) -> Result<(), AppError> {
        // get_or_404: a remoção de um ID inexistente é um erro do cliente
        self.item_repo
            .buscar_por_id(id)
            .await?
            .ok_or(AppError::ItemNaoEncontrado)?;

        self.item_repo.deletar(id).await
    }

    pub async fn resumo_compras(&self) -> Result<Resumo, AppError> {
        let itens = self.item_repo.listar_todos().await?;
        Ok(Resumo::calcular(&itens))
    }

    pub async fn limpar_lista(&self) -> Result<(), AppError> {
        self.item_repo.limpar().await
    }
}
