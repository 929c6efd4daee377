// src/models/item.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

// Categorias mais comuns para lista de compras.
// Lista apenas sugestiva: a categoria do item continua sendo texto livre.
pub const CATEGORIAS_SUGERIDAS: [&str; 10] = [
    "Frutas e Verduras",
    "Carnes e Peixes",
    "Laticínios",
    "Padaria",
    "Bebidas",
    "Limpeza",
    "Higiene",
    "Congelados",
    "Enlatados",
    "Outros",
];

// Um item da lista de compras, espelhando a tabela 'itens'.
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i32,
    pub nome: String,
    pub categoria: String,
    pub quantidade: f64,
    pub valor_unitario: f64,
    pub comprado: bool,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

impl Item {
    /// Valor total do item (quantidade × valor unitário).
    /// Sempre derivado do estado atual, nunca armazenado.
    pub fn valor_total(&self) -> f64 {
        self.quantidade * self.valor_unitario
    }

    /// Converte o item para o formato de resposta da API,
    /// com o valor_total calculado e datas em ISO-8601.
    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            id: self.id,
            nome: self.nome.clone(),
            categoria: self.categoria.clone(),
            quantidade: self.quantidade,
            valor_unitario: self.valor_unitario,
            valor_total: self.valor_total(),
            comprado: self.comprado,
            data_criacao: self.data_criacao,
            data_atualizacao: self.data_atualizacao,
        }
    }
}

// O formato exato devolvido pela API para um item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemRecord {
    pub id: i32,
    pub nome: String,
    pub categoria: String,
    pub quantidade: f64,
    pub valor_unitario: f64,
    pub valor_total: f64,
    pub comprado: bool,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

// Alterações parciais aplicáveis a um item (PUT).
// Campos ausentes no corpo da requisição ficam como None e não são tocados.
#[derive(Debug, Clone, Default)]
pub struct AlteracoesItem {
    pub nome: Option<String>,
    pub categoria: Option<String>,
    pub quantidade: Option<f64>,
    pub valor_unitario: Option<f64>,
    pub comprado: Option<bool>,
}

// Resumo agregado das compras (GET /resumo).
#[derive(Debug, Serialize)]
pub struct Resumo {
    pub total_geral: f64,
    pub total_comprados: f64,
    pub itens_comprados: usize,
    pub total_itens: usize,
    pub percentual_comprado: f64,
}

impl Resumo {
    /// Agrega os totais sobre todos os itens da lista.
    pub fn calcular(itens: &[Item]) -> Self {
        let total_geral: f64 = itens.iter().map(Item::valor_total).sum();
        let total_comprados: f64 = itens
            .iter()
            .filter(|item| item.comprado)
            .map(Item::valor_total)
            .sum();
        let itens_comprados = itens.iter().filter(|item| item.comprado).count();
        let total_itens = itens.len();

        let percentual_comprado = if total_itens > 0 {
            itens_comprados as f64 / total_itens as f64 * 100.0
        } else {
            0.0
        };

        Resumo {
            total_geral,
            total_comprados,
            itens_comprados,
            total_itens,
            percentual_comprado,
        }
    }
}
