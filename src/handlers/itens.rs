// src/handlers/itens.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    models::item::{AlteracoesItem, CATEGORIAS_SUGERIDAS},
};

// ---
// Validação Customizada
// ---
fn validar_nao_vazio(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        let mut err = ValidationError::new("obrigatorio");
        err.message = Some("O campo não pode ser vazio.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Coerção permissiva dos campos de atualização
// ---

// Aceita número JSON, string numérica (com espaços ao redor) e booleano.
// Qualquer outra coisa é um erro 400 distinto das falhas de persistência.
fn coagir_f64(valor: &Value) -> Result<f64, AppError> {
    match valor {
        Value::Number(n) => n.as_f64().ok_or(AppError::ValoresNumericosInvalidos),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::ValoresNumericosInvalidos),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        _ => Err(AppError::ValoresNumericosInvalidos),
    }
}

// Coerção por veracidade: nunca falha, qualquer valor JSON tem um booleano
fn coagir_bool(valor: &Value) -> bool {
    match valor {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

// ---
// Payload: CriarItemPayload
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct CriarItemPayload {
    #[validate(required, custom(function = "validar_nao_vazio"))]
    pub nome: Option<String>,

    #[validate(required, custom(function = "validar_nao_vazio"))]
    pub categoria: Option<String>,
}

// Mantém a distinção entre campo ausente (None) e `null` explícito
// (Some(Value::Null)), que o Option puro do serde perderia.
fn campo_presente<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ---
// Payload: AtualizarItemPayload
// ---
// Os campos numéricos e o status chegam como Value cru para permitir a
// coerção permissiva; campos desconhecidos extras são tolerados.
#[derive(Debug, Deserialize)]
pub struct AtualizarItemPayload {
    pub nome: Option<String>,
    pub categoria: Option<String>,

    #[serde(default, deserialize_with = "campo_presente")]
    pub quantidade: Option<Value>,

    #[serde(default, deserialize_with = "campo_presente")]
    pub valor_unitario: Option<Value>,

    #[serde(default, deserialize_with = "campo_presente")]
    pub comprado: Option<Value>,

    #[serde(flatten)]
    extras: serde_json::Map<String, Value>,
}

impl AtualizarItemPayload {
    fn sem_dados(&self) -> bool {
        self.nome.is_none()
            && self.categoria.is_none()
            && self.quantidade.is_none()
            && self.valor_unitario.is_none()
            && self.comprado.is_none()
            && self.extras.is_empty()
    }

    fn em_alteracoes(self) -> Result<AlteracoesItem, AppError> {
        Ok(AlteracoesItem {
            nome: self.nome,
            categoria: self.categoria,
            quantidade: self.quantidade.as_ref().map(coagir_f64).transpose()?,
            valor_unitario: self.valor_unitario.as_ref().map(coagir_f64).transpose()?,
            comprado: self.comprado.as_ref().map(|v| coagir_bool(v)),
        })
    }
}

// ---
// Handler: listar_itens (GET /itens)
// ---
pub async fn listar_itens(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let itens = app_state.item_service.listar_itens().await?;

    let records: Vec<_> = itens.iter().map(|item| item.to_record()).collect();
    Ok((StatusCode::OK, Json(records)))
}

// ---
// Handler: adicionar_item (POST /itens)
// ---
pub async fn adicionar_item(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::CamposObrigatorios)?;

    // `required` acima garante os Some
    let nome = payload.nome.as_deref().unwrap_or_default();
    let categoria = payload.categoria.as_deref().unwrap_or_default();

    let novo_item = app_state.item_service.criar_item(nome, categoria).await?;

    Ok((StatusCode::CREATED, Json(novo_item.to_record())))
}

// ---
// Handler: atualizar_item (PUT /itens/{id})
// ---
pub async fn atualizar_item(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    if payload.sem_dados() {
        return Err(AppError::DadosNaoFornecidos);
    }

    let alteracoes = payload.em_alteracoes()?;
    let item = app_state.item_service.atualizar_item(id, alteracoes).await?;

    Ok((StatusCode::OK, Json(item.to_record())))
}

// ---
// Handler: deletar_item (DELETE /itens/{id})
// ---
pub async fn deletar_item(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.item_service.remover_item(id).await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "mensagem": "Item removido com sucesso" })),
    ))
}

// ---
// Handler: listar_categorias (GET /categorias)
// ---
pub async fn listar_categorias() -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(CATEGORIAS_SUGERIDAS)))
}

// ---
// Handler: resumo_compras (GET /resumo)
// ---
pub async fn resumo_compras(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resumo = app_state.item_service.resumo_compras().await?;

    Ok((StatusCode::OK, Json(resumo)))
}

// ---
// Handler: limpar_lista (DELETE /limpar)
// ---
pub async fn limpar_lista(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app_state.item_service.limpar_lista().await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "mensagem": "Lista limpa com sucesso" })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coagir_f64_aceita_numeros_e_strings_numericas() {
        assert_eq!(coagir_f64(&json!(2.5)).unwrap(), 2.5);
        assert_eq!(coagir_f64(&json!(0)).unwrap(), 0.0);
        assert_eq!(coagir_f64(&json!(-3)).unwrap(), -3.0);
        assert_eq!(coagir_f64(&json!("4.5")).unwrap(), 4.5);
        assert_eq!(coagir_f64(&json!("  7 ")).unwrap(), 7.0);
        assert_eq!(coagir_f64(&json!(true)).unwrap(), 1.0);
    }

    #[test]
    fn coagir_f64_rejeita_valores_nao_numericos() {
        assert!(matches!(
            coagir_f64(&json!("abc")),
            Err(AppError::ValoresNumericosInvalidos)
        ));
        assert!(matches!(
            coagir_f64(&json!(null)),
            Err(AppError::ValoresNumericosInvalidos)
        ));
        assert!(matches!(
            coagir_f64(&json!([1, 2])),
            Err(AppError::ValoresNumericosInvalidos)
        ));
    }

    #[test]
    fn coagir_bool_por_veracidade() {
        assert!(coagir_bool(&json!(true)));
        assert!(!coagir_bool(&json!(false)));
        assert!(!coagir_bool(&json!(null)));
        assert!(coagir_bool(&json!(1)));
        assert!(!coagir_bool(&json!(0)));
        assert!(coagir_bool(&json!("sim")));
        assert!(!coagir_bool(&json!("")));
        assert!(!coagir_bool(&json!([])));
        assert!(coagir_bool(&json!({ "x": 1 })));
    }

    #[test]
    fn criar_payload_exige_nome_e_categoria_apos_trim() {
        let ok: CriarItemPayload =
            serde_json::from_value(json!({ "nome": " Leite ", "categoria": "Laticínios" }))
                .unwrap();
        assert!(ok.validate().is_ok());

        let vazio: CriarItemPayload =
            serde_json::from_value(json!({ "nome": "", "categoria": "Bebidas" })).unwrap();
        assert!(vazio.validate().is_err());

        let so_espacos: CriarItemPayload =
            serde_json::from_value(json!({ "nome": "   ", "categoria": "Bebidas" })).unwrap();
        assert!(so_espacos.validate().is_err());

        let faltando: CriarItemPayload =
            serde_json::from_value(json!({ "nome": "Leite" })).unwrap();
        assert!(faltando.validate().is_err());
    }

    #[test]
    fn atualizar_payload_detecta_corpo_vazio() {
        let vazio: AtualizarItemPayload = serde_json::from_value(json!({})).unwrap();
        assert!(vazio.sem_dados());

        // Campos desconhecidos contam como dados, como no comportamento original
        let extra: AtualizarItemPayload =
            serde_json::from_value(json!({ "outro_campo": 1 })).unwrap();
        assert!(!extra.sem_dados());

        let parcial: AtualizarItemPayload =
            serde_json::from_value(json!({ "comprado": true })).unwrap();
        assert!(!parcial.sem_dados());
    }

    #[test]
    fn em_alteracoes_coage_apenas_campos_presentes() {
        let payload: AtualizarItemPayload =
            serde_json::from_value(json!({ "quantidade": "2", "comprado": 1 })).unwrap();
        let alteracoes = payload.em_alteracoes().unwrap();

        assert_eq!(alteracoes.quantidade, Some(2.0));
        assert_eq!(alteracoes.comprado, Some(true));
        assert_eq!(alteracoes.valor_unitario, None);
        assert_eq!(alteracoes.nome, None);
        assert_eq!(alteracoes.categoria, None);
    }

    #[test]
    fn null_explicito_conta_como_dado_e_vira_false() {
        // {"comprado": null} não é corpo vazio: o campo está presente
        let payload: AtualizarItemPayload =
            serde_json::from_value(json!({ "comprado": null })).unwrap();
        assert!(!payload.sem_dados());

        let alteracoes = payload.em_alteracoes().unwrap();
        assert_eq!(alteracoes.comprado, Some(false));
    }

    #[test]
    fn null_em_campo_numerico_eh_erro_de_coercao() {
        let payload: AtualizarItemPayload =
            serde_json::from_value(json!({ "quantidade": null })).unwrap();
        assert!(!payload.sem_dados());
        assert!(matches!(
            payload.em_alteracoes(),
            Err(AppError::ValoresNumericosInvalidos)
        ));
    }

    #[test]
    fn em_alteracoes_propaga_erro_de_coercao() {
        let payload: AtualizarItemPayload =
            serde_json::from_value(json!({ "quantidade": "abc" })).unwrap();
        assert!(matches!(
            payload.em_alteracoes(),
            Err(AppError::ValoresNumericosInvalidos)
        ));
    }
}
