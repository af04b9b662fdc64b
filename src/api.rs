//! Endpoints, payloads and response shapes of the Sem Parar customer API.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::{Credentials, DEFAULT_BASE_URL};
use crate::invoice::InvoiceNumber;

/// Headers sent with every request
pub const JSON_HEADERS: &[(&str, &str)] = &[("content-type", "application/json;charset=UTF-8")];

/// Invoice items returned per page
pub const PAGE_SIZE: u32 = 10;

/// `statusItemFaturamento` value selecting items of the open invoice
const OPEN_INVOICE_STATUS: u32 = 4;

/// Client type sent on login (individual customer)
const CLIENT_TYPE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub login: String,
    pub invoice_summary: String,
    pub invoice: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            login: format!("{base}/login"),
            invoice_summary: format!("{base}/faturaResumido"),
            invoice: format!("{base}/movimentacaoCliente"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Which invoice a page request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceFilter {
    /// The open invoice still accumulating charges
    Open,
    /// A closed invoice by its number
    Number(InvoiceNumber),
}

pub fn login_payload(credentials: &Credentials) -> Value {
    json!({
        "login": credentials.cpf,
        "senha": credentials.password(),
        "nome": "",
        "tipoCliente": CLIENT_TYPE,
    })
}

pub fn invoice_summary_payload() -> Value {
    json!({})
}

/// Body for page `page` (1-based) of the invoice item listing
pub fn invoice_page_payload(filter: &InvoiceFilter, page: u32) -> Value {
    let (status, number) = match filter {
        InvoiceFilter::Open => (Some(OPEN_INVOICE_STATUS), None),
        InvoiceFilter::Number(number) => (None, Some(number)),
    };
    json!({
        "tipoUso": null,
        "statusItemFaturamento": status,
        "quantidade": PAGE_SIZE,
        "indice": page,
        "codigoFatura": number,
        "dataInicialUnix": null,
        "dataFinalUnix": null,
        "placaVeiculo": null,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(deserialize_with = "text")]
    pub usuario: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub celular: String,
    #[serde(deserialize_with = "text")]
    pub codigo_cliente: String,
    #[serde(deserialize_with = "count")]
    pub quantidade_veiculos: u32,
    #[serde(deserialize_with = "flag")]
    pub bloqueado: bool,
    pub dados_financeiros: FinancialData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    #[serde(deserialize_with = "text")]
    pub dia_vencimento_conta: String,
    pub conta_corrente: CheckingAccount,
    pub endereco: Address,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckingAccount {
    pub banco: Bank,
    #[serde(deserialize_with = "text")]
    pub nome_agencia: String,
    #[serde(deserialize_with = "text")]
    pub identificador_agencia: String,
    #[serde(deserialize_with = "text")]
    pub numero_conta: String,
    #[serde(deserialize_with = "text")]
    pub digito: String,
}

#[derive(Debug, Deserialize)]
pub struct Bank {
    #[serde(deserialize_with = "text")]
    pub nome: String,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    #[serde(deserialize_with = "text")]
    pub cidade: String,
    #[serde(deserialize_with = "text")]
    pub estado: String,
    #[serde(deserialize_with = "text")]
    pub logradouro: String,
    #[serde(deserialize_with = "text")]
    pub numero: String,
    #[serde(deserialize_with = "text")]
    pub bairro: String,
    #[serde(deserialize_with = "text")]
    pub cep: String,
}

/// One entry of the invoice summary, oldest first
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummaryEntry {
    /// Required key; `null` means no invoice for that month
    #[serde(deserialize_with = "nullable")]
    pub numero_fatura: Option<InvoiceNumber>,
}

/// One page of the invoice item listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePage {
    pub item_faturas: Vec<InvoiceItemEntry>,
}

impl InvoicePage {
    pub fn is_empty(&self) -> bool {
        self.item_faturas.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemEntry {
    #[serde(deserialize_with = "text")]
    pub descricao_item_fatura: String,
    #[serde(deserialize_with = "text")]
    pub nome_ponto_uso: String,
    #[serde(deserialize_with = "text")]
    pub nome_praca: String,
    pub valor_bruto_fatura: Decimal,
    #[serde(default)]
    pub modelo_veiculo: Option<String>,
    #[serde(default)]
    pub placa_veiculo: Option<String>,
}

/// The service is loose about scalars: identifiers and codes show up as
/// strings in one payload and numbers in the next.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Leaf text field; `null` reads as empty
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
    })
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Scalar::Text(s)) => s.trim().parse().map_err(de::Error::custom),
        Some(Scalar::Integer(n)) => u32::try_from(n).map_err(de::Error::custom),
        Some(Scalar::Float(n)) => Err(de::Error::custom(format!("expected a count, got {n}"))),
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like a plain `Option` field, but the key itself must be present.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
