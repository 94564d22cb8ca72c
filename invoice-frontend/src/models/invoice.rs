//! Invoice records exchanged with the invoice API.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Backend-assigned identifier. The API may return numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceId {
    Number(i64),
    Text(String),
}

impl InvoiceId {
    /// Whether this id renders to the given path segment.
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            InvoiceId::Number(n) => segment.parse::<i64>().is_ok_and(|s| s == *n),
            InvoiceId::Text(s) => s == segment,
        }
    }

    /// The id as a single percent-encoded URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.to_string()).into_owned()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceId::Number(n) => write!(f, "{}", n),
            InvoiceId::Text(s) => f.write_str(s),
        }
    }
}

/// Invoice as returned by the backend.
///
/// `tax` and `total` are whatever the backend computed; the client never
/// treats them as authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InvoiceId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice_no: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub surat_jalan_no: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(default)]
    pub tax: Option<Decimal>,
    #[serde(default)]
    pub total: Option<Decimal>,
}

/// Body of `POST /api/invoices`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateInvoiceRequest {
    pub invoice_no: String,
    pub customer: String,
    pub item_name: String,
    pub surat_jalan_no: String,
    pub quantity: i64,
    #[serde(serialize_with = "decimal_as_number")]
    pub price: Decimal,
}

/// Body of `PUT /api/invoices/{id}`. The invoice number is immutable and
/// never sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateInvoiceRequest {
    pub customer: String,
    pub item_name: String,
    pub surat_jalan_no: String,
    pub quantity: i64,
    #[serde(serialize_with = "decimal_as_number")]
    pub price: Decimal,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Encode a decimal as a JSON number: integral values as integers, others as
/// floats.
fn decimal_as_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => serializer.serialize_str(&value.to_string()),
    }
}
