//! Loosely-typed form payload accepted at the edge of the calculator.
//!
//! Form fields arrive as numbers, numeric strings, blanks or nothing at all. Everything that is
//! not a usable number becomes `0` here so the calculator only ever sees `f64`s.

use super::inputs::{
    AnnualOption, BusinessInputs, DownsellOffer, LeverSet, SloOffer, UpsellLadder,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInputsSnapshot {
    #[serde(deserialize_with = "coerce_number")]
    pub ad_spend: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub leads: f64,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cpl: Option<f64>,
    #[serde(rename = "currentCAC", deserialize_with = "coerce_number")]
    pub current_cac: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub cold_traffic_conversion: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub core_offer_price: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub core_offer_conversion: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub day1_gross_profit_per_customer: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub gross_margin_percent: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub monthly_churn_percent: f64,
    #[serde(deserialize_with = "coerce_number")]
    pub refund_rate_percent: f64,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_lifetime_months: Option<f64>,

    #[serde(rename = "hasSLO")]
    pub has_slo: bool,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub slo_price: Option<f64>,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub slo_take_rate: Option<f64>,

    pub has_upsells: bool,
    #[serde(
        deserialize_with = "coerce_optional_numbers",
        skip_serializing_if = "Option::is_none"
    )]
    pub upsell_prices: Option<Vec<f64>>,
    #[serde(
        deserialize_with = "coerce_optional_numbers",
        skip_serializing_if = "Option::is_none"
    )]
    pub upsell_take_rates: Option<Vec<f64>>,

    pub has_annual_option: bool,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_price: Option<f64>,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_attach_rate: Option<f64>,

    pub has_downsell: bool,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub downsell_price: Option<f64>,
    #[serde(
        deserialize_with = "coerce_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub downsell_take_rate: Option<f64>,
}

impl BusinessInputsSnapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn into_inputs(self) -> BusinessInputs {
        self.into()
    }
}

impl From<BusinessInputsSnapshot> for BusinessInputs {
    fn from(snapshot: BusinessInputsSnapshot) -> Self {
        let slo = snapshot.has_slo.then(|| SloOffer {
            price: snapshot.slo_price,
            take_rate: snapshot.slo_take_rate,
        });
        let upsells = snapshot.has_upsells.then(|| UpsellLadder {
            prices: snapshot.upsell_prices,
            take_rates: snapshot.upsell_take_rates,
        });
        let annual = snapshot.has_annual_option.then(|| AnnualOption {
            price: snapshot.annual_price,
            attach_rate: snapshot.annual_attach_rate,
        });
        let downsell = snapshot.has_downsell.then(|| DownsellOffer {
            price: snapshot.downsell_price,
            take_rate: snapshot.downsell_take_rate,
        });

        BusinessInputs {
            ad_spend: snapshot.ad_spend,
            leads: snapshot.leads,
            cost_per_lead: snapshot.cpl,
            current_cac: snapshot.current_cac,
            cold_traffic_conversion: snapshot.cold_traffic_conversion,
            core_offer_price: snapshot.core_offer_price,
            core_offer_conversion: snapshot.core_offer_conversion,
            day1_gross_profit_per_customer: snapshot.day1_gross_profit_per_customer,
            gross_margin_percent: snapshot.gross_margin_percent,
            monthly_churn_percent: snapshot.monthly_churn_percent,
            refund_rate_percent: snapshot.refund_rate_percent,
            average_lifetime_months: snapshot.average_lifetime_months,
            levers: LeverSet {
                slo,
                upsells,
                annual,
                downsell,
            },
        }
    }
}

impl From<&BusinessInputs> for BusinessInputsSnapshot {
    fn from(inputs: &BusinessInputs) -> Self {
        let levers = &inputs.levers;
        Self {
            ad_spend: inputs.ad_spend,
            leads: inputs.leads,
            cpl: inputs.cost_per_lead,
            current_cac: inputs.current_cac,
            cold_traffic_conversion: inputs.cold_traffic_conversion,
            core_offer_price: inputs.core_offer_price,
            core_offer_conversion: inputs.core_offer_conversion,
            day1_gross_profit_per_customer: inputs.day1_gross_profit_per_customer,
            gross_margin_percent: inputs.gross_margin_percent,
            monthly_churn_percent: inputs.monthly_churn_percent,
            refund_rate_percent: inputs.refund_rate_percent,
            average_lifetime_months: inputs.average_lifetime_months,
            has_slo: levers.slo.is_some(),
            slo_price: levers.slo.as_ref().and_then(|slo| slo.price),
            slo_take_rate: levers.slo.as_ref().and_then(|slo| slo.take_rate),
            has_upsells: levers.upsells.is_some(),
            upsell_prices: levers
                .upsells
                .as_ref()
                .and_then(|ladder| ladder.prices.clone()),
            upsell_take_rates: levers
                .upsells
                .as_ref()
                .and_then(|ladder| ladder.take_rates.clone()),
            has_annual_option: levers.annual.is_some(),
            annual_price: levers.annual.as_ref().and_then(|annual| annual.price),
            annual_attach_rate: levers.annual.as_ref().and_then(|annual| annual.attach_rate),
            has_downsell: levers.downsell.is_some(),
            downsell_price: levers.downsell.as_ref().and_then(|offer| offer.price),
            downsell_take_rate: levers.downsell.as_ref().and_then(|offer| offer.take_rate),
        }
    }
}

/// Failure to read a snapshot document.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read input snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("input snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Numbers, or the leading decimal literal of a string; anything else is `0`.
///
/// Strings are read the way a browser reads a form field, so `"97%"` is `97` and `"1,000"` is
/// `1`. Non-finite results, including `"Infinity"` and overflowing exponents, become `0`.
pub(crate) fn coerce_value(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => numeric_prefix(raw),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    match number {
        Some(number) if number.is_finite() && number != 0.0 => number,
        _ => 0.0,
    }
}

/// Longest prefix of `raw` (after leading whitespace) that forms a decimal literal.
fn numeric_prefix(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole_digits = count_digits(&bytes[end..]);
    end += whole_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if whole_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if whole_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

fn coerce_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_value(&value))
}

fn coerce_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_value))
}

fn coerce_optional_numbers<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        Value::Array(items) => items.iter().map(coerce_value).collect(),
        scalar => vec![coerce_value(&scalar)],
    }))
}
