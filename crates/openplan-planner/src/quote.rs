//! Quote estimate issued once a layout is free of placement issues.

use crate::item::Package;
use chrono::{DateTime, Days, NaiveDate, Utc};
use openplan_settings::QuoteSettings;
use serde::{Deserialize, Serialize};

/// Cost breakdown for delivering and installing a package (KRW).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEstimate {
    pub id: String,
    pub package_id: String,
    pub package_name: String,
    pub items_cost: u64,
    pub logistics_cost: u64,
    pub installation_cost: u64,
    pub options_cost: u64,
    pub discount_amount: u64,
    pub subtotal: u64,
    pub vat: u64,
    pub total_cost: u64,
    /// Due on booking
    pub deposit: u64,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
    pub grade: String,
    pub warranty_period: String,
    #[serde(rename = "has3D")]
    pub has_3d: bool,
    pub consulting_included: bool,
}

/// Rounds a won amount half-up to a whole won.
fn round_krw(amount: f64) -> u64 {
    amount.max(0.0).round() as u64
}

impl QuoteEstimate {
    /// Prices `package` with the configured base costs and rates, dated `now`.
    pub fn build(package: &Package, settings: &QuoteSettings, now: DateTime<Utc>) -> Self {
        let items_cost = package.total_price;
        let logistics_cost = settings.logistics_base_cost;
        let installation_cost = settings.installation_base_cost;
        let options_cost = 0;
        let discount_amount = 0;

        let subtotal = (items_cost + logistics_cost + installation_cost + options_cost)
            .saturating_sub(discount_amount);
        let vat = round_krw(subtotal as f64 * settings.vat_rate);
        let total_cost = subtotal + vat;
        let deposit = round_krw(total_cost as f64 * settings.deposit_rate);

        let issued_on = now.date_naive();
        let valid_until = issued_on + Days::new(u64::from(settings.validity_days));

        Self {
            id: format!("QT-{:06}", now.timestamp_millis().rem_euclid(1_000_000)),
            package_id: package.id.clone(),
            package_name: package.name.clone(),
            items_cost,
            logistics_cost,
            installation_cost,
            options_cost,
            discount_amount,
            subtotal,
            vat,
            total_cost,
            deposit,
            issued_on,
            valid_until,
            grade: package
                .grade
                .clone()
                .unwrap_or_else(|| settings.default_grade.clone()),
            warranty_period: package
                .warranty
                .clone()
                .unwrap_or_else(|| settings.default_warranty.clone()),
            has_3d: package.has_3d,
            consulting_included: false,
        }
    }
}
