use actix_web::{HttpResponse, web};

use crate::exchange_rates::CurrencyRates;

#[derive(serde::Deserialize, Debug)]
pub struct ConvertQuery {
    amount: f64,
    currency: String,
}

#[derive(serde::Serialize)]
struct ConvertResponse {
    amount: f64,
    currency: String,
    amount_eur: f64,
}

/// Never fails on provider trouble: without a usable rate the amount comes
/// back unchanged.
#[tracing::instrument(name = "Converting amount to EUR", skip(rates))]
pub async fn convert_currency(
    query: web::Query<ConvertQuery>,
    rates: web::Data<CurrencyRates>,
) -> HttpResponse {
    let ConvertQuery { amount, currency } = query.into_inner();
    let amount_eur = rates.convert_to_eur(amount, &currency).await;

    HttpResponse::Ok().json(ConvertResponse {
        amount,
        currency: currency.to_uppercase(),
        amount_eur,
    })
}
