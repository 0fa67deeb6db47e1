use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::{
    errors::CustomError,
    models::api_response::success_response,
    services::{
        balance_service::BalanceService, detail_resolver::BalanceKey,
        hidden_filter::HiddenTokens,
    },
};

#[derive(Deserialize)]
pub struct BalancesQuery {
    /// Comma separated display names, e.g. `USD Coin( USDC ),Tether( USDT )`.
    hidden: Option<String>,
}

#[get("/wallets/{address}/balances")]
async fn get_balances(
    service: web::Data<BalanceService>,
    address: web::Path<String>,
    query: web::Query<BalancesQuery>,
) -> Result<HttpResponse, CustomError> {
    let hidden = HiddenTokens::from_query(query.hidden.as_deref());
    let balances = service.list_balances(&address, &hidden).await?;
    Ok(success_response(balances))
}

#[get("/wallets/{address}/balances/details")]
async fn get_balance_details(
    service: web::Data<BalanceService>,
    address: web::Path<String>,
    key: web::Query<BalanceKey>,
) -> Result<HttpResponse, CustomError> {
    let details = service.balance_details(&address, &key).await?;
    Ok(success_response(details))
}

#[get("/network")]
async fn get_network(service: web::Data<BalanceService>) -> HttpResponse {
    success_response(service.network())
}
