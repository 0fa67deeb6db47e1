use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

mod api;
mod config;
mod errors;
mod models;
mod services;

use services::{
    balance_service::BalanceService, explorer_client::ExplorerClient,
    network_config::get_network_config,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(to_io_error)?;

    let mut network = get_network_config(config.chain_id).map_err(to_io_error)?;
    if let Some(url) = &config.explorer_api_url {
        network.explorer_api_url = url.clone();
    }

    let client = ExplorerClient::new(&network.explorer_api_url, config.request_timeout)
        .map_err(to_io_error)?;

    info!(
        "Serving {} balances from {} on {}:{}",
        network.name, network.explorer_api_url, config.host, config.port
    );

    let service = web::Data::new(BalanceService::new(
        Arc::new(client),
        network,
        config.max_cached_accounts,
    ));
    let allowed_origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);

        App::new()
            .app_data(service.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn to_io_error(err: errors::CustomError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}
