use actix_web::web;

use crate::errors::CustomError;

mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::QueryConfig::default().error_handler(|err, _| {
                CustomError::ValidationError(err.to_string()).into()
            }))
            .service(handlers::get_balances)
            .service(handlers::get_balance_details)
            .service(handlers::get_network),
    );
}
