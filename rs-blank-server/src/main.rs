use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::info;

use rs_blank_core::AnswerSheet;

mod config;
mod routes;

use config::ServerConfig;
use routes::SharedData;

/// Main entry point for the server.
///
/// Reads the configuration from the environment, creates the shared answer
/// sheet behind a `Mutex` and starts an Actix-web HTTP server.
///
/// # Notes
/// - Logging goes through `env_logger`; `RUST_LOG` overrides the default `info` level.
/// - A bad `RS_BLANK_*` variable aborts startup with `InvalidInput`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env()
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	info!("starting on {}:{} with {} blanks", config.host, config.port, config.initial_blanks);

	let shared_data = SharedData {
		// Already clamped by the config parser.
		sheet: AnswerSheet::new(config.initial_blanks as i64),
	};
	let shared_sheet = web::Data::new(Mutex::new(shared_data));
	let allowed_origin = config.allowed_origin.clone();

	HttpServer::new(move || {
		let mut cors = Cors::default().allow_any_method().allow_any_header();
		if let Some(origin) = &allowed_origin {
			cors = cors.allowed_origin(origin);
		}

		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors)
			.app_data(shared_sheet.clone())
			.configure(routes::configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
