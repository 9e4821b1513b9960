use crate::cli::{review_id, Cli, Command, Decision};
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::{now_unix, App};
use astra::{Request, Server};
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod cli;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod requests;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration rejected: {e}");
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or_default() {
        Command::Serve => serve(config),
        Command::ReviewId { email, decision } => review(config, &email, decision),
    }
}

fn review(config: AppConfig, email: &str, decision: Decision) {
    let db = Database::new(config.db_path);
    let outcome = init_db(&db).and_then(|()| review_id(&db, email, decision, now_unix()));

    match outcome {
        Ok(status) => info!(email, %status, "id card review recorded"),
        Err(e) => {
            error!("review failed: {e}");
            std::process::exit(1);
        }
    }
}

fn serve(config: AppConfig) {
    let app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = app.config.addr;
    info!(
        %addr,
        workers = app.config.max_workers,
        listings = app.catalog.records().len(),
        auth = app.config.auth_enabled,
        "starting HomeFinder"
    );

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => html_error_response(err),
        };

        info!(
            %method,
            path = %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
