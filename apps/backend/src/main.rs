use actix_web::{web, App, HttpServer};
use wordle_backend::config::db::redact_url;
use wordle_backend::config::WordleConfig;
use wordle_backend::infra::state::build_state;
use wordle_backend::middleware::request_trace::RequestTrace;
use wordle_backend::middleware::structured_logger::StructuredLogger;
use wordle_backend::middleware::trace_span::TraceSpan;
use wordle_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let config = match WordleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Wordle Backend on http://{}:{} (word_length={}, max_attempts={})",
        host, port, config.word_length, config.max_attempts
    );

    let app_state = match build_state()
        .with_db(config.db_profile())
        .with_config(config.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database ready at {}", redact_url(&config.store_url));

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
