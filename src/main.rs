mod config;
mod setup;

use actix_cors::Cors;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::AppSchema;
use services::authentication::Token;
use tracing_actix_web::TracingLogger;

use config::{AppConfig, LogFormat};
use setup::set_up_db;

async fn index() -> &'static str {
    "Hello, verso!"
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(
    schema: web::Data<AppSchema>,
    http: HttpRequest,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(token) = http
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
    {
        request = request.data(Token::new(token.to_string()));
    }
    schema.execute(request).await.into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(AppConfig::log_format());

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return Err(e);
        }
    };

    let db = match set_up_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "database setup failed");
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    let schema = graphql::build_schema(db, config.auth.clone(), config.content.clone());

    tracing::info!("Starting verso on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(schema.clone()))
            .route("/", web::get().to(index))
            .service(
                web::resource("/graphql")
                    .route(web::post().to(graphql_request))
                    .route(web::get().to(graphql_playground)),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,verso=debug,repositories=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
