#![recursion_limit = "256"]

use app::{component, shell};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "landing",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Routes served next to the Leptos pages.
fn support_routes() -> Router<LeptosOptions> {
    Router::new().route("/health", get(health_handler))
}

const fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);
    let pkg_dir = format!(
        "{}/{}",
        leptos_options.site_root, leptos_options.site_pkg_dir
    );

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .merge(support_routes())
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new().compress_when(
                    NotForContentType::new("application/wasm").and(SizeAbove::new(1024)),
                )),
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        logging::error!("Failed to serve app: {}", err);
        logging::error!("Error details: {:?}", err);
    } else {
        logging::log!("Server shutdown gracefully");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt as _;

    #[test]
    fn test_tracing_level() {
        if cfg!(debug_assertions) {
            assert_eq!(tracing_level(), tracing::Level::DEBUG);
        } else {
            assert_eq!(tracing_level(), tracing::Level::INFO);
        }
    }

    #[tokio::test]
    async fn test_configuration_loading() {
        // The workspace manifest lives one directory up from this crate.
        let config_result = get_configuration(Some("../Cargo.toml"));
        if let Ok(conf) = config_result {
            assert_eq!(conf.leptos_options.output_name.as_ref(), "landing");
        }
    }

    #[test]
    fn test_health_handler_structure() {
        tokio_test::block_on(async {
            let result = health_handler().await;
            assert!(result.is_ok());

            let json_value = result.unwrap().0;
            assert_eq!(json_value["status"], "healthy");
            assert_eq!(json_value["service"], "landing");
            assert!(json_value.get("timestamp").is_some());
            assert_eq!(json_value["version"], env!("CARGO_PKG_VERSION"));
        });
    }

    #[tokio::test]
    async fn test_health_route() {
        let options = LeptosOptions::builder().output_name("landing").build();
        let response = support_routes()
            .with_state(options)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
