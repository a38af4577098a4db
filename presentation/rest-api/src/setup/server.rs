use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::config::app_config::{API_BASE_PATH, AppConfig};
use crate::setup::dependency_injection::DependencyContainer;

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, format!("http://{}", addr));

        tracing::info!("Server running at http://{}{}", addr, API_BASE_PATH);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Assembles the API, docs and middleware into one endpoint.
    pub fn app(container: DependencyContainer, cors: Cors, public_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.health_api, container.cart_item_api),
            "Cart Service API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}{}", public_url, API_BASE_PATH));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest(API_BASE_PATH, api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}
