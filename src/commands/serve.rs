use anyhow::Result;
use std::sync::Arc;
use triagem::config::Config;
use triagem::server::HttpServer;
use triagem::service::TriageService;

pub async fn run(mut config: Config, listen: Option<String>) -> Result<()> {
    if let Some(listen_addr) = listen {
        config.http.listen_addr = listen_addr;
    }

    let http_config = config.http.clone();
    let service = Arc::new(TriageService::new(config));
    HttpServer::new(http_config, service).run().await
}
