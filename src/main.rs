use anteroom::api;
use anteroom::logger::*;
use anteroom::server::*;
use anteroom::settings::*;
use std::sync::Arc;
use tokio::signal;
use warp::Filter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    let logger_config = LogConfig {
        filter: project_settings.log.filter.clone(),
    };
    logger.reload_from_config(&logger_config)?;

    let address: std::net::SocketAddr = project_settings.http.address.parse()?;
    let server = Arc::new(Server::try_new(&project_settings)?);

    let api_v1 = api::v1::routes(server).recover(api::v1::recover_error);

    let (_, serving) = warp::serve(api_v1).bind_with_graceful_shutdown(address, async {
        signal::ctrl_c().await.expect("Could not register SIGINT");
    });
    serving.await;

    info!("server stopped");

    Ok(())
}
