use folio_deployment::Deployment;
use folio_server::DeploymentImpl;
use folio_utils::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }
    init_tracing();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let version = env!("CARGO_PKG_VERSION");
            tracing::info!("Starting folio-server version {version}...");

            let deployment = DeploymentImpl::new().await?;
            folio_server::serve(deployment).await
        })
}
