use crate::adapters::http::router;
use crate::core::{ConfigProvider, Result, VenueLookup};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct CafeServer<L: VenueLookup> {
    catalog: Arc<L>,
}

impl<L: VenueLookup + 'static> CafeServer<L> {
    pub fn new(catalog: L) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub async fn bind<C: ConfigProvider>(&self, config: &C) -> Result<TcpListener> {
        let listener = TcpListener::bind((config.host(), config.port())).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serves `GET /cafe` until Ctrl-C or SIGTERM.
    pub async fn run<C: ConfigProvider>(&self, config: &C) -> Result<()> {
        let listener = self.bind(config).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already-bound listener until `shutdown` resolves.
    /// In-flight requests are allowed to finish.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = router(Arc::clone(&self.catalog));
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Binds and serves on a background task.
    pub async fn spawn<C: ConfigProvider>(self, config: &C) -> Result<RunningServer> {
        let listener = self.bind(config).await?;
        let addr = listener.local_addr()?;
        let (shutdown, stop) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            self.serve(listener, async move {
                let _ = stop.await;
            })
            .await
        });
        Ok(RunningServer {
            addr,
            shutdown,
            handle,
        })
    }
}

pub struct RunningServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<()>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn stop(self) -> Result<()> {
        let _ = self.shutdown.send(());
        self.handle.await.map_err(std::io::Error::other)?
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
