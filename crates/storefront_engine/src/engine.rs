use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use storefront_logging::{store_debug, store_warn};

use crate::fetch::{CatalogFetcher, FetchSettings, ReqwestCatalogFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    FetchProducts { request_id: RequestId },
    FetchCategories { request_id: RequestId },
}

/// Handle to the background fetch thread.
///
/// Clones share one command queue and one event queue; the shell keeps a
/// clone for enqueueing and moves another into its event-pump thread.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestCatalogFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_products(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::FetchProducts { request_id });
    }

    pub fn fetch_categories(&self, request_id: RequestId) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchCategories { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        let rx = self.event_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn CatalogFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchProducts { request_id } => {
            store_debug!("fetching products, request {}", request_id);
            let result = fetcher.fetch_products().await;
            if let Err(err) = &result {
                store_warn!("products request {} failed: {}", request_id, err.kind);
            }
            let _ = event_tx.send(EngineEvent::ProductsFetched { request_id, result });
        }
        EngineCommand::FetchCategories { request_id } => {
            store_debug!("fetching categories, request {}", request_id);
            let result = fetcher.fetch_categories().await;
            if let Err(err) = &result {
                store_warn!("categories request {} failed: {}", request_id, err.kind);
            }
            let _ = event_tx.send(EngineEvent::CategoriesFetched { request_id, result });
        }
    }
}
