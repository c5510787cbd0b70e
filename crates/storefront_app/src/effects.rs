use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use storefront_core::{Category, Effect, LoadError, Msg, Product};
use storefront_engine::{
    CategoryRecord, EngineEvent, EngineHandle, FetchError, FetchSettings, ProductRecord,
};
use storefront_logging::{store_info, store_warn};

use crate::input::ShellEvent;

/// Executes core effects against the engine and pumps engine completions
/// back into the shell's event channel.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(event_tx: mpsc::Sender<ShellEvent>) -> Self {
        let engine = EngineHandle::new(settings_from_env());
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProducts { request_id } => {
                    store_info!("FetchProducts request_id={}", request_id);
                    self.engine.fetch_products(request_id);
                }
                Effect::FetchCategories { request_id } => {
                    store_info!("FetchCategories request_id={}", request_id);
                    self.engine.fetch_categories(request_id);
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<ShellEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = map_engine_event(event);
                if event_tx.send(ShellEvent::Dispatch(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn settings_from_env() -> FetchSettings {
    let mut settings = FetchSettings::default();
    if let Ok(base) = std::env::var("STOREFRONT_API_BASE") {
        let base = base.trim();
        if !base.is_empty() {
            settings.base_url = base.to_string();
        }
    }
    settings
}

fn map_engine_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ProductsFetched { request_id, result } => match result {
            Ok(records) => Msg::ProductsLoaded {
                request_id,
                products: records.into_iter().map(map_product).collect(),
            },
            Err(err) => {
                store_warn!("products request {} failed: {}", request_id, err.kind);
                Msg::ProductsFailed {
                    request_id,
                    error: map_error(err),
                }
            }
        },
        EngineEvent::CategoriesFetched { request_id, result } => match result {
            Ok(records) => Msg::CategoriesLoaded {
                request_id,
                categories: records.into_iter().map(map_category).collect(),
            },
            Err(err) => {
                store_warn!("categories request {} failed: {}", request_id, err.kind);
                Msg::CategoriesFailed {
                    request_id,
                    error: map_error(err),
                }
            }
        },
    }
}

fn map_product(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        title: record.title,
        description: record.description,
        price: record.price,
        category: map_category(record.category),
        images: record.images,
        created_at: record.creation_at,
    }
}

fn map_category(record: CategoryRecord) -> Category {
    Category {
        id: record.id,
        name: record.name,
    }
}

fn map_error(err: FetchError) -> LoadError {
    LoadError::new(err.kind.to_string())
}
