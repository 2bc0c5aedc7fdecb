#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use link_directory::domain::entities::{Link, LinkPatch, NewLink};
use link_directory::domain::repositories::LinkRepository;
use link_directory::error::AppError;
use link_directory::infrastructure::storage::FsImageStore;
use link_directory::routes::app_router;
use link_directory::state::AppState;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the PostgreSQL repository.
///
/// Ids start at 1 and are never reused, matching a `BIGSERIAL` column.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    links: Vec<Link>,
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let link = Link::new(store.next_id, new_link.name, new_link.url, new_link.icon);
        store.links.push(link.clone());
        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.inner.lock().unwrap().links.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.links.iter().find(|l| l.id == id).cloned())
    }

    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let mut store = self.inner.lock().unwrap();
        let Some(link) = store.links.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            link.name = name;
        }
        if let Some(url) = patch.url {
            link.url = url;
        }
        if let Some(icon) = patch.icon {
            link.icon = icon;
        }
        Ok(Some(link.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.inner.lock().unwrap();
        let before = store.links.len();
        store.links.retain(|l| l.id != id);
        Ok(store.links.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.lock().unwrap().links.len() as i64)
    }
}

/// Repository whose every call fails, for exercising the 500 path.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn update(&self, _id: i64, _patch: LinkPatch) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
}

fn unavailable() -> AppError {
    AppError::internal("Database error: connection refused (password=hunter2)")
}

pub fn create_test_state(images_dir: &Path) -> AppState {
    AppState::new(
        Arc::new(InMemoryLinkRepository::default()),
        Arc::new(FsImageStore::new(images_dir)),
    )
}

pub fn create_failing_state(images_dir: &Path) -> AppState {
    AppState::new(
        Arc::new(FailingLinkRepository),
        Arc::new(FsImageStore::new(images_dir)),
    )
}

/// Builds a test server over the full application router, including
/// trailing-slash normalization.
pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}
