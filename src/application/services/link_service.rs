//! Link management service.

use std::sync::Arc;

use crate::domain::entities::{ICON_MAX_LEN, Link, LinkPatch, NAME_MAX_LEN, NewLink, URL_MAX_LEN};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for creating, reading, updating and deleting links.
///
/// Guards the entity invariants before anything reaches the repository:
/// `name` and `url` are never blank and never exceed their column bounds.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a link.
    ///
    /// `icon` defaults to absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` or `url` is blank or too long,
    /// or if `icon` is too long.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(
        &self,
        name: String,
        url: String,
        icon: Option<String>,
    ) -> Result<Link, AppError> {
        check_required("name", &name, NAME_MAX_LEN)?;
        check_required("url", &url, URL_MAX_LEN)?;
        if let Some(icon) = &icon {
            check_icon(icon)?;
        }

        let link = self
            .repository
            .create(NewLink { name, url, icon })
            .await?;

        tracing::info!(id = link.id, name = %link.name, "Link created");
        Ok(link)
    }

    /// Returns every link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| link_not_found(id))
    }

    /// Partially updates a link, keeping every field the patch leaves out.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch is empty or would make
    /// `name`/`url` blank or too long.
    /// Returns [`AppError::NotFound`] if no link has the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request("No fields provided for update"));
        }
        if let Some(name) = &patch.name {
            check_required("name", name, NAME_MAX_LEN)?;
        }
        if let Some(url) = &patch.url {
            check_required("url", url, URL_MAX_LEN)?;
        }
        if let Some(Some(icon)) = &patch.icon {
            check_icon(icon)?;
        }

        let link = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| link_not_found(id))?;

        tracing::info!(id, "Link updated");
        Ok(link)
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(link_not_found(id));
        }

        tracing::info!(id, "Link deleted");
        Ok(())
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn link_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Link {id} not found"))
}

fn check_required(field: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::bad_request(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

fn check_icon(icon: &str) -> Result<(), AppError> {
    if icon.chars().count() > ICON_MAX_LEN {
        return Err(AppError::bad_request(format!(
            "icon must be at most {ICON_MAX_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    fn test_link(id: i64, name: &str, url: &str, icon: Option<&str>) -> Link {
        Link::new(
            id,
            name.to_string(),
            url.to_string(),
            icon.map(str::to_string),
        )
    }

    fn service(repo: MockLinkRepository) -> LinkService {
        LinkService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_link_success() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_link| {
                new_link.name == "Docs"
                    && new_link.url == "https://example.com"
                    && new_link.icon.is_none()
            })
            .times(1)
            .returning(|n| Ok(Link::new(1, n.name, n.url, n.icon)));

        let link = service(mock_repo)
            .create("Docs".to_string(), "https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(link.id, 1);
        assert!(link.icon.is_none());
    }

    #[tokio::test]
    async fn test_create_link_blank_name_rejected() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let result = service(mock_repo)
            .create("   ".to_string(), "https://example.com".to_string(), None)
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_link_url_too_long() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let long_url = format!("https://example.com/{}", "a".repeat(URL_MAX_LEN));
        let result = service(mock_repo)
            .create("Docs".to_string(), long_url, None)
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).get_by_id(42).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_all_passes_through() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                test_link(1, "A", "https://a.example", None),
                test_link(2, "B", "https://b.example", Some("b.png")),
            ])
        });

        let links = service(mock_repo).get_all().await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[1].icon.as_deref(), Some("b.png"));
    }

    #[tokio::test]
    async fn test_update_forwards_patch() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_update()
            .withf(|id, patch| {
                *id == 7
                    && patch.name.as_deref() == Some("New")
                    && patch.url.is_none()
                    && patch.icon.is_none()
            })
            .times(1)
            .returning(|_, _| {
                Ok(Some(test_link(
                    7,
                    "New",
                    "https://example.com",
                    Some("old.png"),
                )))
            });

        let patch = LinkPatch {
            name: Some("New".to_string()),
            ..Default::default()
        };
        let link = service(mock_repo).update(7, patch).await.unwrap();

        assert_eq!(link.name, "New");
        assert_eq!(link.icon.as_deref(), Some("old.png"));
    }

    #[tokio::test]
    async fn test_update_empty_patch_rejected() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_update().times(0);

        let result = service(mock_repo).update(1, LinkPatch::default()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_blank_url_rejected() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_update().times(0);

        let patch = LinkPatch {
            url: Some(String::new()),
            ..Default::default()
        };
        let result = service(mock_repo).update(1, patch).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_link() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let patch = LinkPatch {
            icon: Some(None),
            ..Default::default()
        };
        let result = service(mock_repo).update(99, patch).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_link() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Ok(false));

        let result = service(mock_repo).delete(5).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_link() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(mock_repo).delete(5).await.is_ok());
    }
}
