//! DTOs for the link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, LinkPatch};

/// Request body for `POST /api/links`.
///
/// `name` and `url` are required; `icon` may be omitted or `null`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "url is required"))]
    pub url: Option<String>,

    pub icon: Option<String>,
}

/// Request body for `PUT /api/links/{id}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `icon` semantics
///
/// - **Absent** (`icon` not in JSON) → leave existing value unchanged
/// - **`null`** → clear the icon
/// - **String** → set new icon
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLinkRequest {
    pub name: Option<String>,

    pub url: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub icon: Option<Option<String>>,
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(req: UpdateLinkRequest) -> Self {
        LinkPatch {
            name: req.name,
            url: req.url,
            icon: req.icon,
        }
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        LinkResponse {
            id: link.id,
            name: link.name,
            url: link.url,
            icon: link.icon,
        }
    }
}
