//! # Widget Embeds
//!
//! Builds the snippets a creator copies from the dashboard to put their tip
//! button on a stream or website.
//!
//! ```text
//! <origin>/widget/<username>   iframe source, OBS browser source
//! <origin>/u/<username>        public tip page
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::WidgetSize;
use crate::validation::{validate_username, ValidationResult};

/// Embed snippets for one creator on one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEmbed {
    origin: String,
    username: String,
}

impl WidgetEmbed {
    /// Creates the embed for `username` served from `origin`.
    ///
    /// A creator without a saved username has nothing to embed yet, so an
    /// empty username is rejected.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::types::WidgetSize;
    /// use xrptip_core::widget::WidgetEmbed;
    ///
    /// let embed = WidgetEmbed::new("https://xrptip.app/", "alice").unwrap();
    /// assert_eq!(embed.widget_url(), "https://xrptip.app/widget/alice");
    /// assert_eq!(embed.direct_link(), "https://xrptip.app/u/alice");
    /// assert!(embed.iframe_code(WidgetSize::Small).contains(r#"width="280" height="80""#));
    /// ```
    pub fn new(origin: &str, username: &str) -> ValidationResult<Self> {
        let origin = origin.trim().trim_end_matches('/');
        if origin.is_empty() {
            return Err(ValidationError::Required {
                field: "origin".to_string(),
            });
        }

        validate_username(username)?;

        Ok(WidgetEmbed {
            origin: origin.to_string(),
            username: username.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// URL of the widget page.
    pub fn widget_url(&self) -> String {
        format!("{}/widget/{}", self.origin, self.username)
    }

    /// URL to paste into an OBS browser source.
    pub fn obs_source_url(&self) -> String {
        self.widget_url()
    }

    /// Public tip page link.
    pub fn direct_link(&self) -> String {
        format!("{}/u/{}", self.origin, self.username)
    }

    /// `<iframe>` snippet for Twitch panels and websites.
    pub fn iframe_code(&self, size: WidgetSize) -> String {
        format!(
            r#"<iframe src="{}" width="{}" height="{}" frameborder="0" scrolling="no" allowtransparency="true" style="border: none;"></iframe>"#,
            self.widget_url(),
            size.width(),
            size.height()
        )
    }
}
