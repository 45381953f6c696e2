//! The interaction gateway.
//!
//! Owns the session store and the host handle. Events are validated
//! (ownership, expiry, staleness), translated into navigation actions,
//! applied through the pure state machine, re-projected, and pushed back
//! to the host as an in-place update of the original message.

use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopfront_core::config::WidgetConfig;
use shopfront_core::error::{Result, ShopfrontError};
use shopfront_core::nav::NavState;
use shopfront_core::pagination;
use shopfront_core::render::{self, PageView};
use shopfront_core::session::{Session, SessionStore};
use shopfront_types::{Catalog, ControlDescriptor, VisualDocument};

use crate::action::ActionCode;
use crate::host::ChatHost;

const NOT_OWNER_NOTICE: &str = "This shop view belongs to another viewer.";
const EXPIRED_NOTICE: &str = "This shop view has expired.";

/// Raw control activation as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// The action-code string the control was rendered with.
    pub action_code: String,
    /// Viewer who activated the control.
    pub viewer_id: String,
    /// Message the control belongs to.
    pub message_id: String,
}

/// Why an event was refused. Rejections are expected traffic, not
/// failures; the viewer gets at most an ephemeral notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The activating viewer does not own the session.
    NotOwner,
    /// Session timed out or the target message is gone. The session is
    /// discarded.
    Expired,
    /// The control was rendered for an older session generation (a slow
    /// duplicate of an already-applied event).
    Stale { got: u64, current: u64 },
}

/// Result of handling one interaction event.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Transition applied and the host message updated in place.
    Updated {
        session: Session,
        document: VisualDocument,
        controls: ControlDescriptor,
    },
    /// Event refused; stored state unchanged (removed when expired).
    Rejected(Rejection),
}

/// Binds one catalog to the host messaging interface and manages every
/// live session rendering that catalog.
///
/// This is the only component that performs host I/O and the only one
/// that mutates sessions, so each event is processed to completion before
/// its effects become visible to the next.
pub struct InteractionGateway<H: ChatHost> {
    host: Arc<H>,
    catalog: Arc<Catalog>,
    config: WidgetConfig,
    page_size: NonZeroUsize,
    store: SessionStore,
}

impl<H: ChatHost> InteractionGateway<H> {
    /// Creates a gateway for `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::InvalidPageSize`] when the configured
    /// page size is zero. (An empty catalog is already unrepresentable:
    /// [`Catalog::new`] rejects it.)
    pub fn new(host: Arc<H>, catalog: Catalog, config: WidgetConfig) -> Result<Self> {
        let page_size = config.page_size()?;
        Ok(Self {
            host,
            catalog: Arc::new(catalog),
            config,
            page_size,
            store: SessionStore::new(),
        })
    }

    /// The catalog this gateway renders.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The live session store. Read-only access for integrators; all
    /// mutation goes through the gateway.
    pub fn sessions(&self) -> &SessionStore {
        &self.store
    }

    /// Renders the initial document and controls for a fresh view without
    /// posting anything, ready for a host `post_message`.
    pub fn initial_view(
        &self,
        initial_filter: Option<String>,
    ) -> Result<(VisualDocument, ControlDescriptor)> {
        self.project_state(&NavState::initial(initial_filter), 0)
    }

    /// Posts a new shop view for `viewer_id` into `target` and creates its
    /// session, keyed by the message id the host returns.
    pub async fn open(
        &self,
        target: &str,
        viewer_id: &str,
        initial_filter: Option<String>,
    ) -> Result<String> {
        let nav = NavState::initial(initial_filter);
        let (document, controls) = self.project_state(&nav, 0)?;
        let message_id = self
            .host
            .post_message(target, &document, &controls)
            .await
            .map_err(|e| ShopfrontError::host(e.to_string()))?;
        self.store
            .insert(Session::new(message_id.clone(), viewer_id, nav))
            .await;
        tracing::info!(%message_id, %viewer_id, "shop view opened");
        Ok(message_id)
    }

    /// Handles one control activation.
    ///
    /// Validation failures that are part of normal traffic come back as
    /// [`Outcome::Rejected`]; `Err` is reserved for malformed action codes
    /// and host I/O failures. A host update failure leaves the stored
    /// session untouched, so a retry of the same event reuses the same
    /// state.
    pub async fn handle(&self, event: &InteractionEvent) -> Result<Outcome> {
        let code = ActionCode::from_str(&event.action_code)
            .map_err(|e| ShopfrontError::internal(e.to_string()))?;

        let Some(session) = self.store.get(&event.message_id).await else {
            tracing::debug!(message_id = %event.message_id, "interaction against unknown session");
            self.notify(&event.viewer_id, EXPIRED_NOTICE).await;
            return Ok(Outcome::Rejected(Rejection::Expired));
        };

        if session.owner_id != event.viewer_id {
            tracing::debug!(
                viewer_id = %event.viewer_id,
                owner_id = %session.owner_id,
                "interaction from non-owner"
            );
            self.notify(&event.viewer_id, NOT_OWNER_NOTICE).await;
            return Ok(Outcome::Rejected(Rejection::NotOwner));
        }

        if session.is_idle(self.config.idle_timeout()) {
            self.store.remove(&event.message_id).await;
            tracing::info!(message_id = %event.message_id, "session idle-expired, discarded");
            self.notify(&event.viewer_id, EXPIRED_NOTICE).await;
            return Ok(Outcome::Rejected(Rejection::Expired));
        }

        if code.generation != session.generation {
            tracing::debug!(
                got = code.generation,
                current = session.generation,
                "stale interaction ignored"
            );
            return Ok(Outcome::Rejected(Rejection::Stale {
                got: code.generation,
                current: session.generation,
            }));
        }

        let next = session.advanced(session.nav.apply(&code.action, &self.catalog, self.page_size));
        let (document, controls) = self.project_state(&next.nav, next.generation)?;

        // Host first, store second: only a confirmed update advances the
        // session.
        self.host
            .update_message(&event.message_id, &document, &controls)
            .await
            .map_err(|e| ShopfrontError::host(e.to_string()))?;

        if !self.store.replace(session.generation, next.clone()).await {
            let current = self
                .store
                .get(&event.message_id)
                .await
                .map(|s| s.generation)
                .unwrap_or(session.generation + 1);
            tracing::warn!(message_id = %event.message_id, "session advanced concurrently, event dropped");
            return Ok(Outcome::Rejected(Rejection::Stale {
                got: code.generation,
                current,
            }));
        }

        tracing::debug!(
            message_id = %event.message_id,
            page_index = next.nav.page_index,
            filter = ?next.nav.filter,
            "navigation applied"
        );
        Ok(Outcome::Updated {
            session: next,
            document,
            controls,
        })
    }

    /// Host notification that the message was deleted; its session is
    /// discarded.
    pub async fn message_deleted(&self, message_id: &str) {
        if self.store.remove(message_id).await.is_some() {
            tracing::info!(%message_id, "host message deleted, session discarded");
        }
    }

    /// Removes every idle-expired session, returning the affected message
    /// ids.
    pub async fn sweep_expired(&self) -> Vec<String> {
        let removed = self.store.sweep_expired(self.config.idle_timeout()).await;
        if !removed.is_empty() {
            tracing::info!(count = removed.len(), "swept idle sessions");
        }
        removed
    }

    fn project_state(
        &self,
        nav: &NavState,
        generation: u64,
    ) -> Result<(VisualDocument, ControlDescriptor)> {
        let filter = nav.filter.as_deref();
        let page_count = pagination::page_count(&self.catalog, filter, self.page_size);
        let page = pagination::page_at(&self.catalog, filter, self.page_size, nav.page_index)
            .ok_or_else(|| {
                ShopfrontError::internal(format!(
                    "page index {} out of range (count {page_count})",
                    nav.page_index
                ))
            })?;
        Ok(render::project(
            &self.catalog,
            &PageView {
                page: &page,
                page_count,
                filter,
                generation,
            },
        ))
    }

    async fn notify(&self, viewer_id: &str, text: &str) {
        if let Err(error) = self.host.send_ephemeral(viewer_id, text).await {
            tracing::warn!(%viewer_id, %error, "failed to send ephemeral notice");
        }
    }
}
