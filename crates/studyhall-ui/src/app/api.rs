//! Portal client shared through a Yew context.
//!
//! # Design
//! - The client only carries the page origin, so one per mount is enough.
//! - Equality is pointer identity; the context never changes after mount.

use crate::services::api::PortalClient;
use std::rc::Rc;

/// Context handed to components that call the portal API.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Client bound to the page origin.
    pub client: Rc<PortalClient>,
}

impl ApiCtx {
    /// Build the context for `base_url`.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(PortalClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
