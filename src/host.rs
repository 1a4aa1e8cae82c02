//! Host-Identity Bridge
//!
//! The embedding messaging platform injects an opaque init-data string that
//! proves the session to the backend. The bridge is supplied at startup as a
//! trait object; running outside a host is the normal `None` case.

/// Capability exposed by the embedding host
pub trait HostBridge {
    /// Signal that the client is ready to be shown
    fn ready(&self) {}

    /// Ask the host for the full viewport
    fn expand(&self) {}

    /// Host-provided session init-data, if any
    fn session_token(&self) -> Option<String>;
}

/// Read the session identity token from the host.
///
/// Without a host this returns an empty string immediately. With a host,
/// readiness and expansion are signalled before the token is read.
pub fn get_identity_token(bridge: Option<&dyn HostBridge>) -> String {
    let Some(host) = bridge else {
        return String::new();
    };

    host.ready();
    host.expand();
    host.session_token().unwrap_or_default()
}

/// Bridge for non-hosted contexts (local development)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl HostBridge for NoHost {
    fn session_token(&self) -> Option<String> {
        None
    }
}

/// Host that injects its init-data through an environment variable
#[derive(Debug, Clone)]
pub struct EnvHost {
    var: String,
}

impl EnvHost {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Returns a bridge only when the host variable is present
    pub fn detect(var: &str) -> Option<Self> {
        std::env::var_os(var).map(|_| Self::new(var))
    }
}

impl HostBridge for EnvHost {
    fn ready(&self) {
        tracing::debug!(var = %self.var, "host ready");
    }

    fn expand(&self) {
        tracing::debug!(var = %self.var, "host expand requested");
    }

    fn session_token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Host with a fixed init-data string
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    token: Option<String>,
}

impl StaticHost {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// A host that is present but provides no init-data
    pub fn unset() -> Self {
        Self { token: None }
    }
}

impl HostBridge for StaticHost {
    fn session_token(&self) -> Option<String> {
        self.token.clone()
    }
}
