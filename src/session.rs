use std::rc::Rc;

use web_sys::window;

use crate::config;

/// Read-only view of the host application's login state.
pub trait SessionProvider {
    fn is_logged_in(&self) -> bool;
}

/// Reports a session whenever the login flow has left a token in localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

impl SessionProvider for LocalStorageSession {
    fn is_logged_in(&self) -> bool {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(config::SESSION_TOKEN_KEY).ok())
            .flatten()
            .is_some()
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub struct FixedSession(pub bool);

#[cfg(test)]
impl SessionProvider for FixedSession {
    fn is_logged_in(&self) -> bool {
        self.0
    }
}

/// Context value handed to the page through a `ContextProvider`.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionProvider>);

impl SessionHandle {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn provider(&self) -> &dyn SessionProvider {
        self.0.as_ref()
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new(LocalStorageSession)
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_session_reports_its_value() {
        assert!(FixedSession(true).is_logged_in());
        assert!(!FixedSession(false).is_logged_in());
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SessionHandle::new(FixedSession(true));
        let b = SessionHandle::new(FixedSession(true));
        assert!(a == a.clone());
        assert!(a != b);
        assert!(a.provider().is_logged_in());
    }
}
