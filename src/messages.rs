use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Message strings browsers attach to low-level fetch failures.
///
/// Membership is exact: a generic fetch failure classifies as a network error
/// only when its message matches one of these verbatim. The table is coupled
/// to browser versions and locales by nature, so it lives apart from the
/// classification logic that consumes it and is public for callers to reuse
/// in their own matching or assert against in tests.
pub static NETWORK_ERROR_MESSAGES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Chrome & Edge
        "Failed to fetch",
        // Firefox
        "NetworkError when attempting to fetch resource.",
        // Safari
        "cancelled",
        "annulé",
        "Abgebrochen",
        "Load failed",
        "La requête a expiré.",
        "La connexion Internet semble interrompue.",
        "La connexion réseau a été perdue.",
    ])
});
