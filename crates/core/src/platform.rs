//! Host platform context.
//!
//! Built once at start-up from whatever the host (the Telegram client)
//! provided and frozen afterwards: there are no setters. Without a host the
//! context falls back to a light theme and no user.

use serde::Deserialize;

/// Theme reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the host's value. Anything but `dark` is light.
    #[must_use]
    pub fn from_host(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Identity of the person using the app, as reported by the host.
///
/// Informational only; the gateway authenticates from the raw init data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl PlatformUser {
    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

/// Frozen host context.
#[derive(Clone, Default)]
pub struct PlatformContext {
    init_data: Option<String>,
    user: Option<PlatformUser>,
    color_scheme: ColorScheme,
}

impl PlatformContext {
    /// Context used when running outside the host.
    #[must_use]
    pub fn standalone() -> Self {
        Self::default()
    }

    /// Build the context from the host's raw init data and theme.
    ///
    /// The init data is a URL-encoded query string whose `user` pair holds a
    /// JSON object. A missing or malformed user leaves the context without a
    /// user but keeps the init data, which is still forwarded to the gateway.
    #[must_use]
    pub fn detect(init_data: Option<&str>, color_scheme: Option<&str>) -> Self {
        let init_data = init_data
            .map(str::trim)
            .filter(|data| !data.is_empty())
            .map(str::to_owned);

        let user = init_data.as_deref().and_then(parse_user);
        let color_scheme = color_scheme.map_or(ColorScheme::Light, ColorScheme::from_host);

        Self {
            init_data,
            user,
            color_scheme,
        }
    }

    /// Raw init data to forward to the gateway.
    #[must_use]
    pub fn init_data(&self) -> Option<&str> {
        self.init_data.as_deref()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&PlatformUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Whether the app is running inside the host.
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.init_data.is_some()
    }

    /// Name used in the home page greeting.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.first_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("there")
    }

    /// First letter of the user's first name, or a silhouette.
    #[must_use]
    pub fn avatar_initial(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.first_name.chars().next())
            .map_or_else(|| "👤".to_owned(), |c| c.to_string())
    }
}

impl std::fmt::Debug for PlatformContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformContext")
            .field("init_data", &self.init_data.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user)
            .field("color_scheme", &self.color_scheme)
            .finish()
    }
}

fn parse_user(init_data: &str) -> Option<PlatformUser> {
    url::form_urlencoded::parse(init_data.as_bytes())
        .find(|(key, _)| key == "user")
        .and_then(|(_, value)| serde_json::from_str(&value).ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const INIT_DATA: &str = "query_id=AAH&user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Ada%22%2C%22last_name%22%3A%22Lovelace%22%2C%22username%22%3A%22ada%22%7D&auth_date=1760000000&hash=abc";

    #[test]
    fn test_standalone_defaults() {
        let ctx = PlatformContext::standalone();
        assert!(!ctx.is_embedded());
        assert_eq!(ctx.greeting_name(), "there");
        assert_eq!(ctx.avatar_initial(), "👤");
        assert_eq!(ctx.color_scheme(), ColorScheme::Light);
        assert!(ctx.init_data().is_none());
    }

    #[test]
    fn test_detect_reads_user_from_init_data() {
        let ctx = PlatformContext::detect(Some(INIT_DATA), Some("dark"));
        assert!(ctx.is_embedded());
        assert_eq!(ctx.color_scheme(), ColorScheme::Dark);

        let user = ctx.user().unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.username.as_deref(), Some("ada"));
        assert_eq!(ctx.greeting_name(), "Ada");
        assert_eq!(ctx.avatar_initial(), "A");
        assert_eq!(ctx.init_data(), Some(INIT_DATA));
    }

    #[test]
    fn test_detect_keeps_init_data_without_user() {
        let ctx = PlatformContext::detect(Some("auth_date=1&hash=x"), None);
        assert!(ctx.is_embedded());
        assert!(ctx.user().is_none());
        assert_eq!(ctx.greeting_name(), "there");
    }

    #[test]
    fn test_blank_init_data_is_standalone() {
        let ctx = PlatformContext::detect(Some("   "), Some("light"));
        assert!(!ctx.is_embedded());
    }

    #[test]
    fn test_unknown_color_scheme_is_light() {
        assert_eq!(ColorScheme::from_host("sepia"), ColorScheme::Light);
        assert_eq!(ColorScheme::from_host("DARK"), ColorScheme::Dark);
    }

    #[test]
    fn test_debug_redacts_init_data() {
        let ctx = PlatformContext::detect(Some(INIT_DATA), None);
        let debug = format!("{ctx:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hash=abc"));
    }
}
