//! Session token bookkeeping
//!
//! Holds the access and refresh tokens returned by the backend's login and
//! register endpoints, the signed-in user's profile, and the rules the HTTP
//! layer follows when a request comes back unauthorized. Sending requests is
//! left to the caller.

use crate::storage::{Storage, StorageResult};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Endpoints whose 401 responses must not trigger a token refresh.
const AUTH_ENDPOINTS: [&str; 3] = ["/login", "/register", "/refresh"];

/// Tokens returned by a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
	pub access_token: String,
	pub refresh_token: String,
}

/// The signed-in user, as reported by `/user_details`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub role: Option<String>,
}

/// What to do with a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedAction {
	/// Refresh the access token and replay the request once.
	RefreshAndRetry,
	/// The refresh token is no longer accepted; end the session.
	Logout,
	/// Hand the error to the caller unchanged.
	Propagate,
}

/// Returns true for the login, register and refresh endpoints.
pub fn is_auth_endpoint(url: &str) -> bool {
	AUTH_ENDPOINTS.iter().any(|endpoint| url.contains(endpoint))
}

/// Decides how to react to a response `status` for `url`.
///
/// # Examples
///
/// ```
/// use skywise_pages::auth::{UnauthorizedAction, on_response_status};
///
/// assert_eq!(on_response_status("/courses", 401, false), UnauthorizedAction::RefreshAndRetry);
/// assert_eq!(on_response_status("/courses", 401, true), UnauthorizedAction::Propagate);
/// assert_eq!(on_response_status("/login", 401, false), UnauthorizedAction::Propagate);
/// assert_eq!(on_response_status("/refresh", 401, false), UnauthorizedAction::Logout);
/// assert_eq!(on_response_status("/courses", 500, false), UnauthorizedAction::Propagate);
/// ```
pub fn on_response_status(url: &str, status: u16, already_retried: bool) -> UnauthorizedAction {
	if status != 401 {
		return UnauthorizedAction::Propagate;
	}
	if !already_retried && !is_auth_endpoint(url) {
		return UnauthorizedAction::RefreshAndRetry;
	}
	if url.contains("/refresh") {
		return UnauthorizedAction::Logout;
	}
	UnauthorizedAction::Propagate
}

/// Picks the user-facing message out of an error response body.
///
/// Prefers a non-empty `message`, then a non-empty `error`, then `fallback`.
pub fn error_message(body: &serde_json::Value, fallback: &str) -> String {
	["message", "error"]
		.iter()
		.find_map(|key| {
			body.get(key)
				.and_then(serde_json::Value::as_str)
				.filter(|message| !message.is_empty())
		})
		.unwrap_or(fallback)
		.to_string()
}

/// Tokens and profile of the current user, persisted in `S`.
#[derive(Debug)]
pub struct AuthSession<S: Storage> {
	storage: S,
	access_token: Option<String>,
	profile: Option<UserProfile>,
}

impl<S: Storage> AuthSession<S> {
	/// Restores a session from previously stored tokens.
	pub fn restore(storage: S) -> StorageResult<Self> {
		let access_token = storage.get_item(ACCESS_TOKEN_KEY)?;
		Ok(Self {
			storage,
			access_token,
			profile: None,
		})
	}

	/// Stores both tokens after a login or registration.
	pub fn set_tokens(&mut self, tokens: &TokenPair) -> StorageResult<()> {
		self.storage.set_item(ACCESS_TOKEN_KEY, &tokens.access_token)?;
		self.storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh_token)?;
		self.access_token = Some(tokens.access_token.clone());
		tracing::debug!("session tokens stored");
		Ok(())
	}

	/// Stores a new access token obtained from the refresh endpoint.
	pub fn set_access_token(&mut self, token: impl Into<String>) -> StorageResult<()> {
		let token = token.into();
		self.storage.set_item(ACCESS_TOKEN_KEY, &token)?;
		self.access_token = Some(token);
		Ok(())
	}

	pub fn access_token(&self) -> Option<&str> {
		self.access_token.as_deref()
	}

	pub fn refresh_token(&self) -> StorageResult<Option<String>> {
		self.storage.get_item(REFRESH_TOKEN_KEY)
	}

	pub fn is_authenticated(&self) -> bool {
		self.access_token.is_some()
	}

	/// `Authorization` header value for API requests.
	pub fn authorization_header(&self) -> Option<String> {
		self.access_token
			.as_deref()
			.map(|token| format!("Bearer {token}"))
	}

	pub fn set_profile(&mut self, profile: UserProfile) {
		self.profile = Some(profile);
	}

	pub fn profile(&self) -> Option<&UserProfile> {
		self.profile.as_ref()
	}

	/// Forgets the tokens and profile.
	pub fn logout(&mut self) -> StorageResult<()> {
		self.access_token = None;
		self.profile = None;
		self.storage.remove_item(ACCESS_TOKEN_KEY)?;
		self.storage.remove_item(REFRESH_TOKEN_KEY)?;
		tracing::debug!("session cleared");
		Ok(())
	}
}
