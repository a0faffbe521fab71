use rs_blank_core::sheet::blank_count::{parse_blank_count, DEFAULT_BLANKS};

/// Server settings, read from `RS_BLANK_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	/// Bind address (`RS_BLANK_HOST`, default `127.0.0.1`).
	pub host: String,
	/// Bind port (`RS_BLANK_PORT`, default `5000`).
	pub port: u16,
	/// Blank count of the shared sheet at startup (`RS_BLANK_BLANKS`, default 2, clamped).
	pub initial_blanks: usize,
	/// Browser origin allowed by CORS (`RS_BLANK_ALLOWED_ORIGIN`, none by default).
	pub allowed_origin: Option<String>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			initial_blanks: DEFAULT_BLANKS,
			allowed_origin: None,
		}
	}
}

impl ServerConfig {
	/// Reads the configuration from the process environment.
	pub fn from_env() -> Result<Self, String> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary key lookup.
	///
	/// Unset or blank variables fall back to the defaults.
	///
	/// # Errors
	/// Returns an error if the port or the blank count cannot be parsed.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
		let mut config = Self::default();

		if let Some(host) = get("RS_BLANK_HOST") {
			config.host = host;
		}
		if let Some(port) = get("RS_BLANK_PORT") {
			config.port = port
				.parse()
				.map_err(|_| format!("RS_BLANK_PORT must be a port number, got '{}'", port))?;
		}
		if let Some(blanks) = get("RS_BLANK_BLANKS") {
			config.initial_blanks = parse_blank_count(&blanks).map_err(|e| format!("RS_BLANK_BLANKS: {e}"))?;
		}
		config.allowed_origin = get("RS_BLANK_ALLOWED_ORIGIN");

		Ok(config)
	}
}
