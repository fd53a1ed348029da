//! Application configuration loaded from environment variables.
//!
//! - `PEDIDOS_API_URL` — base URL of the pedidos REST API
//!   (default `http://localhost:8080`)
//!
//! The base URL is used as-is apart from a trailing-slash trim; the client
//! appends `/api/pedidos` itself.

/// Default API base URL when `PEDIDOS_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// REST API connection values.
#[derive(Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Loads the application configuration from environment variables.
///
/// The API base URL defaults to `http://localhost:8080` and can be
/// overridden with `PEDIDOS_API_URL`. An empty variable counts as absent.
///
/// # Errors
///
/// Returns [`BalcaoError::Config`](crate::BalcaoError::Config) if the URL
/// does not start with `http://` or `https://`.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("PEDIDOS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(crate::BalcaoError::Config(format!(
            "PEDIDOS_API_URL must start with http:// or https://, got {base_url:?}"
        )));
    }

    Ok(AppConfig {
        api: ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&[("PEDIDOS_API_URL", None)], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.api.base_url, DEFAULT_API_URL);
        });
    }

    #[test]
    fn custom_api_url() {
        with_env(
            &[("PEDIDOS_API_URL", Some("https://pedidos.example.com"))],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api.base_url, "https://pedidos.example.com");
            },
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        with_env(
            &[("PEDIDOS_API_URL", Some("http://10.0.0.5:8080/"))],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
            },
        );
    }

    #[test]
    fn empty_value_treated_as_absent() {
        with_env(&[("PEDIDOS_API_URL", Some(""))], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.api.base_url, DEFAULT_API_URL);
        });
    }

    #[test]
    fn rejects_url_without_scheme() {
        with_env(&[("PEDIDOS_API_URL", Some("pedidos.example.com"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("http://"));
        });
    }
}
