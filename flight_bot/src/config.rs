use airlabs_client::DEFAULT_API_URL;
use clap::Parser;
use std::fmt::Debug;

#[derive(Parser)]
#[clap(
    author = "Alex Markov",
    version = "0.1.0",
    about = "Telegram bot tracking flights by IATA code"
)]
pub struct Args {
    #[clap(short, long, env = "TELOXIDE_TOKEN", hide_env_values = true)]
    pub tg_token: String,
    #[clap(short, long, env = "AIRLABS_API_KEY", hide_env_values = true)]
    pub airlabs_api_key: String,
    #[clap(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Telegram token is empty")]
    EmptyToken,
    #[error("AirLabs API key is empty")]
    EmptyApiKey,
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub tg_token: String,
    pub airlabs_api_key: String,
    pub api_url: String,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("tg_token", &"<redacted>")
            .field("airlabs_api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let tg_token = args.tg_token.trim();
        if tg_token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        let airlabs_api_key = args.airlabs_api_key.trim();
        if airlabs_api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self {
            tg_token: tg_token.to_owned(),
            airlabs_api_key: airlabs_api_key.to_owned(),
            api_url: args.api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(token: &str, key: &str) -> Args {
        Args::try_parse_from(["flight_bot", "--tg-token", token, "--airlabs-api-key", key])
            .unwrap()
    }

    #[test]
    fn flags_build_config_with_default_url() {
        let config = Config::try_from(args("123:abc", "key")).unwrap();

        assert_eq!(config.tg_token, "123:abc");
        assert_eq!(config.airlabs_api_key, "key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn blank_credentials_are_rejected() {
        assert_eq!(
            Config::try_from(args(" ", "key")).unwrap_err(),
            ConfigError::EmptyToken
        );
        assert_eq!(
            Config::try_from(args("123:abc", "  ")).unwrap_err(),
            ConfigError::EmptyApiKey
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = Config::try_from(args("123:abc", "key")).unwrap();
        let printed = format!("{:?}", config);

        assert!(!printed.contains("123:abc"));
        assert!(printed.contains(DEFAULT_API_URL));
    }
}
