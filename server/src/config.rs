use eyre::{Result, WrapErr, eyre};
use std::env;
use std::sync::LazyLock;
use url::Url;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().unwrap_or_else(|error| panic!("invalid configuration: {error:#}"))
});

#[derive(Clone)]
pub struct Config {
    /// Base URL of the employee REST service.
    pub employees_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let employees_url = env_var("STAFFIT_EMPLOYEES_URL")?
            .parse()
            .wrap_err("STAFFIT_EMPLOYEES_URL is not a valid URL")?;

        Ok(Self { employees_url })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| eyre!("missing environment variable: {}", name))
}
