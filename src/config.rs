use crate::env_keys::{ENV_GITHUB_API_URL, INPUT_PREFIX};
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use std::ffi::OsString;
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub static API_URL: Lazy<String> = Lazy::new(|| match std::env::var(ENV_GITHUB_API_URL) {
    Ok(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_owned(),
    _ => DEFAULT_API_URL.to_owned(),
});

/// Action inputs, keyed by the env var name the runner uses for them.
#[derive(Clone, Default)]
pub struct Inputs {
    vars: HashMap<String, String>,
}

fn input_key(name: &str) -> String {
    format!("{INPUT_PREFIX}{}", name.replace(' ', "_").to_uppercase())
}

impl Inputs {
    /// Collects the `INPUT_*` variables. Unrelated variables may hold
    /// non-UTF-8 data and are never decoded.
    pub fn from_env() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        vars.into_iter()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .filter(|(k, _)| k.starts_with(INPUT_PREFIX))
            .collect()
    }

    /// Overrides an input, e.g. from a command line flag.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(input_key(name), value.into());
    }

    /// Trimmed value of an input; empty counts as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(&input_key(name))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn required(&self, name: &str) -> Result<String> {
        self.get(name)
            .map(str::to_owned)
            .ok_or_else(|| Error::MissingInput(name.to_owned()))
    }

    pub fn boolean(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            None => Ok(false),
            Some("true" | "True" | "TRUE") => Ok(true),
            Some("false" | "False" | "FALSE") => Ok(false),
            Some(_) => Err(Error::InvalidBoolean(name.to_owned())),
        }
    }
}

impl FromIterator<(String, String)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

/// Bearer credential. Never printed.
#[derive(Clone)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Case-insensitive allow-list of property names. Empty lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter(BTreeSet<String>);

impl PropertyFilter {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.is_empty() || self.0.contains(&name.to_lowercase())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub token: Token,
    pub set_env: bool,
    pub properties_filter: PropertyFilter,
    pub api_url: String,
}

impl Config {
    pub fn load(inputs: &Inputs) -> Result<Self> {
        let set_env = inputs.boolean("set-env")?;
        let owner = inputs.required("owner")?;
        let repo = inputs.required("repo")?;
        let token = Token::new(inputs.required("token")?);
        let properties_filter =
            PropertyFilter::parse(inputs.get("properties").unwrap_or_default());
        Ok(Self {
            owner,
            repo,
            token,
            set_env,
            properties_filter,
            api_url: API_URL.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, &str)]) -> Inputs {
        let mut inputs = Inputs::default();
        for (k, v) in pairs {
            inputs.set(k, *v);
        }
        inputs
    }

    #[test]
    fn input_keys_follow_runner_naming() {
        assert_eq!(input_key("set-env"), "INPUT_SET-ENV");
        assert_eq!(input_key("my input"), "INPUT_MY_INPUT");
    }

    #[test]
    fn loads_required_and_optional_inputs() {
        let conf = Config::load(&inputs(&[
            ("owner", "mona"),
            ("repo", " my-repo "),
            ("token", "ghp_token"),
            ("properties", "PROPERTY1, property2"),
            ("set-env", "true"),
        ]))
        .unwrap();
        assert_eq!(conf.owner, "mona");
        assert_eq!(conf.repo, "my-repo");
        assert_eq!(conf.token.expose(), "ghp_token");
        assert!(conf.set_env);
        assert_eq!(conf.properties_filter, PropertyFilter::parse("property1,property2"));
    }

    #[test]
    fn set_env_defaults_to_false() {
        let conf = Config::load(&inputs(&[
            ("owner", "mona"),
            ("repo", "my-repo"),
            ("token", "ghp_token"),
        ]))
        .unwrap();
        assert!(!conf.set_env);
        assert!(conf.properties_filter.is_empty());
    }

    #[test]
    fn missing_required_input_is_an_error() {
        let err = Config::load(&inputs(&[("owner", "mona"), ("token", "t")])).unwrap_err();
        assert!(matches!(err, Error::MissingInput(ref n) if n == "repo"));

        let err = Config::load(&inputs(&[("owner", "  "), ("repo", "r"), ("token", "t")]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingInput(ref n) if n == "owner"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let inputs = Inputs::from_os_vars([
            (OsString::from("UNRELATED_VAR"), OsString::from_vec(b"caf\xe9".to_vec())),
            (OsString::from_vec(b"K\xff".to_vec()), OsString::from("x")),
            (OsString::from("INPUT_OWNER"), OsString::from("mona")),
            (OsString::from("HOME"), OsString::from("/root")),
        ]);
        assert_eq!(inputs.get("owner"), Some("mona"));
        assert_eq!(inputs.vars.len(), 1);
    }

    #[test]
    fn boolean_rejects_unknown_spelling() {
        let err = inputs(&[("set-env", "yes")]).boolean("set-env").unwrap_err();
        assert!(matches!(err, Error::InvalidBoolean(_)));
        assert!(inputs(&[("set-env", "TRUE")]).boolean("set-env").unwrap());
        assert!(!inputs(&[("set-env", "False")]).boolean("set-env").unwrap());
    }

    #[test]
    fn filter_trims_lowercases_and_drops_empty() {
        let filter = PropertyFilter::parse(" Team , ,COST-center,");
        assert!(filter.accepts("team"));
        assert!(filter.accepts("TEAM"));
        assert!(filter.accepts("Cost-Center"));
        assert!(!filter.accepts("owner"));
        assert!(PropertyFilter::parse(" , ").is_empty());
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let filter = PropertyFilter::parse("");
        assert!(filter.accepts("anything"));
    }

    #[test]
    fn token_is_redacted_in_debug() {
        let conf = Config::load(&inputs(&[
            ("owner", "mona"),
            ("repo", "my-repo"),
            ("token", "ghp_secret"),
        ]))
        .unwrap();
        assert!(!format!("{conf:?}").contains("ghp_secret"));
    }
}
