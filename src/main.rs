use clap::Parser;
use config::{Config, Inputs};
use properties::GitHub;
use sink::Sinks;

mod cmd;
mod commands;
mod config;
mod env_keys;
mod error;
mod logging;
mod properties;
mod rest;
mod sink;
#[cfg(test)]
mod test_support;

/// Expose a repository's custom properties as environment variables or step outputs.
///
/// Every flag overrides the matching action input (`INPUT_*` env var).
#[derive(Parser)]
#[command(version, about)]
struct Opt {
    /// Repository owner or organization
    #[arg(long)]
    owner: Option<String>,
    /// Repository name
    #[arg(long)]
    repo: Option<String>,
    /// Token used to call the GitHub API
    #[arg(long)]
    token: Option<String>,
    /// Comma separated, case-insensitive list of properties to expose
    #[arg(long)]
    properties: Option<String>,
    /// Export properties as environment variables instead of step outputs
    #[arg(long, value_name = "BOOL")]
    set_env: Option<bool>,
    /// GitHub API base URL
    #[arg(long)]
    api_url: Option<String>,
}

impl Opt {
    fn inputs(&self) -> Inputs {
        let mut inputs = Inputs::from_env();
        self.override_inputs(&mut inputs);
        inputs
    }

    fn override_inputs(&self, inputs: &mut Inputs) {
        let flags = [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("token", &self.token),
            ("properties", &self.properties),
        ];
        for (name, value) in flags {
            if let Some(v) = value {
                inputs.set(name, v.as_str());
            }
        }
        if let Some(set_env) = self.set_env {
            inputs.set("set-env", set_env.to_string());
        }
    }
}

async fn apply(opt: &Opt) -> error::Result<cmd::apply::Outcome> {
    let mut conf = Config::load(&opt.inputs())?;
    if let Some(url) = &opt.api_url {
        conf.api_url = url.clone();
    }
    let fetcher = GitHub::new(conf.api_url.as_str());
    cmd::apply::run(&conf, &fetcher, &mut Sinks::from_env()).await
}

#[async_std::main]
async fn main() {
    logging::init();
    tracing::debug!("starting action");

    let opt = Opt::parse();
    match apply(&opt).await {
        Ok(cmd::apply::Outcome::Applied(n)) => tracing::debug!("set {n} properties"),
        Ok(cmd::apply::Outcome::NoProperties) => {}
        Err(e) => {
            let msg = error::failure_message(&e);
            // Nothing more can be reported if stdout itself is gone.
            let _ = commands::set_failed(&mut std::io::stdout(), &msg);
            std::process::exit(1);
        }
    }
}
