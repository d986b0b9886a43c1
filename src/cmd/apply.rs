use crate::config::Config;
use crate::error::Result;
use crate::properties::FetchProperties;
use crate::sink::{Sink, Sinks};

pub const NUMBER_SET_PROPERTIES: &str = "number-set-properties";

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    NoProperties,
    Applied(usize),
}

/// Fetches the repository properties and emits those the filter accepts,
/// to the environment when `set_env` is on and to step outputs otherwise.
pub async fn run<F, E, O>(
    conf: &Config,
    fetcher: &F,
    sinks: &mut Sinks<E, O>,
) -> Result<Outcome>
where
    F: FetchProperties,
    E: Sink,
    O: Sink,
{
    let properties = fetcher.fetch(&conf.owner, &conf.repo, &conf.token).await?;

    tracing::debug!("found {} properties", properties.len());

    if properties.is_empty() {
        tracing::info!("No properties found");
        return Ok(Outcome::NoProperties);
    }

    let sink: &mut dyn Sink = if conf.set_env {
        &mut sinks.env
    } else {
        &mut sinks.output
    };

    let mut count = 0usize;
    for property in &properties {
        if !conf.properties_filter.accepts(&property.name) {
            tracing::debug!("skipping {}", property.name);
            continue;
        }
        sink.emit(&property.name, &property.value)?;
        count += 1;
    }

    sinks.output.emit(NUMBER_SET_PROPERTIES, &count.to_string())?;
    Ok(Outcome::Applied(count))
}
