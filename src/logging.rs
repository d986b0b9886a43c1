//! Tracing output rendered as workflow commands.
//!
//! The runner reads stdout: `::debug::` lines only show up when step debug
//! logging is enabled, plain lines are info, `::warning::` and `::error::`
//! are annotated in the run summary.

use crate::commands::format_command;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn,gh_props=debug";

pub struct WorkflowCommands;

fn command_for(level: &Level) -> Option<&'static str> {
    match *level {
        Level::TRACE | Level::DEBUG => Some("debug"),
        Level::INFO => None,
        Level::WARN => Some("warning"),
        _ => Some("error"),
    }
}

/// Renders one already-formatted message for `level`.
pub fn render(level: &Level, message: &str) -> String {
    match command_for(level) {
        Some(cmd) => format_command(cmd, &[], message),
        None => message.to_owned(),
    }
}

impl<S, N> FormatEvent<S, N> for WorkflowCommands
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;
        writeln!(writer, "{}", render(event.metadata().level(), &message))
    }
}

/// Initialize the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .event_format(WorkflowCommands),
        )
        .init();
}
