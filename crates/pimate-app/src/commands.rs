//! Subcommand handlers. Each returns the process exit code.

use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use pimate_client::{BaseUrl, CommandDispatcher, MetricsPoller, ReqwestTransport, Transport};
use pimate_common::{
    ActionId, CommandOutcome, CommandRequest, Event, EventBus, Notification, NotificationLevel,
    PimateError,
};
use pimate_config::PimateConfig;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use crate::cli::Command;

pub async fn execute(command: Command, config: &PimateConfig) -> Result<ExitCode, PimateError> {
    match command {
        Command::Watch { interval_ms, count } => {
            let interval = interval_ms
                .map(|ms| Duration::from_millis(u64::from(ms)))
                .unwrap_or_else(|| config.poll_interval());
            watch(config, interval, count).await
        }
        Command::Run { action } => run(config, action).await,
        Command::Volume { direction } => volume(config, &direction).await,
        Command::Open { target } => open(config, &target),
        Command::Actions => {
            print!("{}", format_actions());
            Ok(ExitCode::SUCCESS)
        }
        Command::Links => {
            print!("{}", format_links(config));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn connect(config: &PimateConfig) -> Result<(Arc<dyn Transport>, BaseUrl), PimateError> {
    let base = BaseUrl::parse(&config.server.base_url)?;
    let transport = ReqwestTransport::new(config.connect_timeout(), config.request_timeout())?;
    Ok((Arc::new(transport), base))
}

async fn watch(
    config: &PimateConfig,
    interval: Duration,
    count: Option<usize>,
) -> Result<ExitCode, PimateError> {
    let (transport, base) = connect(config)?;
    let bus = EventBus::new(64);
    let mut events = bus.subscribe();

    let updates = bus.sender();
    let failures = bus.sender();
    let handle = MetricsPoller::new(transport, &base).start(
        interval,
        move |snapshot| {
            let _ = updates.send(Event::SnapshotUpdated(snapshot));
        },
        move |error| {
            let _ = failures.send(Event::PollFailed(error));
        },
    )?;

    pump_events(&mut events, tokio::signal::ctrl_c(), count).await;

    handle.stop();
    bus.publish(Event::Shutdown);
    Ok(ExitCode::SUCCESS)
}

/// Print poller events until `shutdown` resolves, the bus closes or `count`
/// snapshots have been shown. Returns the number of snapshots printed.
async fn pump_events<F: Future>(
    events: &mut broadcast::Receiver<Event>,
    shutdown: F,
    count: Option<usize>,
) -> usize {
    tokio::pin!(shutdown);
    let mut seen = 0usize;
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("interrupted");
                break;
            }
            event = events.recv() => match event {
                Ok(Event::SnapshotUpdated(snapshot)) => {
                    println!("{snapshot}");
                    seen += 1;
                    if count.is_some_and(|n| seen >= n) {
                        break;
                    }
                }
                Ok(Event::PollFailed(error)) => {
                    print_notification(&Notification::from_poll_error(&error));
                }
                Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "event consumer fell behind");
                }
            },
        }
    }
    seen
}

async fn run(config: &PimateConfig, action: ActionId) -> Result<ExitCode, PimateError> {
    let (transport, base) = connect(config)?;
    let dispatcher = CommandDispatcher::new(transport, base);
    match dispatcher.dispatch(CommandRequest::new(action)).await {
        Some(outcome) => Ok(report(&outcome)),
        None => {
            println!("{} sent.", action.label());
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn volume(config: &PimateConfig, direction: &str) -> Result<ExitCode, PimateError> {
    let (transport, base) = connect(config)?;
    let dispatcher = CommandDispatcher::new(transport, base);
    Ok(dispatcher
        .adjust_volume(direction)
        .await
        .map_or(ExitCode::SUCCESS, |outcome| report(&outcome)))
}

fn open(config: &PimateConfig, target: &str) -> Result<ExitCode, PimateError> {
    let url = resolve_link(config, target);
    pimate_platform::open_url(url)?;
    println!("Opened {url}");
    Ok(ExitCode::SUCCESS)
}

/// A configured link name maps to its URL; anything else is taken as a URL.
fn resolve_link<'a>(config: &'a PimateConfig, target: &'a str) -> &'a str {
    config
        .link(target)
        .map_or(target, |link| link.url.as_str())
}

fn report(outcome: &CommandOutcome) -> ExitCode {
    print_notification(&Notification::from_outcome(outcome));
    if outcome.succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_notification(notification: &Notification) {
    match notification.level {
        NotificationLevel::Info => println!("{}: {}", notification.title, notification.body),
        NotificationLevel::Error => eprintln!("{}: {}", notification.title, notification.body),
    }
}

fn format_actions() -> String {
    ActionId::ALL
        .iter()
        .map(|action| format!("{:<20} {}\n", action.as_str(), action.label()))
        .collect()
}

fn format_links(config: &PimateConfig) -> String {
    config
        .links
        .iter()
        .map(|link| format!("{:<12} {:<12} {}\n", link.name, link.display_label(), link.url))
        .collect()
}
