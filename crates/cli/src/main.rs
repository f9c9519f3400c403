//! scrollsteer - Scroll-Wheel Steering Emulator
//!
//! Turns mouse scroll gestures into sustained synthetic `a`/`d` key input
//! so games with digital-only steering get an approximately analog
//! response. Scroll up deepens right steering, scroll down deepens left,
//! and numpad 0 arms/disarms the whole thing.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod config;
mod devices;
mod error;
mod listener;
mod sink;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam::channel;
use crossbeam::select;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scrollsteer_actuation::SteeringEngine;
use scrollsteer_steering::SteeringPolicy;

use crate::config::{Overrides, RunConfig};
use crate::sink::UinputKeySink;

#[derive(Parser)]
#[command(name = "scrollsteer")]
#[command(about = "Scroll-wheel steering emulator - analog steering on a digital keyboard")]
#[command(version)]
#[command(long_about = "
scrollsteer listens to a mouse scroll wheel and drives a virtual keyboard:
scroll up steers right, scroll down steers left, and the accumulated level
modulates how long the mapped key ('a' or 'd') is held each period.
Numpad 0 toggles the emulator on and off; Ctrl-C exits.

Reading /dev/input and creating a uinput device usually requires membership
in the 'input' group or root.
")]
struct Cli {
    /// Transition/timing policy
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Input device delivering scroll events (auto-discovered if omitted)
    #[arg(long, value_name = "PATH")]
    scroll_device: Option<PathBuf>,

    /// Keyboard device watched for the numpad-0 toggle (auto-discovered if omitted)
    #[arg(long, value_name = "PATH")]
    keyboard_device: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH", env = "SCROLLSTEER_CONFIG")]
    config: Option<PathBuf>,

    /// List candidate input devices and exit
    #[arg(long)]
    list_devices: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// CLI surface for [`SteeringPolicy`].
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PolicyArg {
    /// Accumulating scroll steps modulate a press/release duty cycle
    DutyCycle,
    /// Instantaneous scroll magnitude modulates a discrete tap rate
    TapRate,
}

impl From<PolicyArg> for SteeringPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::DutyCycle => SteeringPolicy::DutyCycle,
            PolicyArg::TapRate => SteeringPolicy::TapRate,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_devices {
        return devices::print_devices();
    }

    let config = RunConfig::resolve(
        cli.config.as_deref(),
        Overrides {
            policy: cli.policy.map(Into::into),
            scroll_device: cli.scroll_device,
            keyboard_device: cli.keyboard_device,
        },
    )?;

    run(config)
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(config: RunConfig) -> Result<()> {
    let sink = UinputKeySink::create(&config.device_name, config.left_key, config.right_key)
        .context("creating the uinput virtual keyboard")?;
    let engine = Arc::new(SteeringEngine::new(sink, config.policy));

    let scroll_device = devices::open_scroll_device(config.scroll_device.as_deref())?;
    let keyboard_device = devices::open_toggle_device(config.keyboard_device.as_deref())?;

    listener::spawn_scroll_listener(scroll_device, Arc::clone(&engine))
        .context("starting the scroll listener")?;
    listener::spawn_toggle_listener(keyboard_device, Arc::clone(&engine))
        .context("starting the toggle listener")?;

    let (interrupt_tx, interrupt_rx) = channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.try_send(());
    })
    .context("installing the interrupt handler")?;

    info!(policy = ?config.policy, "scroll up/down steers, numpad 0 toggles, ctrl-c exits");
    info!("status: DISABLED (press numpad 0 to enable)");

    let faults = engine.faults();
    select! {
        recv(interrupt_rx) -> _ => {
            info!("interrupt received, shutting down");
        }
        recv(faults) -> fault => {
            engine.shutdown();
            if let Ok(err) = fault {
                return Err(err).context("actuation fault");
            }
        }
    }

    engine.shutdown();
    Ok(())
}
