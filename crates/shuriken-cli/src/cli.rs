//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use shuriken::channel::MAX_CAPACITY;
use shuriken::core::{default_targets, Target};
use shuriken::mutex::CounterMode;
use std::time::Duration;

/// Upper bound on `--rounds`; every received score is kept in memory.
pub const MAX_ROUNDS: usize = 1_000_000;

/// Run one concurrency demonstration and print what it observed.
#[derive(Parser, Debug)]
#[command(name = "shuriken")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per demonstration.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Attack every target one after another
    Sequential(AttackArgs),
    /// Launch one detached task per target and wait (by join or fixed delay)
    FireAndForget(FireAndForgetArgs),
    /// Attack one target on a worker and block on its completion signal
    SignalChannel(SignalArgs),
    /// Send into a bounded channel before anyone receives
    BufferedChannel(BufferedArgs),
    /// Stream random scores through a channel until it closes
    StreamingChannel(StreamingArgs),
    /// Attack every target concurrently behind a join counter
    JoinCounted(TargetArgs),
    /// Increment a shared counter from many tasks
    MutexCounter(MutexArgs),
}

/// Positional target names shared by the attack subcommands.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Targets to attack [default: Tommy Jony Bobby Andy]
    #[arg(value_name = "TARGETS")]
    pub targets: Vec<String>,
}

impl TargetArgs {
    /// Returns the named targets, or the four default ninjas when none were given.
    pub fn targets(&self) -> Vec<Target> {
        if self.targets.is_empty() {
            default_targets()
        } else {
            self.targets.iter().map(|t| Target::from(t.as_str())).collect()
        }
    }
}

/// Targets plus the simulated attack latency.
#[derive(Args, Debug)]
pub struct AttackArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Simulated duration of one attack
    #[arg(long, default_value_t = 1000)]
    pub latency_ms: u64,
}

impl AttackArgs {
    /// Returns `--latency-ms` as a duration.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Arguments for the fire-and-forget demo.
#[derive(Args, Debug)]
pub struct FireAndForgetArgs {
    #[command(flatten)]
    pub attack: AttackArgs,

    /// Sleep this long instead of joining the tasks (known to miss late tasks)
    #[arg(long, value_name = "MS")]
    pub fixed_delay_ms: Option<u64>,
}

/// Arguments for the signal channel demo.
#[derive(Args, Debug)]
pub struct SignalArgs {
    /// Target to attack
    #[arg(default_value = "Tommy")]
    pub target: String,

    /// Simulated duration of the attack
    #[arg(long, default_value_t = 1000)]
    pub latency_ms: u64,
}

/// Arguments for the buffered channel demo.
#[derive(Args, Debug)]
pub struct BufferedArgs {
    /// Channel capacity
    #[arg(long, default_value_t = 1, value_parser = parse_capacity)]
    pub capacity: usize,

    /// Fill the buffer, then try one more send, giving up after MS
    #[arg(long, value_name = "MS")]
    pub probe_overflow_ms: Option<u64>,
}

/// Arguments for the streaming channel demo.
#[derive(Args, Debug)]
pub struct StreamingArgs {
    /// Number of scores to produce
    #[arg(long, default_value_t = 3, value_parser = parse_rounds)]
    pub rounds: usize,

    /// Scores are drawn from 0..MAX_SCORE
    #[arg(long, default_value_t = 10)]
    pub max_score: u32,

    /// Seed for reproducible scores
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the mutex counter demo.
#[derive(Args, Debug)]
pub struct MutexArgs {
    /// Number of concurrent increment tasks
    #[arg(long, default_value_t = 1000)]
    pub tasks: usize,

    /// Sleep this long instead of joining the tasks (known to undercount)
    #[arg(long, value_name = "MS", conflicts_with = "unlocked")]
    pub fixed_delay_ms: Option<u64>,

    /// Increment without the lock (loses updates)
    #[arg(long)]
    pub unlocked: bool,

    /// Time each task spends inside its critical section
    #[arg(long, default_value_t = 0)]
    pub hold_us: u64,
}

impl MutexArgs {
    /// Maps `--unlocked` and `--fixed-delay-ms` onto a counter mode.
    pub fn mode(&self) -> CounterMode {
        match (self.unlocked, self.fixed_delay_ms) {
            (true, _) => CounterMode::Unlocked,
            (false, Some(ms)) => CounterMode::FixedDelay(Duration::from_millis(ms)),
            (false, None) => CounterMode::Joined,
        }
    }
}

fn parse_bounded(s: &str, min: usize, max: usize) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|err| format!("{err}"))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in {min}..={max}"))
    }
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    parse_bounded(s, 1, MAX_CAPACITY)
}

fn parse_rounds(s: &str) -> Result<usize, String> {
    parse_bounded(s, 0, MAX_ROUNDS)
}
