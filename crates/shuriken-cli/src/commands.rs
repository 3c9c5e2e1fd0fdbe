//! Subcommand handlers. Console output is produced here, through the
//! demos' event callbacks.

use crate::cli::{
    AttackArgs, BufferedArgs, Command, FireAndForgetArgs, MutexArgs, SignalArgs, StreamingArgs,
    TargetArgs,
};
use anyhow::{Context, Result};
use shuriken::attack::{Attacker, FireAndForgetRunner, SequentialRunner};
use shuriken::channel::{BufferedChannel, SignalRunner, StreamingRunner};
use shuriken::core::Target;
use shuriken::join::JoinCountedRunner;
use shuriken::mutex::MutexCounter;
use std::time::Duration;

/// Runs the selected demonstration to completion.
pub async fn run(command: Command) -> Result<()> {
    match command {
        Command::Sequential(args) => sequential(args).await,
        Command::FireAndForget(args) => fire_and_forget(args).await,
        Command::SignalChannel(args) => signal_channel(args).await,
        Command::BufferedChannel(args) => buffered_channel(args).await,
        Command::StreamingChannel(args) => streaming_channel(args).await,
        Command::JoinCounted(args) => join_counted(args).await,
        Command::MutexCounter(args) => mutex_counter(args).await,
    }
}

fn attacker(latency: Duration) -> Attacker {
    Attacker::builder()
        .latency(latency)
        .on_attack_started(|target| println!("Throwing ninja stars at {}", target))
        .build()
}

async fn sequential(args: AttackArgs) -> Result<()> {
    let report = SequentialRunner::builder()
        .build()
        .run(attacker(args.latency()), args.targets.targets())
        .await?;
    println!("Attack without concurrency took {:.2?}", report.elapsed);
    Ok(())
}

async fn fire_and_forget(args: FireAndForgetArgs) -> Result<()> {
    let mut builder = FireAndForgetRunner::builder();
    if let Some(ms) = args.fixed_delay_ms {
        builder = builder.fixed_delay(Duration::from_millis(ms));
    }

    let report = builder
        .build()
        .run(attacker(args.attack.latency()), args.attack.targets.targets())
        .await?;

    println!(
        "Attack with concurrency (No Channels) took {:.2?}",
        report.elapsed
    );
    if !report.is_complete() {
        println!(
            "Only {} of {} attacks had finished when the driver resumed",
            report.completed, report.launched
        );
    }
    Ok(())
}

async fn signal_channel(args: SignalArgs) -> Result<()> {
    let work = attacker(Duration::from_millis(args.latency_ms));
    let report = SignalRunner::builder()
        .build()
        .run(work, Target::from(args.target))
        .await?;

    println!("{}", report.signal);
    println!(
        "Attack with concurrency (using channel) took {:.2?}",
        report.elapsed
    );
    Ok(())
}

async fn buffered_channel(args: BufferedArgs) -> Result<()> {
    let mut builder = BufferedChannel::builder()
        .capacity(args.capacity)
        .on_message_received(|message| println!("{}", message));
    if let Some(ms) = args.probe_overflow_ms {
        builder = builder.send_window(Duration::from_millis(ms));
    }
    let demo = builder.build();

    match args.probe_overflow_ms {
        Some(_) => {
            demo.probe_overflow()
                .await
                .context("send on a full buffered channel")?;
        }
        None => {
            demo.run(["First message"]).await?;
        }
    }
    Ok(())
}

async fn streaming_channel(args: StreamingArgs) -> Result<()> {
    StreamingRunner::builder()
        .rounds(args.rounds)
        .max_score(args.max_score)
        .seed(args.seed)
        .on_score_received(|_, score| println!("You scored: {}", score))
        .build()
        .run()
        .await?;
    Ok(())
}

async fn join_counted(args: TargetArgs) -> Result<()> {
    JoinCountedRunner::builder()
        .on_target_attacked(|target| println!("Attacked evil ninja: {}", target))
        .on_mission_completed(|_| println!("Mission Completed!"))
        .build()
        .run(args.targets())
        .await?;
    Ok(())
}

async fn mutex_counter(args: MutexArgs) -> Result<()> {
    MutexCounter::builder()
        .tasks(args.tasks)
        .mode(args.mode())
        .hold(Duration::from_micros(args.hold_us))
        .on_finished(|report| println!("Result Count is: {}", report.observed))
        .build()
        .run()
        .await?;
    Ok(())
}
