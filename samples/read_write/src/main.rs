//! read-write-sample
//!
//! Describes a few Read/Write programs once and runs each of them through
//! several interpreters. All output goes through `tracing`; set `RUST_LOG`
//! to change what is shown (for example `RUST_LOG=liftfree=trace` to see
//! every interpreted layer).
//!
//! ```bash
//! cargo run --bin read-write-sample
//! ```

use liftfree::control::FreeKind;
use liftfree::effect::StateKind;
use liftfree::typeclass::{IdentityKind, VecKind, bind, pure};
use liftfree::{is_functor, is_monad};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use read_write_sample::interpreter::{Console, Execute, Simulate, replay, simulate};
use read_write_sample::programs::{double_and_read, echo, sum_reads, write_all, write_then_read};
use read_write_sample::{ReadWriteKind, write};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "read_write_sample=info,liftfree=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    list_monad();
    capabilities();
    interpreters();
}

fn list_monad() {
    let single: Vec<i32> = pure::<VecKind, _>(3);
    tracing::info!(?single, "pure(3) in the list monad");

    let branched = bind::<VecKind, _, _, _>(vec![1, 2, 3], |x: i32| vec![x, x * 10]);
    tracing::info!(?branched, "bind([1, 2, 3], x => [x, x * 10])");
}

fn capabilities() {
    tracing::info!(
        functor = is_functor!(VecKind),
        monad = is_monad!(VecKind),
        "VecKind"
    );
    tracing::info!(
        functor = is_functor!(ReadWriteKind),
        monad = is_monad!(ReadWriteKind),
        "ReadWriteKind"
    );
    tracing::info!(
        functor = is_functor!(FreeKind<ReadWriteKind>),
        monad = is_monad!(FreeKind<ReadWriteKind>),
        "Free over ReadWriteKind"
    );
}

fn interpreters() {
    let program = write_then_read(5);
    tracing::info!(?program, "described");

    let (value, log) = program
        .clone()
        .fold_free::<StateKind<Vec<i32>>, _>(Simulate)
        .run(Vec::new());
    tracing::info!(value, ?log, "simulated");

    let (value, log) = replay(program.clone());
    tracing::info!(value, ?log, "replayed");

    let result = program.fold_free::<IdentityKind, _>(Console { input: 42 });
    tracing::info!(value = result.into_inner(), "ran on console");

    let (value, log) = simulate(write_all(&[1, 2, 3]));
    tracing::info!(value, ?log, "wrote three values");

    let executor = Execute::new(7, 2);
    match executor.execute(double_and_read()) {
        Ok(value) => tracing::info!(value, written = ?executor.written(), "executed"),
        Err(error) => tracing::error!(%error, "execution failed"),
    }

    let overflowing = echo().then(write(1)).then(write(2));
    let executor = Execute::new(7, 2);
    match executor.execute(overflowing) {
        Ok(()) => tracing::info!(written = ?executor.written(), "executed"),
        Err(error) => tracing::error!(%error, written = ?executor.written(), "execution failed"),
    }

    let (total, _) = replay(write(4).then(sum_reads(100)));
    tracing::info!(total, "summed reads");
}
