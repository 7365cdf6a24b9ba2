use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use lead_grid::cli::CliArgs;
use lead_grid::messages::Msg;
use lead_grid::runtime::GridRuntime;
use lead_grid::script::{load_script, load_seed};
use lead_grid::store::MemoryStore;
use lead_grid::view::render_text;

const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<()> {
    let args = CliArgs::parse();

    lead_grid::tracing::init();

    let config = args.grid_config()?;
    let seed = load_seed(&args.seed)?;
    let script = match &args.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    tracing::info!(
        "Seeding {} leads, replaying {} actions",
        seed.len(),
        script.len()
    );

    let store = Arc::new(MemoryStore::with_leads(seed));
    let mut runtime = GridRuntime::new(store, config);
    runtime.mount();
    if !runtime.settle(LOAD_TIMEOUT) {
        anyhow::bail!("Initial load did not finish within {:?}", LOAD_TIMEOUT);
    }

    for (i, action) in script.into_iter().enumerate() {
        if !action.apply(&mut runtime) {
            tracing::warn!("Action {} left remote calls in flight", i + 1);
        }
    }

    if args.select_all {
        runtime.dispatch(Msg::select_all());
    }

    print!("{}", render_text(runtime.model()));
    runtime.unmount();

    let store = runtime.store();
    tracing::debug!("Store holds {} leads on exit", store.leads().len());
    anyhow::ensure!(
        store.subscriber_count() == 0,
        "Grid unmount did not release its insert subscription"
    );
    Ok(())
}
