use std::sync::Arc;

use anyhow::{Context, Result, anyhow};

use pizza_order::{
    allocator::{InMemoryRegistry, OrderPlanner},
    cli::args_from_env,
    config::Config,
    logging::init_tracing,
};

fn main() -> Result<()> {
    let args = args_from_env()?;
    let config = Config::load(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path.display()))?;
    let logging_guard = init_tracing(&config.logging).context("failed to initialize logging")?;

    let registry = Arc::new(InMemoryRegistry::from_teams(config.team_data()));
    let planner = OrderPlanner::new(registry.clone(), registry);

    let team_names = match args.team {
        Some(team) => vec![team],
        None => config.team_names(),
    };
    let outcomes = planner.plan_all(&team_names);

    let rendered =
        serde_json::to_string_pretty(&outcomes).context("failed to render plan outcomes")?;
    println!("{rendered}");

    let failed = outcomes.iter().filter(|outcome| !outcome.is_planned()).count();
    tracing::info!(
        target: "planner",
        run_id = logging_guard.run_id(),
        teams = outcomes.len(),
        failed,
        "planning_finished"
    );
    if failed > 0 {
        return Err(anyhow!("{failed} of {} team orders could not be planned", outcomes.len()));
    }

    Ok(())
}
