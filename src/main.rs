use anyhow::Result;
use household_energy_rl::{config::Config, evaluation, telemetry::init_tracing};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;
    info!(
        num_households = cfg.household.num_households,
        horizon_days = cfg.household.horizon_days,
        episodes = cfg.training.episodes,
        "starting household energy simulation"
    );

    for season in cfg.household.seasons.clone() {
        info!(%season, "training agent");
        let comparison = evaluation::run_season(&cfg, season)?;

        info!(
            %season,
            trained_total_cost = comparison.trained.total_cost,
            random_total_cost = comparison.random.total_cost,
            baseline_total_cost = comparison.baseline.total_cost,
            cost_reduction_vs_random = comparison.trained_vs_random.total_cost,
            "season complete"
        );

        let json = serde_json::to_string_pretty(&comparison)?;
        println!("{json}");

        if let Some(dir) = &cfg.report.output_dir {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(comparison.artifact_name());
            std::fs::write(&path, &json)?;
            info!(path = %path.display(), "report written");
        }
    }

    Ok(())
}
