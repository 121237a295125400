//! Training loop and fixed-length evaluation rollouts.

use tracing::{debug, info};

use super::policy::RolloutPolicy;
use super::report::RolloutSummary;
use crate::rl::QLearningAgent;
use crate::simulation::HouseholdSimulator;

/// Run sequential training episodes against the simulator.
///
/// The agent's Q-table is carried across episodes and never reset between
/// them; each episode runs the full horizon to completion before the next
/// begins.
pub fn train(agent: &mut QLearningAgent, env: &mut HouseholdSimulator, episodes: u32) {
    for episode in 0..episodes {
        let mut state = env.reset();
        let mut episode_reward = 0.0;

        loop {
            let action = agent.choose_action(&state);
            let outcome = env.step(action);
            agent.learn(&state, action, outcome.reward, &outcome.state);
            episode_reward += outcome.reward;
            state = outcome.state;
            if outcome.done {
                break;
            }
        }

        debug!(episode, episode_reward, "episode complete");
        if (episode + 1) % 200 == 0 {
            info!(episode = episode + 1, total = episodes, "training progress");
        }
    }
}

/// Run one full-horizon rollout under the given policy and aggregate hourly
/// energy and cost into run-level totals and averages.
pub fn rollout<P: RolloutPolicy>(env: &mut HouseholdSimulator, policy: &mut P) -> RolloutSummary {
    let mut state = env.reset();
    let mut total_energy_kwh = 0.0;
    let mut total_cost = 0.0;
    let mut hours = 0u32;

    loop {
        let hour = env.clock().hour();
        let action = policy.select(&state, hour);
        let outcome = env.step(action);

        total_energy_kwh += outcome.energy_kwh;
        total_cost -= outcome.reward;
        hours += 1;

        state = outcome.state;
        if outcome.done {
            break;
        }
    }

    RolloutSummary::from_totals(total_energy_kwh, total_cost, hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::evaluation::policy::{RandomPolicy, ScriptedBaseline, TrainedPolicy};
    use crate::simulation::Season;

    fn sim(season: Season) -> HouseholdSimulator {
        HouseholdSimulator::new(1, season, 90).unwrap()
    }

    fn agent_config() -> AgentConfig {
        AgentConfig {
            alpha: 0.1,
            gamma: 0.95,
            epsilon: 0.05,
            action_size: 2,
        }
    }

    #[test]
    fn test_scripted_baseline_is_deterministic() {
        let mut env = sim(Season::Winter);
        let first = rollout(&mut env, &mut ScriptedBaseline);
        let second = rollout(&mut env, &mut ScriptedBaseline);

        assert_eq!(first.total_cost, second.total_cost);
        assert_eq!(first.total_energy_kwh, second.total_energy_kwh);
    }

    #[test]
    fn test_rollout_covers_whole_horizon() {
        let mut env = sim(Season::Winter);
        let summary = rollout(&mut env, &mut ScriptedBaseline);

        let hours = f64::from(90 * 24);
        assert!((summary.avg_energy_kwh - summary.total_energy_kwh / hours).abs() < 1e-12);
        assert!((summary.avg_cost - summary.total_cost / hours).abs() < 1e-12);
        assert!(summary.total_cost > 0.0);
    }

    #[test]
    fn test_random_rollout_within_feasible_hourly_range() {
        // Winter, one household: fridge + heating draw 0.85 kWh at minimum;
        // everything on draws 0.12 + 0.24 + 0.10 + 0.75 = 1.21 kWh.
        let mut env = sim(Season::Winter);
        let summary = rollout(&mut env, &mut RandomPolicy::new(None));

        assert!(summary.avg_energy_kwh >= 0.85 - 1e-12);
        assert!(summary.avg_energy_kwh <= 1.21 + 1e-12);
    }

    #[test]
    fn test_training_then_greedy_rollout() {
        let mut env = HouseholdSimulator::new(1, Season::Winter, 2).unwrap();
        let mut agent = QLearningAgent::new(&agent_config(), Some(42));

        train(&mut agent, &mut env, 10);
        assert!(agent.q_table().is_finite());

        let summary = rollout(&mut env, &mut TrainedPolicy::new(&agent));
        // The greedy policy keeps at least the fridge and climate load going.
        assert!(summary.total_energy_kwh >= 0.85 * f64::from(2 * 24));
    }

    #[test]
    fn test_training_with_seed_is_reproducible() {
        let config = agent_config();

        let mut env_a = HouseholdSimulator::new(1, Season::Summer, 2).unwrap();
        let mut agent_a = QLearningAgent::new(&config, Some(9));
        train(&mut agent_a, &mut env_a, 5);

        let mut env_b = HouseholdSimulator::new(1, Season::Summer, 2).unwrap();
        let mut agent_b = QLearningAgent::new(&config, Some(9));
        train(&mut agent_b, &mut env_b, 5);

        let state = crate::simulation::ApplianceState::initial();
        assert_eq!(agent_a.q_table().row(&state), agent_b.q_table().row(&state));
    }
}
