use clap::Parser;
use common::engine::{RequestPolicy, ReversalRule};

use crate::config::{get_config_manager, Config};

const LOG_PREFIX: &str = "Snake";

#[derive(Parser, Debug)]
#[command(name = "wrap_snake", about = "Snake on a wrap-around grid")]
pub struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    pub config: Option<String>,

    /// Fixed seed for food and obstacle placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub ticks_per_second: Option<u32>,

    #[arg(long)]
    pub no_obstacles: bool,

    /// Let a 180° turn through the snake's own neck happen (and kill it)
    #[arg(long)]
    pub allow_reversal: bool,

    /// Apply the first turn pressed within a tick instead of the last one
    #[arg(long)]
    pub first_request_wins: bool,

    #[arg(long)]
    pub use_log_prefix: bool,

    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// Reads the stored config (writing defaults on first run) and applies
    /// the flags on top. Validation is left to the caller so a flag can
    /// repair an out-of-range stored value.
    pub fn load_config(&self) -> Result<Config, String> {
        let mut config = get_config_manager(self.config.as_deref()).load_or_init_unvalidated()?;
        self.apply_to(&mut config);
        Ok(config)
    }

    /// Logger prefix to use before a config could be read.
    pub fn fallback_log_prefix(&self) -> Option<String> {
        self.use_log_prefix.then(|| LOG_PREFIX.to_string())
    }

    /// Command line flags take precedence over the stored config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(ticks_per_second) = self.ticks_per_second {
            config.game.ticks_per_second = ticks_per_second;
        }
        if self.no_obstacles {
            config.game.obstacles_enabled = false;
        }
        if self.allow_reversal {
            config.game.reversal_rule = ReversalRule::Allow;
        }
        if self.first_request_wins {
            config.game.request_policy = RequestPolicy::FirstWins;
        }
        if self.use_log_prefix && config.log_prefix.is_none() {
            config.log_prefix = Some(LOG_PREFIX.to_string());
        }
        if self.verbose {
            config.verbose_logging = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::Validate;

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["wrap_snake"]);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "wrap_snake",
            "--seed",
            "5",
            "--ticks-per-second",
            "30",
            "--no-obstacles",
            "--allow-reversal",
            "--first-request-wins",
            "--use-log-prefix",
        ]);
        let mut config = Config::default();
        args.apply_to(&mut config);

        assert_eq!(config.game.seed, Some(5));
        assert_eq!(config.game.ticks_per_second, 30);
        assert!(!config.game.obstacles_enabled);
        assert_eq!(config.game.reversal_rule, ReversalRule::Allow);
        assert_eq!(config.game.request_policy, RequestPolicy::FirstWins);
        assert_eq!(config.log_prefix.as_deref(), Some("Snake"));
    }

    #[test]
    fn test_out_of_range_override_fails_validation() {
        let args = Args::parse_from(["wrap_snake", "--ticks-per-second", "500"]);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert!(config.validate().is_err());
    }

    fn write_temp_config(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("wrap_snake_cli_{}.yaml", rand::random::<u64>()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_flag_repairs_invalid_stored_tick_rate() {
        let path = write_temp_config("game:\n  ticks_per_second: 0\nscore_history_size: 10\n");
        let path_arg = path.to_string_lossy().into_owned();

        let args = Args::parse_from(["wrap_snake", "--config", &path_arg, "--ticks-per-second", "15"]);
        let config = args.load_config().unwrap();
        assert_eq!(config.game.ticks_per_second, 15);
        assert!(config.validate().is_ok());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_stored_tick_rate_without_flag_fails_validation() {
        let path = write_temp_config("game:\n  ticks_per_second: 0\nscore_history_size: 10\n");
        let path_arg = path.to_string_lossy().into_owned();

        let args = Args::parse_from(["wrap_snake", "--config", &path_arg]);
        let config = args.load_config().unwrap();
        assert!(config.validate().is_err());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_fallback_log_prefix_follows_flag() {
        assert_eq!(Args::parse_from(["wrap_snake"]).fallback_log_prefix(), None);
        assert_eq!(
            Args::parse_from(["wrap_snake", "--use-log-prefix"]).fallback_log_prefix().as_deref(),
            Some("Snake")
        );
    }
}
