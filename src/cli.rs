use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(short, long, value_name = "FLOAT", help = "Frames per second", default_value_t = 60.0)]
    pub frame_rate: f64,

    #[arg(short, long, value_name = "SEED", help = "Seed for pipe placement, for reproducible runs")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["flappy-floes"]);
        assert_eq!(cli.frame_rate, 60.0);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["flappy-floes", "--frame-rate", "30", "-s", "99"]);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.seed, Some(99));
    }
}
