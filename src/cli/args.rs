use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config YAML file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging for internal details
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration
    Show,
    /// Run the queue without the web display and print the result
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of guests to admit
    #[arg(long, default_value_t = 6)]
    pub guests: usize,

    /// Number of serves to perform after admitting
    #[arg(long, default_value_t = 3)]
    pub serve: usize,

    /// Make every Nth guest a VIP
    #[arg(long)]
    pub vip_every: Option<usize>,

    /// Theme id used as greeting context
    #[arg(long)]
    pub theme: Option<String>,

    /// Seed for the guest roster
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_display() {
        let cli = Cli::parse_from(["cinema-queue", "--debug"]);
        assert!(cli.debug);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_simulate_args() {
        let cli = Cli::parse_from([
            "cinema-queue",
            "simulate",
            "--guests",
            "4",
            "--vip-every",
            "2",
            "--seed",
            "9",
            "--config",
            "cinema.yaml",
        ]);
        match cli.command {
            Some(Commands::Simulate(args)) => {
                assert_eq!(args.guests, 4);
                assert_eq!(args.serve, 3);
                assert_eq!(args.vip_every, Some(2));
                assert_eq!(args.seed, Some(9));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.config, Some(PathBuf::from("cinema.yaml")));
    }
}
