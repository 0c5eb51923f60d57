use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `WellPulse` - wellbeing-aware workload recommendations.
#[derive(Parser, Debug)]
#[command(name = "wellpulse")]
#[command(author = "haru0416-dev")]
#[command(version = "0.1.0")]
#[command(about = "Wellbeing-aware workload recommendations.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a history file and print the recommendation report as JSON
    Recommend {
        /// JSON file with an array of score records
        #[arg(short, long)]
        file: PathBuf,

        /// Current wellbeing score in [0, 1]
        #[arg(short, long)]
        score: f64,
    },

    /// Generate a short supportive briefing via a text-generation provider
    Brief {
        /// JSON file with an array of score records
        #[arg(short, long)]
        file: PathBuf,

        /// Current wellbeing score in [0, 1]
        #[arg(short, long)]
        score: f64,

        /// Provider to use (currently: openai)
        #[arg(short, long)]
        provider: Option<String>,

        /// Model to use
        #[arg(long)]
        model: Option<String>,

        /// Temperature (0.0 - 2.0)
        #[arg(short, long)]
        temperature: Option<f64>,
    },

    /// Start the HTTP gateway
    Gateway {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_parses_file_and_score() {
        let cli = Cli::try_parse_from([
            "wellpulse",
            "recommend",
            "--file",
            "scores.json",
            "--score",
            "0.72",
        ])
        .unwrap();
        match cli.command {
            Commands::Recommend { file, score } => {
                assert_eq!(file, PathBuf::from("scores.json"));
                assert!((score - 0.72).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn gateway_flags_are_optional() {
        let cli = Cli::try_parse_from(["wellpulse", "gateway"]).unwrap();
        match cli.command {
            Commands::Gateway { port, host } => {
                assert_eq!(port, None);
                assert_eq!(host, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn brief_accepts_provider_overrides() {
        let cli = Cli::try_parse_from([
            "wellpulse", "brief", "-f", "s.json", "-s", "0.4", "-p", "openai", "--model",
            "gpt-4o-mini",
        ])
        .unwrap();
        match cli.command {
            Commands::Brief {
                provider, model, ..
            } => {
                assert_eq!(provider.as_deref(), Some("openai"));
                assert_eq!(model.as_deref(), Some("gpt-4o-mini"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
