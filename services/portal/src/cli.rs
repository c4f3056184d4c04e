use crate::demo::{run_demo, run_roster, DemoArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hyrind::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HYRIND Portal",
    about = "Serve the HYRIND placement portal or explore its seed data from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the candidate roster as CSV
    Roster(RosterArgs),
    /// Walk the admin, recruiter and candidate flows against a fresh store
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster(args) => run_roster(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["hyrind-portal"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn demo_accepts_a_pinned_date() {
        let cli = Cli::try_parse_from(["hyrind-portal", "demo", "--today", "2024-02-01"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.today.map(|date| date.to_string()).as_deref(), Some("2024-02-01"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn billing_cycle_must_be_positive() {
        assert!(
            Cli::try_parse_from(["hyrind-portal", "demo", "--billing-cycle-days", "0"]).is_err()
        );

        let cli = Cli::try_parse_from(["hyrind-portal", "demo", "--billing-cycle-days", "14"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.billing_cycle_days, 14),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Cli::try_parse_from(["hyrind-portal", "demo", "--today", "02/01/2024"]).is_err());
    }
}
