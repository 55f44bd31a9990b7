use crate::commands::{
    run_criteria, run_demo, run_draft_init, run_report, run_score, CriteriaArgs, DemoArgs,
    DraftInitArgs, ReportArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ultracertify::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "UltraCertify",
    about = "Score NEST and NEST PLUS green building self-certifications from the command line",
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
    /// List the criteria that apply to a standard and building type
    Criteria(CriteriaArgs),
    /// Create or manage saved selection drafts
    Draft {
        #[command(subcommand)]
        command: DraftCommand,
    },
    /// Score a saved draft
    Score(ScoreArgs),
    /// Render a certification report for a saved draft
    Report(ReportArgs),
    /// Score and report a built-in sample project
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DraftCommand {
    /// Write an empty draft for a standard and building type
    Init(DraftInitArgs),
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
        Command::Criteria(args) => run_criteria(args),
        Command::Draft {
            command: DraftCommand::Init(args),
        } => run_draft_init(args),
        Command::Score(args) => run_score(args),
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["ultracertify"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn criteria_arguments_parse_program_names() {
        let cli = Cli::try_parse_from([
            "ultracertify",
            "criteria",
            "--standard",
            "nest-plus",
            "--building-type",
            "existing",
        ])
        .expect("parses");
        assert!(matches!(cli.command, Some(Command::Criteria(_))));

        assert!(Cli::try_parse_from([
            "ultracertify",
            "criteria",
            "--standard",
            "LEED",
            "--building-type",
            "new",
        ])
        .is_err());
    }
}
