use anyhow::Result;
use readability_diff::cli::{
    self, configure_thread_pool, get_worker_count, handle_compare_command, handle_diff_command,
    handle_init_command, handle_score_command, init_logging, Commands,
};

fn main() -> Result<()> {
    let cli = cli::parse_args();

    init_logging(cli.verbosity);
    configure_thread_pool(cli.jobs);

    let parallel = !cli.no_parallel;
    if parallel {
        log::debug!("Using {} worker threads", get_worker_count(cli.jobs));
    }

    match cli.command {
        Commands::Score {
            path,
            selection,
            output,
        } => handle_score_command(&path, &selection, &output, parallel),
        Commands::Compare {
            base,
            head,
            repo,
            selection,
            output,
        } => handle_compare_command(&repo, &base, &head, &selection, &output, parallel),
        Commands::Diff {
            old,
            new,
            changes,
            output,
        } => handle_diff_command(&old, &new, &changes, &output),
        Commands::Init { force } => handle_init_command(&std::env::current_dir()?, force),
    }
}
