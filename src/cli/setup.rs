//! Runtime setup: logging and the rayon thread pool.

use log::LevelFilter;

/// Rayon thread stack size (8MB for deeply nested document trees)
const RAYON_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Map the `-v` count to a log level. `RUST_LOG`, when set, takes precedence.
pub fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();

    if let Err(e) = result {
        eprintln!("Note: Logger already initialized: {}", e);
    }
}

fn thread_pool_builder(jobs: usize) -> rayon::ThreadPoolBuilder {
    let builder = rayon::ThreadPoolBuilder::new().stack_size(RAYON_STACK_SIZE);
    if jobs > 0 {
        builder.num_threads(jobs)
    } else {
        builder
    }
}

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    if let Err(e) = thread_pool_builder(jobs).build_global() {
        eprintln!("Note: Thread pool already configured: {}", e);
    }
}

/// Get the number of worker threads to use
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}
