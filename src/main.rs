//! rebrand's main application entry point.
//! Parses arguments, loads the branding document and runs every stage
//! against the project root.

use std::path::PathBuf;

use rebrand::{
    cli::{get_args, Args},
    config::{config_dir, load_config},
    constants::CONFIG_FILE,
    error::{default_error_handler, Result},
    fsops::{DryRunFs, FileSystem, RealFs},
    logger::init_logger,
    processor::Processor,
    report::Summary,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose, args.quiet);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates and loads the branding document
/// 2. Picks the real or dry-run file system
/// 3. Runs the stages and prints what each one changed
fn run(args: Args) -> Result<()> {
    let project_root = args.project_root;
    let config_path: PathBuf = args.config.unwrap_or_else(|| project_root.join(CONFIG_FILE));
    let config = load_config(&config_path)?;
    let config_dir = config_dir(&config_path);

    let fs: Box<dyn FileSystem> =
        if args.dry_run { Box::new(DryRunFs) } else { Box::new(RealFs) };

    let processor = Processor::new(&config, &project_root, &config_dir, &*fs);
    let reports = processor.run()?;

    for report in &reports {
        for change in &report.changes {
            println!("{change}");
        }
    }

    if args.dry_run {
        println!("Dry run: no files were modified.");
    }
    println!("{}", Summary::from_reports(&reports));
    Ok(())
}
