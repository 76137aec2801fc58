use case_core::logging::init_logging;
use case_core::{CaseDirectoryBuilder, CoreResult, ScaffoldConfig};
use clap::Parser;

/// Create an evidence folder structure for a fraud case.
#[derive(Debug, Parser)]
#[command(name = "case_scaffold", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Case identifier; defaults to CASE_<YYYYMMDD_HHMMSS>.
    #[arg(allow_hyphen_values = true)]
    case_id: Option<String>,

    /// Initials used in the case folder name; defaults to USER.
    #[arg(allow_hyphen_values = true)]
    user_initials: Option<String>,

    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    _ignored: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("case_scaffold error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CoreResult<()> {
    let cfg = ScaffoldConfig::from_env()?;
    init_logging(&cfg.log)?;
    tracing::debug!(?cfg, "loaded configuration");

    let report = CaseDirectoryBuilder::from_config(&cfg)
        .build(cli.case_id.as_deref(), cli.user_initials.as_deref())?;
    let location = report.root.display();

    println!("✅ Case directory created: {}", location);
    println!("📁 Directory structure ready for evidence collection");
    if !report.skipped_files.is_empty() {
        println!(
            "↩️  Kept {} existing file(s) unchanged",
            report.skipped_files.len()
        );
    }

    println!("\n📋 Case directory created successfully!");
    println!("📁 Location: {}", location);
    println!("📖 Check the README.md files in each folder for guidance");
    println!("📊 Use evidence_log.csv to track all collected evidence");
    println!("📝 Follow FILE_NAMING_GUIDE.txt for consistent naming");
    println!("\n🚀 You're ready to start collecting evidence!");
    Ok(())
}
