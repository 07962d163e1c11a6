use clap::Parser;
use mushaf::Tab;
use mushaf::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mushaf", about = "Terminal Qur'an reader")]
struct Args {
    /// Tab to open at startup
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Override the chapter/verse API base URL
    #[arg(long)]
    surah_api: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mushaf.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("mushaf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mushaf: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.tab, args.surah_api.as_deref());

    log::info!("Mushaf starting up on tab: {:?}", resolved.start_tab);

    mushaf::tui::run(resolved)
}
