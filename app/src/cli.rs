use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Create BTCPay invoices from the terminal", long_about = None)]
pub struct Cli {
    /// Page to open: `/`, `/cosmic-gaming` or `/skiee-gaming`
    #[arg(default_value = "/")]
    pub route: String,

    /// Invoice API base URL. Overrides the config file and the API_URL variable.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Read configuration from this file instead of the per-user config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use the offline mock invoice client.
    #[arg(long)]
    pub mock: bool,

    /// Print the payment link instead of launching a browser.
    #[arg(long)]
    pub no_browser: bool,
}
