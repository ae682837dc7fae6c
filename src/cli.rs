use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only inspects or edits configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_site_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Site news renderer
///
/// Loads the site's news.json, runs the page through its startup and the
/// given navigation events, and prints the resulting page as HTML.
///
/// Recognised fragments:
/// - #news shows the news list on the home page
/// - #news/<slug> shows a single article
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Root URL of the site; news is fetched from <URL>/news.json.
    /// Overrides the configured site URL.
    #[arg(long = "site-url", value_name = "URL", help_heading = "Source")]
    pub site_url: Option<String>,

    /// Read news from a local JSON file instead of the site.
    #[arg(long = "news-file", value_name = "PATH", help_heading = "Source")]
    pub news_file: Option<String>,

    /// Fragment in the address bar when the page loads, e.g. "#news/spring-sale".
    #[arg(long = "fragment", short = 'f', default_value = "", help_heading = "Navigation")]
    pub fragment: String,

    /// Fragment to navigate to after load. Repeat to navigate several times.
    #[arg(long = "navigate", short = 'n', value_name = "FRAGMENT", help_heading = "Navigation")]
    pub navigate: Vec<String>,

    /// Click the back-to-list control after the other navigation.
    #[arg(long = "back", help_heading = "Navigation")]
    pub back: bool,

    /// Scroll the window to this offset after navigation.
    #[arg(long = "scroll", value_name = "Y", help_heading = "Navigation")]
    pub scroll: Option<f64>,

    /// Read fragments from stdin, one per line, until end of input.
    #[arg(long = "stdin", help_heading = "Navigation")]
    pub stdin: bool,

    /// Write the HTML to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH", help_heading = "Output")]
    pub output: Option<String>,

    /// Store a site URL in the config file.
    #[arg(long = "set-site-url", value_name = "URL", help_heading = "Configuration")]
    pub new_site_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
