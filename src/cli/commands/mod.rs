use clap::{
    Arg, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("cityscope")
        .about("City information platform API client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("api-url")
                .short('u')
                .long("api-url")
                .help("Base URL of the city platform API")
                .default_value("http://localhost:8080")
                .env("CITYSCOPE_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("CITYSCOPE_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new("discussions").about("List community discussions"))
        .subcommand(Command::new("members").about("List community members"))
        .subcommand(
            Command::new("traffic")
                .about("Traffic conditions, citywide or for one location")
                .arg(Arg::new("location").help("Location id")),
        )
        .subcommand(
            Command::new("environmental")
                .about("Environmental readings, citywide or for one location")
                .arg(Arg::new("location").help("Location id")),
        )
        .subcommand(Command::new("transit").about("Transit network overview"))
        .subcommand(
            Command::new("route")
                .about("Transit route detail")
                .arg(Arg::new("id").help("Route id").required(true)),
        )
        .subcommand(
            Command::new("vehicle")
                .about("Live transit vehicle position")
                .arg(Arg::new("id").help("Vehicle id").required(true)),
        )
        .subcommand(Command::new("alerts").about("Active transit service alerts"))
        .subcommand(
            Command::new("flags")
                .about("List moderation flags")
                .arg(
                    Arg::new("status")
                        .short('s')
                        .long("status")
                        .help("Filter by status, \"all\" disables the filter")
                        .default_value("all"),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and show the landing destination")
                .arg(Arg::new("email").help("Account email").required(true))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Account password")
                        .env("CITYSCOPE_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
}
