//! The CLI interface for screenz
//!
//! Use the `--help` flag to see the available options.
use std::io;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use screenz::{
    DisplaySet, Role, ScreenConfig,
    dialog::{ConfigDialog, DialogForm, TerminalDialog},
    default_config_path, json, query_displays, screen_number,
};
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "screenz",
    about = "Checks the attached displays against the saved screen roles."
)]
struct Opts {
    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: SubCommands,
    /// Path of the screen configuration
    #[structopt(
        short,
        long,
        global = true,
        parse(from_os_str),
        long_help = "Path of the screen configuration. Defaults to `screen.json` next to the executable."
    )]
    config: Option<PathBuf>,
    /// Use this device identifier instead of querying the attached displays
    #[structopt(
        short = "d",
        long = "device",
        global = true,
        number_of_values = 1,
        long_help = "Use this device identifier instead of querying the attached displays. \
                     Can be given multiple times; the order defines the display indices."
    )]
    devices: Vec<String>,
    /// Ask on the terminal instead of opening a window
    #[structopt(short, long, global = true)]
    terminal: bool,
    /// Output debug info
    #[structopt(short, long, global = true)]
    verbose: bool,
}

/// Subcommands to select the mode of operation
#[derive(StructOpt, Debug)]
enum SubCommands {
    /// Checks the attached displays and asks for a new assignment if they don't match
    #[structopt(alias = "check")]
    Inspect,
    /// Prints the index of the display holding a role, or -1
    Resolve {
        /// The role to look up
        #[structopt(
            short,
            long,
            long_help = "The role to look up. One of: `primary`, `prompt`, `electronic-whiteboard`."
        )]
        role: Role,
    },
    /// Lists the attached displays and their configured roles
    #[structopt(alias = "ls")]
    List {
        /// Output as JSON
        #[structopt(long)]
        json: bool,
    },
    /// Asks for a new role assignment
    Configure {
        /// Output the result as JSON
        #[structopt(long)]
        json: bool,
    },
}

/// Entry point for `screenz`.
fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    let config_path = opts.config.clone().unwrap_or_else(default_config_path);
    let config = ScreenConfig::load(&config_path).wrap_err_with(|| {
        format!("Cannot load screen configuration {}", config_path.display())
    })?;

    let display_set = live_displays(&opts.devices)?;
    log::debug!("Discovered displays:\n{}", display_set);

    match &opts.cmd {
        SubCommands::Inspect => {
            let inspection = config.inspect(&display_set);
            println!("{inspection}");

            if inspection.is_compatible() {
                println!("compatible");
                println!(
                    "primary={}, prompt={}, electronic-whiteboard={}",
                    screen_number(config.screen_index(Role::Primary, &display_set)),
                    screen_number(config.screen_index(Role::Prompt, &display_set)),
                    screen_number(
                        config.screen_index(Role::ElectronicWhiteboard, &display_set)
                    ),
                );
            } else {
                println!("incompatible");
                let form = DialogForm::new(&display_set, &config);
                let outcome = dialog(opts.terminal).show(form)?;
                println!("{outcome}");
            }
        }
        SubCommands::Resolve { role } => {
            println!("{}", screen_number(config.screen_index(*role, &display_set)));
        }
        SubCommands::List { json: as_json } => {
            if *as_json {
                let displays = display_set
                    .displays()
                    .map(|display| json::display_to_json(&display, &config))
                    .collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&displays)?);
            } else {
                for display in display_set.displays() {
                    let role = display
                        .role(&config)
                        .map_or_else(|| "-".to_string(), |role| role.to_string());
                    println!("{}\t{}\t{}", display.index(), display.name(), role);
                }
            }
        }
        SubCommands::Configure { json: as_json } => {
            let form = DialogForm::new(&display_set, &config);
            let outcome = dialog(opts.terminal).show(form)?;
            if *as_json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json::outcome_to_json(&outcome))?
                );
            } else {
                println!("{outcome}");
            }
        }
    }

    Ok(())
}

/// Returns the displays given on the command line, or the attached ones
fn live_displays(devices: &[String]) -> Result<DisplaySet> {
    if devices.is_empty() {
        return Ok(query_displays()?);
    }
    log::debug!("Using {} displays from the command line", devices.len());
    Ok(DisplaySet::from_names(devices.iter().cloned()))
}

/// Picks the dialog front-end
#[cfg_attr(not(feature = "gui"), allow(unused_variables))]
fn dialog(terminal: bool) -> Box<dyn ConfigDialog> {
    #[cfg(feature = "gui")]
    if !terminal {
        return Box::new(screenz::dialog::EguiDialog::new());
    }

    Box::new(TerminalDialog::new(io::stdin().lock(), io::stdout()))
}
