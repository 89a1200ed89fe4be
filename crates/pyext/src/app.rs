use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("pyext")
        .about("Activate pyext services and query its public extension API")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Global settings file (defaults to $PYEXT_CONFIG, then the user config dir)")
                .value_parser(value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("workspace")
                .long("workspace")
                .short('w')
                .help("Workspace folder; repeat for multi-root workspaces")
                .value_parser(value_parser!(std::path::PathBuf))
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("extension-root")
                .long("extension-root")
                .help("Extension install directory containing bundled tools")
                .value_parser(value_parser!(std::path::PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("exec-details")
                .about("Show how the selected interpreter is invoked")
                .arg(
                    Arg::new("resource")
                        .long("resource")
                        .help("File or folder to resolve settings for")
                        .value_parser(value_parser!(std::path::PathBuf)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("launcher-command")
                .about("Print the arguments that start a remote debug adapter")
                .arg(
                    Arg::new("host")
                        .long("host")
                        .help("Host the adapter listens on")
                        .default_value("localhost"),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .help("Port the adapter listens on")
                        .required(true)
                        .value_parser(value_parser!(u16)),
                )
                .arg(
                    Arg::new("no-wait")
                        .long("no-wait")
                        .help("Do not wait for a debugger to attach before running")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("debugger-path").about("Print the bundled debugger package path"))
        .subcommand(Command::new("ready").about("Activate and report whether activation succeeded"))
}
