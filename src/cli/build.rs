use clap::Parser;

/// Arguments for the setup and bundle commands
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                   Build with the defaults from appstrap.yaml:\n    appstrap bundle\n\n\
                   Build under another name:\n    appstrap bundle --name Capture")]
pub struct BuildArgs {
    /// Application name, without the .app suffix (overrides app_name in appstrap.yaml)
    #[arg(long, short = 'n', value_name = "NAME")]
    pub name: Option<String>,
}
