use crate::prelude::*;
use clap::Parser;

mod center;
mod error;
mod jenkins;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Report the Jenkins core releases that are newer than the installed one"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// URL of the Jenkins instance used to discover the installed version
    #[clap(long, env = "JENKINS_URL", global = true)]
    jenkins_url: Option<String>,

    /// Jenkins user name
    #[clap(long, env = "JENKINS_USER", global = true)]
    jenkins_user: Option<String>,

    /// Jenkins API token
    #[clap(long, env = "JENKINS_TOKEN", global = true, hide_env_values = true)]
    jenkins_token: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "JCENTER_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Jenkins core release operations
    Center(crate::center::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Center(sub_app) => crate::center::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
