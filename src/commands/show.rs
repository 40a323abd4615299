use crate::libs::{config::Config, formatter::OutputFormat, path, task::TaskFilter, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the task to print. Without it, every task anchored to the
    /// current directory is printed
    id: Option<String>,

    /// Output format [default: from configuration]
    #[arg(short, long = "output-format", value_enum)]
    output: Option<OutputFormat>,
}

pub fn cmd(args: ShowArgs, config: &Config) -> Result<()> {
    let tasks = config.tasks();
    let found = match args.id {
        Some(id) => {
            let mut found = tasks.search(&TaskFilter::by_id(id))?;
            found.truncate(1);
            found
        }
        None => tasks.search(&TaskFilter::by_folder(path::current_dir()?))?,
    };

    View::print(&found, args.output.unwrap_or(config.show_output_format))
}
