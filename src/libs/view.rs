use super::formatter::{render, OutputFormat};
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints `tasks` in `format`, one rendering per task or a single table.
    pub fn print(tasks: &[Task], format: OutputFormat) -> Result<()> {
        if format == OutputFormat::Table {
            return Self::tasks(tasks);
        }
        for task in tasks {
            println!("{}", render(task, format)?);
        }
        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "URGENCY", "IMPORTANCE", "TAGS", "FOLDER"]);
        for task in tasks {
            let tags: Vec<&str> = task.tags.iter().map(String::as_str).collect();
            table.add_row(row![
                task.id.as_deref().unwrap_or("-"),
                task.title,
                task.urgency,
                task.importance,
                tags.join(", "),
                task.folder.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }
}
