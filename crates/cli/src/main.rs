use clap::{Parser, Subcommand};
use drafts_core::{DraftRecord, DraftService, MarkdownService, NonEmptyText};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drafts")]
#[command(about = "Generate markdown and write Jekyll drafts without running the servers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a markdown document built from a title and notes
    Generate {
        /// Document title
        #[arg(long)]
        title: String,
        /// Notes placed under the title
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Write a draft to <path>/_drafts/<title>.md
    Write {
        /// Post title
        #[arg(long)]
        title: String,
        /// Site root directory
        #[arg(long)]
        path: PathBuf,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Series name
        #[arg(long)]
        series: Option<String>,
        /// One-line summary
        #[arg(long)]
        summary: Option<String>,
        /// Post body
        #[arg(long, default_value = "", conflicts_with = "body_file")]
        body: String,
        /// Read the post body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { title, notes }) => {
            println!("{}", MarkdownService::new().generate(&title, &notes));
        }
        Some(Commands::Write {
            title,
            path,
            tags,
            categories,
            series,
            summary,
            body,
            body_file,
        }) => {
            let body = match body_file {
                Some(file) => std::fs::read_to_string(file)?,
                None => body,
            };
            let record = DraftRecord {
                title: NonEmptyText::new(title)?,
                path: NonEmptyText::new(path.to_string_lossy().into_owned())?,
                tags,
                categories,
                series: series.filter(|s| !s.is_empty()),
                summary: summary.filter(|s| !s.is_empty()),
                body,
            };
            match DraftService::new().write(&record) {
                Ok(written) => println!("Draft written to: {}", written.display()),
                Err(e) => eprintln!("Error writing draft: {}", e),
            }
        }
        None => {
            println!("Use 'drafts --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write_with_repeated_tags() {
        let cli = Cli::try_parse_from([
            "drafts", "write", "--title", "Post", "--path", "/site", "--tag", "a", "--tag", "b",
            "--category", "go",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Write {
                tags, categories, ..
            }) => {
                assert_eq!(tags, vec!["a", "b"]);
                assert_eq!(categories, vec!["go"]);
            }
            _ => panic!("expected write command"),
        }
    }

    #[test]
    fn test_body_and_body_file_conflict() {
        let result = Cli::try_parse_from([
            "drafts", "write", "--title", "Post", "--path", "/site", "--body", "x",
            "--body-file", "body.md",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_generate_defaults_notes() {
        let cli = Cli::try_parse_from(["drafts", "generate", "--title", "T"]).unwrap();
        match cli.command {
            Some(Commands::Generate { title, notes }) => {
                assert_eq!(title, "T");
                assert_eq!(notes, "");
            }
            _ => panic!("expected generate command"),
        }
    }
}
