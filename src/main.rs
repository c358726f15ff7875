use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mingit::areas::repository::Repository;
use mingit::commands::plumbing::cat_file::CatFileMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mingit",
    version = "0.1.0",
    about = "A minimal content addressable object store",
    long_about = "Stores blobs, trees and commits in the git object database format: \
    SHA-1 addressed, zlib compressed, under .git/objects.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "MINGIT_ROOT",
        help = "Repository root (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "Creates the .git/objects and .git/refs directories and a HEAD \
        pointing at the default branch, in the current directory or at the given path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content, type or size of an object"
    )]
    CatFile {
        #[arg(short = 'p', group = "mode", help = "Pretty-print the object payload")]
        pretty: bool,
        #[arg(short = 't', group = "mode", help = "Print the object type")]
        object_type: bool,
        #[arg(short = 's', group = "mode", help = "Print the payload size")]
        size: bool,
        #[arg(index = 1, help = "The object SHA")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file as a blob and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "ls-tree", about = "List the contents of a tree object")]
    LsTree {
        #[arg(long, help = "Only print entry names")]
        name_only: bool,
        #[arg(short, help = "Recurse into subtrees")]
        recursive: bool,
        #[arg(index = 1, help = "The tree (or commit) SHA")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Store a directory as tree objects and print the root tree SHA"
    )]
    WriteTree {
        #[arg(index = 1, help = "Directory to snapshot (defaults to the repository root)")]
        path: Option<PathBuf>,
    },
    #[command(name = "commit-tree", about = "Create a commit object for a tree")]
    CommitTree {
        #[arg(index = 1, help = "The tree SHA")]
        tree: String,
        #[arg(short, long, help = "The parent commit SHA")]
        parent: Option<String>,
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { path } => {
            let path = path.map(|path| root.join(path)).unwrap_or(root);
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
            let repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init().await?
        }
        Commands::CatFile {
            pretty: _,
            object_type,
            size,
            sha,
        } => {
            let repository = Repository::new(&root, Box::new(std::io::stdout()))?;
            let mode = if object_type {
                CatFileMode::Type
            } else if size {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };

            repository.cat_file(&sha, mode)?
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::new(&root, Box::new(std::io::stdout()))?;
            let file = std::env::current_dir()?.join(file);

            repository.hash_object(&file, write).await?
        }
        Commands::LsTree {
            name_only,
            recursive,
            sha,
        } => {
            let repository = Repository::new(&root, Box::new(std::io::stdout()))?;

            repository.ls_tree(&sha, name_only, recursive)?
        }
        Commands::WriteTree { path } => {
            let repository = Repository::new(&root, Box::new(std::io::stdout()))?;
            let path = path.map(|path| std::env::current_dir().map(|pwd| pwd.join(path))).transpose()?;

            repository.write_tree(path.as_deref()).await?
        }
        Commands::CommitTree {
            tree,
            parent,
            message,
        } => {
            let repository = Repository::new(&root, Box::new(std::io::stdout()))?;

            repository.commit_tree(&tree, parent.as_deref(), &message)?
        }
    }

    Ok(())
}
