//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output::OutputMode;

#[derive(Debug, Parser)]
#[command(name = "clickup")]
#[command(version, about = "ClickUp from the command line", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = OutputMode::Human)]
    pub output: OutputMode,

    /// API token; overrides the config file
    #[arg(long, global = true, env = "CLICKUP_API_TOKEN", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Workspace (team) ID for team-scoped commands
    #[arg(long = "team", global = true, env = "CLICKUP_TEAM_ID", value_name = "TEAM_ID")]
    pub team_id: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "CLICKUP_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CLICKUP_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage credentials
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Workspaces
    #[command(subcommand)]
    Team(TeamCommand),

    /// Spaces of the workspace
    #[command(subcommand)]
    Space(SpaceCommand),

    /// Folders
    #[command(subcommand)]
    Folder(FolderCommand),

    /// Lists
    #[command(subcommand)]
    List(ListCommand),

    /// Tasks
    #[command(subcommand)]
    Task(TaskCommand),

    /// Task comments
    #[command(subcommand)]
    Comment(CommentCommand),

    /// Task attachments
    #[command(subcommand)]
    Attachment(AttachmentCommand),

    /// Webhooks of the workspace
    #[command(subcommand)]
    Webhook(WebhookCommand),

    /// Time tracking
    #[command(subcommand)]
    Time(TimeCommand),

    /// Goals of the workspace
    #[command(subcommand)]
    Goal(GoalCommand),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Store an API token in the config file
    SetKey {
        /// Personal API token (pk_...)
        key: String,

        /// Also store a default workspace ID
        #[arg(long = "default-team", value_name = "TEAM_ID")]
        default_team: Option<String>,
    },

    /// Show the user that owns the current token
    Whoami,

    /// Exchange an OAuth authorization code for an access token
    Token {
        /// OAuth application client ID
        #[arg(long)]
        client_id: String,

        /// OAuth application client secret
        #[arg(long, env = "CLICKUP_CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,

        /// Authorization code from the redirect
        #[arg(long)]
        code: String,

        /// Store the access token in the config file
        #[arg(long)]
        save: bool,
    },

    /// Print the config file location
    Path,
}

#[derive(Debug, Subcommand)]
pub enum TeamCommand {
    /// Workspaces the token can access
    List,
}

#[derive(Debug, Subcommand)]
pub enum SpaceCommand {
    /// Spaces of the workspace
    List {
        /// Show archived spaces
        #[arg(long)]
        archived: bool,
    },

    /// Show a space
    Get {
        /// Space ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Folders of a space
    List {
        /// Space ID
        space_id: String,

        /// Show archived folders
        #[arg(long)]
        archived: bool,
    },

    /// Show a folder
    Get {
        /// Folder ID
        id: String,
    },

    /// Create a folder
    Create {
        /// Space ID
        space_id: String,

        /// Folder name
        name: String,
    },

    /// Delete a folder
    Delete {
        /// Folder ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Lists of a folder, or folderless lists of a space
    List {
        /// Folder ID
        #[arg(long, conflicts_with = "space", required_unless_present = "space")]
        folder: Option<String>,

        /// Space ID, for lists outside any folder
        #[arg(long)]
        space: Option<String>,

        /// Show archived lists
        #[arg(long)]
        archived: bool,
    },

    /// Show a list
    Get {
        /// List ID
        id: String,
    },

    /// Create a list in a folder
    Create {
        /// Folder ID
        folder_id: String,

        /// List name
        name: String,

        /// List description
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a list
    Delete {
        /// List ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Tasks of a list, one page at a time
    List {
        /// List ID
        list_id: String,

        /// Page number, starting at 0
        #[arg(long)]
        page: Option<u32>,

        /// Include closed tasks
        #[arg(long)]
        include_closed: bool,

        /// Include archived tasks
        #[arg(long)]
        archived: bool,

        /// Include subtasks
        #[arg(long)]
        subtasks: bool,
    },

    /// Show a task
    Get {
        /// Task ID
        id: String,
    },

    /// Create a task
    Create {
        /// List ID
        list_id: String,

        /// Task name
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Priority: 1 urgent, 2 high, 3 normal, 4 low
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        priority: Option<u8>,

        /// Status name
        #[arg(long)]
        status: Option<String>,

        /// Assignee user ID; repeat for several
        #[arg(long = "assignee", value_name = "USER_ID")]
        assignees: Vec<i64>,

        /// Parent task ID, to create a subtask
        #[arg(long)]
        parent: Option<String>,
    },

    /// Change fields of a task
    Update {
        /// Task ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status name
        #[arg(long)]
        status: Option<String>,

        /// New priority: 1 urgent, 2 high, 3 normal, 4 low
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        priority: Option<u8>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// Comments on a task
    List {
        /// Task ID
        task_id: String,
    },

    /// Comment on a task
    Add {
        /// Task ID
        task_id: String,

        /// Comment text
        text: String,

        /// Notify everyone following the task
        #[arg(long)]
        notify_all: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AttachmentCommand {
    /// Upload a file to a task
    Upload {
        /// Task ID
        task_id: String,

        /// File to upload
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum WebhookCommand {
    /// Webhooks of the workspace
    List,

    /// Register a webhook
    Create {
        /// Delivery URL
        endpoint: String,

        /// Event to subscribe to, `*` for all; repeat for several
        #[arg(long = "event", required = true, value_name = "EVENT")]
        events: Vec<String>,

        /// Only deliver events of this space
        #[arg(long)]
        space: Option<String>,

        /// Only deliver events of this list
        #[arg(long)]
        list: Option<String>,
    },

    /// Remove a webhook
    Delete {
        /// Webhook ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TimeCommand {
    /// Time entries in a range (default: the last 30 days)
    List {
        /// Range start, epoch milliseconds
        #[arg(long, value_name = "MS")]
        start: Option<i64>,

        /// Range end, epoch milliseconds
        #[arg(long, value_name = "MS")]
        end: Option<i64>,
    },

    /// Show the running timer
    Current,

    /// Start a timer
    Start {
        /// Task to track against
        #[arg(long)]
        task: Option<String>,

        /// Entry description
        #[arg(long)]
        description: Option<String>,

        /// Mark the entry billable
        #[arg(long)]
        billable: bool,
    },

    /// Stop the running timer
    Stop,
}

#[derive(Debug, Subcommand)]
pub enum GoalCommand {
    /// Goals of the workspace
    List,

    /// Show a goal
    Get {
        /// Goal ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use clap::CommandFactory;

    const CLEARED: [(&str, Option<&str>); 4] = [
        ("CLICKUP_API_TOKEN", None),
        ("CLICKUP_TEAM_ID", None),
        ("CLICKUP_BASE_URL", None),
        ("CLICKUP_TIMEOUT", None),
    ];

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        temp_env::with_vars(CLEARED, || Cli::try_parse_from(args))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["clickup", "task", "get", "abc", "-o", "json", "--team", "42", "-vv"]).unwrap();
        assert_eq!(cli.global.output, OutputMode::Json);
        assert_eq!(cli.global.team_id.as_deref(), Some("42"));
        assert_eq!(cli.global.verbose, 2);
        assert_matches!(cli.command, Command::Task(TaskCommand::Get { id }) if id == "abc");
    }

    #[test]
    fn test_env_supplies_team() {
        let cli = temp_env::with_vars(
            [("CLICKUP_TEAM_ID", Some("from-env")), ("CLICKUP_API_TOKEN", None)],
            || Cli::try_parse_from(["clickup", "goal", "list"]),
        )
        .unwrap();
        assert_eq!(cli.global.team_id.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_flag_beats_env() {
        let cli = temp_env::with_var("CLICKUP_TEAM_ID", Some("from-env"), || {
            Cli::try_parse_from(["clickup", "--team", "from-flag", "goal", "list"])
        })
        .unwrap();
        assert_eq!(cli.global.team_id.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_list_requires_parent() {
        assert!(parse(&["clickup", "list", "list"]).is_err());
        assert!(parse(&["clickup", "list", "list", "--folder", "1", "--space", "2"]).is_err());
        assert!(parse(&["clickup", "list", "list", "--space", "2"]).is_ok());
    }

    #[test]
    fn test_priority_range() {
        assert!(parse(&["clickup", "task", "create", "l1", "name", "--priority", "5"]).is_err());
        let cli = parse(&[
            "clickup", "task", "create", "l1", "Write docs", "--priority", "2", "--assignee", "7",
            "--assignee", "8",
        ])
        .unwrap();
        assert_matches!(
            cli.command,
            Command::Task(TaskCommand::Create { priority: Some(2), assignees, .. }) if assignees == vec![7, 8]
        );
    }

    #[test]
    fn test_webhook_requires_event() {
        assert!(parse(&["clickup", "webhook", "create", "https://example.com"]).is_err());
        assert!(parse(&["clickup", "webhook", "create", "https://example.com", "--event", "*"]).is_ok());
    }

    #[test]
    fn test_usage_error_exit_code() {
        let error = parse(&["clickup", "task"]).unwrap_err();
        assert_eq!(error.exit_code(), 2);
    }
}
