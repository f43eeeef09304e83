use clap::{Parser, Subcommand};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "etcauth",
    about = "Look up and authenticate local Unix accounts."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every entry of the passwd file
    Users,

    /// List every entry of the group file
    Groups,

    /// List every entry of the group shadow file
    Gshadow,

    /// Show one user, by name or by uid
    User {
        /// User name
        #[arg(required_unless_present = "uid", conflicts_with = "uid")]
        name: Option<String>,

        /// Numeric user id, as written in the passwd file
        #[arg(long)]
        uid: Option<String>,
    },

    /// Show one group, by name or by gid
    Group {
        /// Group name
        #[arg(required_unless_present_any = ["gid", "member"], conflicts_with_all = ["gid", "member"])]
        name: Option<String>,

        /// Numeric group id, as written in the group file
        #[arg(long, conflicts_with = "member")]
        gid: Option<String>,

        /// List the groups naming this user as a member instead
        #[arg(long)]
        member: Option<String>,
    },

    /// Check a user name and password against the account files
    Signin {
        /// User name
        username: String,

        /// Password; read from the first line of stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
}
