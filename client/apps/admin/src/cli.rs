//! Command line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "admin", about = "Store admin panel client", version)]
pub struct Cli {
    /// Admin API base URL
    #[arg(long, env = "ADMIN_API_URL")]
    pub api_url: Option<String>,

    /// Directory holding the session store (defaults to the user cache dir)
    #[arg(long, env = "ADMIN_SESSION_DIR")]
    pub session_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account
    Register {
        #[arg(long)]
        user_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in and keep the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Restore the saved session and show who is signed in
    Whoami,
    /// Log out on the server
    Logout,
    /// Forget the local session without contacting the server
    SignOut,
    /// Admin order desk
    Orders(OrdersCommand),
}

#[derive(Args, Debug)]
pub struct OrdersCommand {
    #[command(subcommand)]
    pub command: OrdersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrdersSubcommand {
    /// List all orders
    List,
    /// Show one order
    Show { id: String },
    /// Change an order's status
    SetStatus {
        id: String,
        /// pending, inProcess, inShipping, delivered or rejected
        status: String,
    },
    /// List the statuses an admin can pick
    Statuses,
}
