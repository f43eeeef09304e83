mod core_cli;

use crate::core_cli::{Cli, Command};
use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use env_logger::{Builder, Env};
use etcauth::{Config, GroupShadowStore, GroupStore, UserStore};
use log::debug;
use std::io::Write;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();

    let config = match args.config.as_deref() {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    debug!("Using account files: {:?}", config.accounts);

    let accounts = &config.accounts;
    match args.command {
        Command::Users => {
            let users = UserStore::from_config(accounts)
                .list_users()
                .context("Failed to list users")?;
            println!("{}", "Users:".bold());
            for user in users {
                println!("\t{}", user);
            }
        }
        Command::Groups => {
            let groups = GroupStore::new(&accounts.group_file)
                .list_groups()
                .context("Failed to list groups")?;
            println!("{}", "Groups:".bold());
            for group in groups {
                println!("\t{}", group);
            }
        }
        Command::Gshadow => {
            let entries = GroupShadowStore::new(&accounts.gshadow_file)
                .list_entries()
                .context("Failed to list group shadow entries")?;
            println!("{}", "Group shadow entries:".bold());
            for entry in entries {
                println!("\t{}", entry);
            }
        }
        Command::User { name, uid } => {
            let store = UserStore::from_config(accounts);
            let (found, subject) = match (name, uid) {
                (_, Some(uid)) => (store.find_by_uid(&uid)?, format!("uid {}", uid)),
                (Some(name), None) => (store.find_by_name(&name)?, name),
                (None, None) => bail!("A user name or a uid is required"),
            };
            match found {
                Some(user) => println!("{}", user),
                None => {
                    println!("{} {}", "No such user:".yellow(), subject);
                    std::process::exit(2);
                }
            }
        }
        Command::Group { name, gid, member } => {
            let store = GroupStore::new(&accounts.group_file);
            if let Some(member) = member {
                for group in store.groups_of(&member)? {
                    println!("{}", group);
                }
                return Ok(());
            }
            let (found, subject) = match (name, gid) {
                (_, Some(gid)) => (store.find_by_id(&gid)?, format!("gid {}", gid)),
                (Some(name), None) => (store.find_by_name(&name)?, name),
                (None, None) => bail!("A group name, a gid or a member is required"),
            };
            match found {
                Some(group) => println!("{}", group),
                None => {
                    println!("{} {}", "No such group:".yellow(), subject);
                    std::process::exit(2);
                }
            }
        }
        Command::Signin { username, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password_line()?,
            };
            match UserStore::from_config(accounts).sign_in(&username, &password) {
                Ok(user) => println!("{} {}", "Access granted:".green(), user.username()),
                Err(e) if e.is_fatal() => {
                    return Err(e).context("Sign-in could not be completed");
                }
                Err(e) => {
                    debug!("Sign-in failed: {}", e);
                    println!("{} {}", "Access denied:".red(), e.to_client_message());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn read_password_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
