//! Iconfinder API commands.
//!
//! `license`, `categories` and `styles` fetch a resource and print it as
//! pretty JSON.

use anyhow::Context;
use serde::Serialize;
use std::io::Write;

use crate::api::{Client, PageRequest};
use crate::cli::args::{LicenseArgs, PageArgs};
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

fn print_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<CommandResult> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    writeln!(out, "{json}")?;
    Ok(CommandResult::success())
}

impl From<&PageArgs> for PageRequest {
    fn from(args: &PageArgs) -> Self {
        Self {
            count: args.count,
            after: args.after.clone(),
        }
    }
}

/// The license command implementation.
pub struct LicenseCommand {
    client: Client,
    args: LicenseArgs,
}

impl LicenseCommand {
    pub fn new(client: Client, args: LicenseArgs) -> Self {
        Self { client, args }
    }
}

impl Command for LicenseCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let license = self.client.license(self.args.id)?;
        print_json(out, &license)
    }
}

/// The categories command implementation.
pub struct CategoriesCommand {
    client: Client,
    args: PageArgs,
}

impl CategoriesCommand {
    pub fn new(client: Client, args: PageArgs) -> Self {
        Self { client, args }
    }
}

impl Command for CategoriesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let categories = self.client.categories(&PageRequest::from(&self.args))?;
        print_json(out, &categories)
    }
}

/// The styles command implementation.
pub struct StylesCommand {
    client: Client,
    args: PageArgs,
}

impl StylesCommand {
    pub fn new(client: Client, args: PageArgs) -> Self {
        Self { client, args }
    }
}

impl Command for StylesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let styles = self.client.styles(&PageRequest::from(&self.args))?;
        print_json(out, &styles)
    }
}
