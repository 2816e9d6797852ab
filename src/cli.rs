use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::SupplierStatus;

const EXAMPLES: &str = "EXAMPLES:\n    supplierctl add --name Alice --phone 5551234 --email a@x.com --company ACo --product Widgets\n    supplierctl mark -m 1 active           # Mark supplier 1 as active\n    supplierctl find alice bob             # Narrow the list by name keywords\n";

#[derive(Parser, Debug)]
#[command(
    name = "supplierctl",
    version,
    about = "Supplier address book for the command line",
    long_about = "Track suppliers (name, phone, email, company, product, status) in a local JSON book.",
    after_long_help = EXAMPLES,
    propagate_version = true,
    arg_required_else_help = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)",
    )]
    pub verbose: u8,

    #[arg(long, global = true, help = "NDJSON output for scripting")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        value_name = "path",
        help = "Data file override (default: XDG state dir)"
    )]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(alias = "a")]
    Add(AddArgs),
    #[command(alias = "e")]
    Edit(EditArgs),
    #[command(alias = "d")]
    Delete(DeleteArgs),
    #[command(alias = "f")]
    Find(FindArgs),
    #[command(alias = "l")]
    List,
    #[command(after_long_help = EXAMPLES)]
    Mark(MarkArgs),
    Clear,
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, value_name = "name", help = "Supplier name (alphanumeric and spaces)")]
    pub name: String,

    #[arg(long, value_name = "phone", help = "Phone number (digits only, at least 3)")]
    pub phone: String,

    #[arg(long, value_name = "email", help = "Email address (local@domain)")]
    pub email: String,

    #[arg(long, value_name = "company", help = "Company name")]
    pub company: String,

    #[arg(long, value_name = "product", help = "Product supplied")]
    pub product: String,

    #[arg(
        long,
        value_enum,
        value_name = "status",
        help = "Initial status (default: active)"
    )]
    pub status: Option<SupplierStatus>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    #[arg(value_name = "INDEX", help = "Display index (must be a positive integer)")]
    pub index: usize,

    #[arg(long, value_name = "name", help = "New supplier name")]
    pub name: Option<String>,

    #[arg(long, value_name = "phone", help = "New phone number")]
    pub phone: Option<String>,

    #[arg(long, value_name = "email", help = "New email address")]
    pub email: Option<String>,

    #[arg(long, value_name = "company", help = "New company name")]
    pub company: Option<String>,

    #[arg(long, value_name = "product", help = "New product")]
    pub product: Option<String>,

    #[arg(long, value_enum, value_name = "status", help = "New status")]
    pub status: Option<SupplierStatus>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[arg(value_name = "INDEX", help = "Display index (must be a positive integer)")]
    pub index: usize,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    #[arg(
        value_name = "KEYWORD",
        required = true,
        num_args = 1..,
        help = "Name keywords (case-insensitive, whole-word)"
    )]
    pub keywords: Vec<String>,
}

#[derive(Args, Debug)]
pub struct MarkArgs {
    #[arg(
        short = 'm',
        long = "supplier",
        value_name = "INDEX",
        help = "Display index in the supplier list (must be a positive integer)"
    )]
    pub index: usize,

    #[arg(value_enum, value_name = "STATUS", help = "New status (active, inactive)")]
    pub status: SupplierStatus,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}
