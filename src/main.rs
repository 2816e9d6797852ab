use clap::Parser;

use supplierctl::cli::{Cli, Commands};
use supplierctl::cmd::{
    AddSupplierCommand, ClearCommand, CommandResult, CompletionsCommand, DeleteSupplierCommand,
    EditSupplierCommand, FindSupplierCommand, ListSupplierCommand, MarkSupplierCommand,
};
use supplierctl::core::{Index, ValidationWarning};
use supplierctl::error::SupplierError;
use supplierctl::lock::LockGuard;
use supplierctl::model::{AddressBookModel, Model};
use supplierctl::output::{self, Event, HumanOutput};
use supplierctl::{dirs, storage};

fn main() {
    let exit_code = match run() {
        Ok(()) => 0,
        Err((err, json_mode)) => {
            if json_mode {
                let event = Event::Error {
                    version: 1,
                    code: err.exit_code(),
                    message: err.to_string(),
                    suggestion: err.get_fix(),
                };
                let _ = event.emit_json();
            } else {
                let use_color = output::use_color();
                eprintln!("{}", err.format_detailed(use_color));
            }
            err.exit_code()
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<(), (SupplierError, bool)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Err((map_parse_error(err), false)),
    };

    if let Err(err) = init_tracing(cli.verbose) {
        return Err((err, false));
    }

    let json_mode = cli.json;

    // Completions touch neither the book nor the lock.
    if let Commands::Completions(args) = &cli.command {
        let cmd = CompletionsCommand { shell: args.shell };
        return cmd.run().map_err(|err| (err, json_mode));
    }

    dispatch(cli).map_err(|err| (err, json_mode))
}

fn dispatch(cli: Cli) -> Result<(), SupplierError> {
    let data_path = match &cli.file {
        Some(path) => path.clone(),
        None => dirs::data_file()?,
    };
    let _lock = LockGuard::acquire(&data_path)?;
    let suppliers = storage::load(&data_path)?;
    let mut model = AddressBookModel::new(suppliers);

    let mut warnings: Vec<ValidationWarning> = Vec::new();
    let (result, mutated) = match &cli.command {
        Commands::Add(args) => {
            let (cmd, warns) = AddSupplierCommand::from_args(args)?;
            warnings = warns;
            (cmd.execute(&mut model)?, true)
        }
        Commands::Edit(args) => {
            let (cmd, warns) = EditSupplierCommand::from_args(args)?;
            warnings = warns;
            (cmd.execute(&mut model)?, true)
        }
        Commands::Delete(args) => {
            let cmd = DeleteSupplierCommand::new(parse_index(args.index)?);
            (cmd.execute(&mut model)?, true)
        }
        Commands::Find(args) => {
            let cmd = FindSupplierCommand::new(args.keywords.clone())?;
            (cmd.execute(&mut model)?, false)
        }
        Commands::List => (ListSupplierCommand::execute(&mut model)?, false),
        Commands::Mark(args) => {
            let cmd = MarkSupplierCommand::new(parse_index(args.index)?, args.status);
            (cmd.execute(&mut model)?, true)
        }
        Commands::Clear => (ClearCommand::execute(&mut model)?, true),
        Commands::Completions(_) => unreachable!("handled before dispatch"),
    };

    if mutated {
        storage::save(&data_path, model.supplier_list())?;
    }

    emit(&result, &warnings, cli.json)
}

fn parse_index(value: usize) -> Result<Index, SupplierError> {
    Index::from_one_based(value).ok_or_else(|| {
        SupplierError::InvalidArgument("INDEX must be a positive integer".to_string())
    })
}

fn emit(
    result: &CommandResult,
    warnings: &[ValidationWarning],
    json: bool,
) -> Result<(), SupplierError> {
    if json {
        for warning in warnings {
            let event = Event::Warning {
                version: 1,
                message: output::warning_text(warning),
            };
            event
                .emit_json()
                .map_err(|err| SupplierError::Other(err.to_string()))?;
        }
        Event::from_result(result)
            .emit_json()
            .map_err(|err| SupplierError::Other(err.to_string()))
    } else {
        let human = HumanOutput::new();
        for warning in warnings {
            human
                .print_warning(warning)
                .map_err(|err| SupplierError::Other(err.to_string()))?;
        }
        human
            .print_result(result)
            .map_err(|err| SupplierError::Other(err.to_string()))
    }
}

fn map_parse_error(err: clap::Error) -> SupplierError {
    use clap::error::ErrorKind;
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        let _ = err.print();
        std::process::exit(0);
    }
    SupplierError::InvalidArgument(err.to_string())
}

fn init_tracing(verbose: u8) -> Result<(), SupplierError> {
    use tracing_subscriber::EnvFilter;

    let filter = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)
            .map_err(|err| SupplierError::Other(format!("Invalid RUST_LOG value: {}", err)))?,
        _ => {
            let level = match verbose {
                0 => "error",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(level)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| SupplierError::Other(format!("Failed to initialize logging: {}", err)))
}
