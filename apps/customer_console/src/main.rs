use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{
    load_settings, ActionOutcome, CustomerApi, CustomerViewModel, HttpCustomerClient, UserPrompt,
};
use shared::domain::{CustomerForm, CustomerId};
use tracing_subscriber::EnvFilter;

mod prompt;
mod render;
mod shell;

use prompt::TerminalPrompt;
use render::customer_table;

#[derive(Parser, Debug)]
#[command(about = "Manage customer records served under /customerdetail")]
struct Args {
    /// Backend base url, e.g. http://localhost:8087
    #[arg(long, global = true)]
    server_url: Option<String>,
    /// Answer yes to delete confirmations
    #[arg(long, short = 'y', global = true)]
    yes: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every customer
    List,
    /// Register a new customer
    Register(RegisterArgs),
    /// Change fields of an existing customer
    Update {
        id: i64,
        #[command(flatten)]
        changes: UpdateArgs,
    },
    /// Delete a customer
    Delete { id: i64 },
    /// Interactive session
    Shell,
}

#[derive(ClapArgs, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    order_id: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

impl From<RegisterArgs> for CustomerForm {
    fn from(args: RegisterArgs) -> Self {
        Self {
            name: args.name.unwrap_or_default(),
            order_id: args.order_id.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
        }
    }
}

#[derive(ClapArgs, Debug)]
struct UpdateArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    order_id: Option<i64>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let settings = load_settings();
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let server_url = args.server_url.unwrap_or(settings.server_url);
    let client = HttpCustomerClient::new(&server_url)
        .with_context(|| format!("invalid server url '{server_url}'"))?;
    tracing::debug!(resource = client.resource_url(), "customer client ready");
    let mut vm = CustomerViewModel::new(client, TerminalPrompt::new(args.yes));

    let outcome = match args.command {
        Command::List => list(&mut vm).await,
        Command::Register(form) => {
            let mut form = CustomerForm::from(form);
            let outcome = vm.register(&mut form).await;
            print_if_completed(&vm, outcome)
        }
        Command::Update { id, changes } => update(&mut vm, CustomerId(id), changes).await,
        Command::Delete { id } => delete(&mut vm, CustomerId(id)).await,
        Command::Shell => {
            shell::run(&mut vm).await?;
            ActionOutcome::Completed
        }
    };

    Ok(if outcome.is_completed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_if_completed<A: CustomerApi, P: UserPrompt>(
    vm: &CustomerViewModel<A, P>,
    outcome: ActionOutcome,
) -> ActionOutcome {
    if outcome.is_completed() {
        print!("{}", customer_table(vm.customers()));
    }
    outcome
}

async fn list<A: CustomerApi, P: UserPrompt>(vm: &mut CustomerViewModel<A, P>) -> ActionOutcome {
    let outcome = vm.init().await;
    print_if_completed(vm, outcome)
}

async fn update<A: CustomerApi, P: UserPrompt>(
    vm: &mut CustomerViewModel<A, P>,
    id: CustomerId,
    changes: UpdateArgs,
) -> ActionOutcome {
    let outcome = vm.init().await;
    if !outcome.is_completed() {
        return outcome;
    }
    let Some(selected) = vm.find(id).cloned() else {
        vm.prompt_mut().alert(&format!("No customer with id {id}."));
        return ActionOutcome::Rejected;
    };

    vm.edit(&selected);
    let slot = vm.customer_to_update_mut();
    if let Some(name) = changes.name {
        slot.name = name;
    }
    if let Some(order_id) = changes.order_id {
        slot.order_id = order_id;
    }
    if let Some(email) = changes.email {
        slot.email = email;
    }
    if let Some(phone) = changes.phone {
        slot.phone = phone;
    }

    let outcome = vm.update_customer().await;
    print_if_completed(vm, outcome)
}

async fn delete<A: CustomerApi, P: UserPrompt>(
    vm: &mut CustomerViewModel<A, P>,
    id: CustomerId,
) -> ActionOutcome {
    let outcome = vm.init().await;
    if !outcome.is_completed() {
        return outcome;
    }
    let Some(selected) = vm.find(id).cloned() else {
        vm.prompt_mut().alert(&format!("No customer with id {id}."));
        return ActionOutcome::Rejected;
    };

    let outcome = vm.delete_customer(&selected).await;
    print_if_completed(vm, outcome)
}
