//! Interactive session. One view model lives for the whole session, so the
//! registration form and the edit slot survive between commands.

use std::io::{self, Write};

use anyhow::{anyhow, bail, Result};
use client_core::{CustomerApi, CustomerViewModel, UserPrompt};
use shared::domain::{Customer, CustomerForm, CustomerId};

use crate::render::{customer_table, describe_customer, describe_form};

const HELP: &str = "\
commands:
  list                      reload and print customers
  form <field> <value>      fill the registration form
  register                  submit the registration form
  edit <id>                 stage a customer for update
  set <field> <value>       change a field of the staged customer
  show                      print the form and the staged customer
  update                    send the staged customer
  delete <id>               delete a customer (asks first)
  help | quit
fields: name, orderId, email, phone";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    OrderId,
    Email,
    Phone,
}

impl Field {
    fn parse(raw: &str) -> Result<Self> {
        match raw {
            "name" => Ok(Self::Name),
            "orderId" | "order_id" | "order-id" => Ok(Self::OrderId),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => bail!("unknown field '{other}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Form { field: Field, value: String },
    Register,
    Edit(CustomerId),
    Set { field: Field, value: String },
    Show,
    Update,
    Delete(CustomerId),
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    let command = match verb {
        "list" | "ls" => ShellCommand::List,
        "register" => ShellCommand::Register,
        "show" => ShellCommand::Show,
        "update" => ShellCommand::Update,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        "edit" => ShellCommand::Edit(parse_id(rest)?),
        "delete" | "rm" => ShellCommand::Delete(parse_id(rest)?),
        "form" => {
            let (field, value) = parse_assignment(rest)?;
            ShellCommand::Form { field, value }
        }
        "set" => {
            let (field, value) = parse_assignment(rest)?;
            ShellCommand::Set { field, value }
        }
        other => bail!("unknown command '{other}', try 'help'"),
    };
    Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<CustomerId> {
    raw.parse::<i64>()
        .map(CustomerId)
        .map_err(|_| anyhow!("expected a numeric customer id, got '{raw}'"))
}

fn parse_assignment(raw: &str) -> Result<(Field, String)> {
    let (field, value) = raw.split_once(char::is_whitespace).unwrap_or((raw, ""));
    Ok((Field::parse(field)?, value.trim().to_string()))
}

pub fn fill_form(form: &mut CustomerForm, field: Field, value: String) {
    match field {
        Field::Name => form.name = value,
        Field::OrderId => form.order_id = value,
        Field::Email => form.email = value,
        Field::Phone => form.phone = value,
    }
}

pub fn set_field(customer: &mut Customer, field: Field, value: String) -> Result<()> {
    match field {
        Field::Name => customer.name = value,
        Field::OrderId => {
            customer.order_id = value
                .parse()
                .map_err(|_| anyhow!("order id must be a whole number, got '{value}'"))?
        }
        Field::Email => customer.email = value,
        Field::Phone => customer.phone = value,
    }
    Ok(())
}

pub async fn run<A, P>(vm: &mut CustomerViewModel<A, P>) -> Result<()>
where
    A: CustomerApi,
    P: UserPrompt,
{
    let mut form = CustomerForm::default();
    vm.init().await;
    println!("{}", vm.title());
    print!("{}", customer_table(vm.customers()));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::List => {
                if vm.refresh().await.is_completed() {
                    print!("{}", customer_table(vm.customers()));
                }
            }
            ShellCommand::Form { field, value } => fill_form(&mut form, field, value),
            ShellCommand::Register => {
                if vm.register(&mut form).await.is_completed() {
                    print!("{}", customer_table(vm.customers()));
                }
            }
            ShellCommand::Edit(id) => match vm.find(id).cloned() {
                Some(customer) => {
                    vm.edit(&customer);
                    println!("editing {}", describe_customer(vm.customer_to_update()));
                }
                None => eprintln!("no customer with id {id} in the current list"),
            },
            ShellCommand::Set { field, value } => {
                if let Err(err) = set_field(vm.customer_to_update_mut(), field, value) {
                    eprintln!("{err}");
                }
            }
            ShellCommand::Show => {
                println!("form:    {}", describe_form(&form));
                println!("editing: {}", describe_customer(vm.customer_to_update()));
            }
            ShellCommand::Update => {
                if vm.update_customer().await.is_completed() {
                    print!("{}", customer_table(vm.customers()));
                }
            }
            ShellCommand::Delete(id) => match vm.find(id).cloned() {
                Some(customer) => {
                    if vm.delete_customer(&customer).await.is_completed() {
                        print!("{}", customer_table(vm.customers()));
                    }
                }
                None => eprintln!("no customer with id {id} in the current list"),
            },
        }
    }

    Ok(())
}
