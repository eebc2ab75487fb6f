//! Customer screen state: the loaded collection plus the single record staged
//! for update. Every mutation is followed by a full reload from the backend.

use shared::domain::{Customer, CustomerForm, CustomerId};
use tracing::{debug, error, info};

use crate::api::CustomerApi;

const TITLE: &str = "customers";

/// Blocking user-facing surface: notification dialogs and yes/no questions.
pub trait UserPrompt: Send {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// Refused locally; nothing was sent.
    Rejected,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Failed,
}

impl ActionOutcome {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

pub struct CustomerViewModel<A: CustomerApi, P: UserPrompt> {
    api: A,
    prompt: P,
    customers: Vec<Customer>,
    customer_to_update: Customer,
}

impl<A: CustomerApi, P: UserPrompt> CustomerViewModel<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            customers: Vec::new(),
            customer_to_update: Customer::empty(),
        }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn find(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == Some(id))
    }

    pub fn customer_to_update(&self) -> &Customer {
        &self.customer_to_update
    }

    pub fn customer_to_update_mut(&mut self) -> &mut Customer {
        &mut self.customer_to_update
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    /// Initial load when the screen opens.
    pub async fn init(&mut self) -> ActionOutcome {
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> ActionOutcome {
        match self.api.list().await {
            Ok(customers) => {
                self.customers = customers;
                info!(count = self.customers.len(), "loaded customers");
                debug!(customers = ?self.customers, "customer list");
                ActionOutcome::Completed
            }
            Err(err) => {
                error!(error = %err, "error fetching customers");
                self.prompt.alert("Failed to fetch customers.");
                ActionOutcome::Failed
            }
        }
    }

    /// Registers the form's contents. The form is cleared only once the
    /// backend accepted the record.
    pub async fn register(&mut self, form: &mut CustomerForm) -> ActionOutcome {
        let customer = match form.validate() {
            Ok(customer) => customer,
            Err(err) => {
                debug!(reason = %err, "registration form invalid");
                self.prompt.alert("Please fill in all required fields.");
                return ActionOutcome::Rejected;
            }
        };

        match self.api.create(&customer).await {
            Ok(()) => {
                info!(name = %customer.name, "customer registered");
                form.reset();
                self.refresh().await;
                ActionOutcome::Completed
            }
            Err(err) => {
                error!(error = %err, "error registering customer");
                self.prompt
                    .alert("There was an error registering the customer.");
                ActionOutcome::Failed
            }
        }
    }

    pub async fn delete_customer(&mut self, customer: &Customer) -> ActionOutcome {
        let Some(id) = customer.id else {
            error!(
                ?customer,
                "customer id is undefined, cannot delete customer"
            );
            return ActionOutcome::Rejected;
        };

        let question = format!(
            "Are you sure you want to delete customer: {}?",
            customer.name
        );
        if !self.prompt.confirm(&question) {
            debug!(%id, "delete cancelled by user");
            return ActionOutcome::Cancelled;
        }

        match self.api.delete_by_id(id).await {
            Ok(()) => {
                info!(%id, "customer deleted");
                self.refresh().await;
                ActionOutcome::Completed
            }
            Err(err) => {
                error!(%id, error = %err, "error deleting customer");
                self.prompt.alert("Error deleting customer.");
                ActionOutcome::Failed
            }
        }
    }

    /// Stages an independent copy of `customer` for update.
    pub fn edit(&mut self, customer: &Customer) {
        self.customer_to_update = customer.clone();
    }

    pub async fn update_customer(&mut self) -> ActionOutcome {
        let Some(id) = self.customer_to_update.id else {
            error!("customer id is undefined, cannot update customer");
            self.prompt
                .alert("Customer ID is undefined. Cannot update customer.");
            return ActionOutcome::Rejected;
        };

        match self.api.update(&self.customer_to_update).await {
            Ok(()) => {
                info!(%id, "customer updated");
                self.refresh().await;
                self.customer_to_update = Customer::empty();
                ActionOutcome::Completed
            }
            Err(err) => {
                error!(%id, error = %err, "error updating customer");
                self.prompt.alert("Error updating customer.");
                ActionOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
