use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CustomerId);

/// A customer record as exchanged with the `/customerdetail` resource.
///
/// `id` is assigned by the backend. A record without one only ever lives in
/// form state and is never sent to an id-addressed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub name: String,
    pub order_id: i64,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// The blank "new" record.
    pub fn empty() -> Self {
        Self {
            id: None,
            name: String::new(),
            order_id: 0,
            email: String::new(),
            phone: String::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for Customer {
    fn default() -> Self {
        Self::empty()
    }
}

/// Raw registration inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub order_id: String,
    pub email: String,
    pub phone: String,
}

impl CustomerForm {
    /// Checks required-field presence and builds an unsaved [`Customer`].
    pub fn validate(&self) -> Result<Customer, ValidationError> {
        let name = required("name", &self.name)?;
        let order_id_raw = required("orderId", &self.order_id)?;
        let order_id = order_id_raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidOrderId(order_id_raw.to_string()))?;
        let email = required("email", &self.email)?;
        let phone = required("phone", &self.phone)?;

        Ok(Customer {
            id: None,
            name: name.to_string(),
            order_id,
            email: email.to_string(),
            phone: phone.to_string(),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl From<&Customer> for CustomerForm {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            order_id: customer.order_id.to_string(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
        }
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}
