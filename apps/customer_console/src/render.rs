use shared::domain::{Customer, CustomerForm};

const HEADERS: [&str; 5] = ["id", "name", "orderId", "email", "phone"];

pub fn customer_table(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "(no customers)\n".to_string();
    }

    let rows: Vec<[String; 5]> = customers
        .iter()
        .map(|c| {
            [
                c.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
                c.name.clone(),
                c.order_id.to_string(),
                c.email.clone(),
                c.phone.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn describe_customer(customer: &Customer) -> String {
    let id = customer
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "new".into());
    format!(
        "[{id}] name={:?} orderId={} email={:?} phone={:?}",
        customer.name, customer.order_id, customer.email, customer.phone
    )
}

pub fn describe_form(form: &CustomerForm) -> String {
    format!(
        "name={:?} orderId={:?} email={:?} phone={:?}",
        form.name, form.order_id, form.email, form.phone
    )
}

#[cfg(test)]
mod tests {
    use shared::domain::CustomerId;

    use super::*;

    #[test]
    fn table_aligns_columns() {
        let customers = vec![
            Customer {
                id: Some(CustomerId(1)),
                name: "Alice".into(),
                order_id: 10,
                email: "a@x.com".into(),
                phone: "555".into(),
            },
            Customer {
                id: Some(CustomerId(12)),
                name: "Bo".into(),
                order_id: 7,
                email: "b@x.com".into(),
                phone: "5".into(),
            },
        ];

        let table = customer_table(&customers);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id  name   orderId  email    phone");
        assert_eq!(lines[1], "1   Alice  10       a@x.com  555");
        assert_eq!(lines[2], "12  Bo     7        b@x.com  5");
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(customer_table(&[]), "(no customers)\n");
    }

    #[test]
    fn unsaved_customer_is_described_as_new() {
        assert!(describe_customer(&Customer::empty()).starts_with("[new]"));
    }
}
