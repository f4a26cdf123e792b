use storekeep_core::{Customer, DueRecord};

use super::{customer_options, escape, layout};

pub fn page(dues: &[DueRecord], customers: &[Customer]) -> String {
    let rows: String = dues
        .iter()
        .map(|d| {
            format!(
                r#"<tr><td>{id}</td><td>{customer}</td><td>{amount}</td><td>{date}</td><td><a href="/delete_due/{id}">Delete</a></td></tr>
"#,
                id = d.id,
                customer = escape(&d.customer_name),
                amount = d.amount(),
                date = d.created_at.format("%Y-%m-%d %H:%M:%S"),
            )
        })
        .collect();

    let body = format!(
        r#"<form method="post" action="/add_due">
<select name="customer_id" required>
{customers}
</select>
<input name="amount" type="number" min="0.01" step="0.01" placeholder="Amount" required>
<button type="submit">Add due</button>
</form>
<table>
<thead><tr><th>ID</th><th>Customer</th><th>Amount</th><th>Date</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        customers = customer_options(customers),
    );

    layout("Dues", &body)
}
