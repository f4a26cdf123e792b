use storekeep_core::Customer;

use super::{escape, layout};

const FORM: &str = r#"<form method="post" action="/add_customer">
<input name="name" placeholder="Name" required>
<input name="phone" placeholder="Phone">
<input name="email" type="email" placeholder="Email">
<button type="submit">Add customer</button>
</form>"#;

pub fn page(customers: &[Customer]) -> String {
    let rows: String = customers
        .iter()
        .map(|c| {
            format!(
                r#"<tr><td>{id}</td><td>{name}</td><td>{phone}</td><td>{email}</td><td><a href="/delete_customer/{id}">Delete</a></td></tr>
"#,
                id = c.id,
                name = escape(&c.name),
                phone = escape(&c.phone),
                email = escape(c.email.as_deref().unwrap_or("")),
            )
        })
        .collect();

    let body = format!(
        r#"{FORM}
<table>
<thead><tr><th>ID</th><th>Name</th><th>Phone</th><th>Email</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );

    layout("Customers", &body)
}
