use storekeep_core::{Customer, Item, SaleRecord};

use super::{customer_options, escape, layout};

pub fn page(sales: &[SaleRecord], customers: &[Customer], items: &[Item]) -> String {
    let item_options: String = items
        .iter()
        .map(|i| {
            format!(
                r#"<option value="{}">{} ({} in stock, {})</option>"#,
                i.id,
                escape(&i.name),
                i.stock,
                i.price()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rows: String = sales
        .iter()
        .map(|s| {
            format!(
                r#"<tr><td>{id}</td><td>{customer}</td><td>{item}</td><td>{quantity}</td><td>{total}</td><td>{date}</td><td><a href="/delete_sale/{id}">Delete</a></td></tr>
"#,
                id = s.id,
                customer = escape(&s.customer_name),
                item = escape(&s.item_name),
                quantity = s.quantity,
                total = s.total(),
                date = s.created_at.format("%Y-%m-%d %H:%M:%S"),
            )
        })
        .collect();

    let body = format!(
        r#"<form method="post" action="/add_sale">
<select name="customer_id" required>
{customers}
</select>
<select name="item_id" required>
{item_options}
</select>
<input name="quantity" type="number" min="1" step="1" value="1">
<button type="submit">Record sale</button>
</form>
<table>
<thead><tr><th>ID</th><th>Customer</th><th>Item</th><th>Quantity</th><th>Total</th><th>Date</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        customers = customer_options(customers),
    );

    layout("Sales", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_page_renders_pickers_and_rows() {
        let customers = [Customer {
            id: 1,
            name: "Alice".to_string(),
            phone: String::new(),
            email: None,
        }];
        let items = [Item {
            id: 9,
            name: "Pen".to_string(),
            stock: 7,
            price_cents: 250,
        }];
        let sales = [SaleRecord {
            id: 3,
            customer_id: 1,
            customer_name: "Alice".to_string(),
            item_id: 5,
            item_name: "Pen & Ink".to_string(),
            quantity: 3,
            total_cents: 750,
            created_at: datetime("2024-05-01 10:30:00"),
        }];

        let html = page(&sales, &customers, &items);

        assert!(html.contains(r#"<option value="1">Alice</option>"#));
        assert!(html.contains(r#"<option value="9">Pen (7 in stock, 2.50)</option>"#));
        assert!(html.contains(
            "<td>Alice</td><td>Pen &amp; Ink</td><td>3</td><td>7.50</td><td>2024-05-01 10:30:00</td>"
        ));
        assert!(html.contains(r#"href="/delete_sale/3""#));
    }
}
