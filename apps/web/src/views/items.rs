use storekeep_core::Item;

use super::{escape, layout};

const FORM: &str = r#"<form method="post" action="/add_item">
<input name="name" placeholder="Name" required>
<input name="stock" type="number" step="1" placeholder="Stock">
<input name="price" type="number" step="0.01" placeholder="Price">
<button type="submit">Add item</button>
</form>"#;

pub fn page(items: &[Item]) -> String {
    let rows: String = items
        .iter()
        .map(|i| {
            format!(
                r#"<tr><td>{id}</td><td>{name}</td><td>{stock}</td><td>{price}</td><td><a href="/delete_item/{id}">Delete</a></td></tr>
"#,
                id = i.id,
                name = escape(&i.name),
                stock = i.stock,
                price = i.price(),
            )
        })
        .collect();

    let body = format!(
        r#"{FORM}
<table>
<thead><tr><th>ID</th><th>Name</th><th>Stock</th><th>Price</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );

    layout("Items", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shows_negative_stock_and_price() {
        let html = page(&[Item {
            id: 2,
            name: "Pen".to_string(),
            stock: -3,
            price_cents: 250,
        }]);

        assert!(html.contains("<td>Pen</td><td>-3</td><td>2.50</td>"));
        assert!(html.contains(r#"href="/delete_item/2""#));
    }
}
