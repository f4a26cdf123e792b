use super::layout;

pub fn page() -> String {
    layout(
        "Storekeep",
        r#"<ul>
<li><a href="/customers">Customers</a>: who buys from the store</li>
<li><a href="/items">Items</a>: stock on hand and unit prices</li>
<li><a href="/sales">Sales</a>: record a sale and take it out of stock</li>
<li><a href="/due">Dues</a>: amounts customers still owe</li>
</ul>"#,
    )
}
