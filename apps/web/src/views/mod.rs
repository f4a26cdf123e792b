//! # HTML Views
//!
//! Server-rendered pages. Each page is a plain function from rows to a
//! `String`; every piece of user-entered text goes through [`escape`].
//!
//! ```text
//! layout(title, body)
//!   ├── home::page()
//!   ├── customers::page(&[Customer])
//!   ├── items::page(&[Item])
//!   ├── sales::page(&[SaleRecord], &[Customer], &[Item])
//!   └── dues::page(&[DueRecord], &[Customer])
//! ```

pub mod customers;
pub mod dues;
pub mod home;
pub mod items;
pub mod sales;

use storekeep_core::Customer;

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a page body in the shared document shell and navigation.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Storekeep</title>
</head>
<body>
<nav>
<a href="/">Home</a> |
<a href="/customers">Customers</a> |
<a href="/items">Items</a> |
<a href="/sales">Sales</a> |
<a href="/due">Dues</a>
</nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Page shown for infrastructure failures.
pub fn error_page(message: &str) -> String {
    layout("Error", &format!("<p>{}</p>", escape(message)))
}

/// `<option>` list for a customer `<select>`.
pub(crate) fn customer_options(customers: &[Customer]) -> String {
    customers
        .iter()
        .map(|c| format!(r#"<option value="{}">{}</option>"#, c.id, escape(&c.name)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>Tom & "Jerry"</b>"#),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("O'Brien"), "O&#x27;Brien");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("<script>", "<p>body</p>");
        assert!(html.contains("<h1>&lt;script&gt;</h1>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"<a href="/due">Dues</a>"#));
    }
}
