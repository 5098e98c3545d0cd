//! Server-side rendering of the gift list page.

use std::fmt::Write;

use giftlist_core::Gift;

const PAGE_TITLE: &str = "Lista de Presentes";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #333; }
h1 { text-align: center; font-weight: 400; }
table { width: 100%; border-collapse: collapse; }
td { padding: .6rem .4rem; border-bottom: 1px solid #eee; }
td.status { text-align: right; white-space: nowrap; }
form { margin: 0; }
.status-button { border: 1px solid #7a9e7e; background: #fff; color: #7a9e7e; padding: .3rem .9rem; border-radius: 1rem; cursor: pointer; }
.status-button:hover { background: #7a9e7e; color: #fff; }
.claimed { color: #aaa; }
tr.bought td.name { text-decoration: line-through; color: #aaa; }
"#;

/// Render the full HTML page for `gifts`.
///
/// Available gifts get a form posting their id to `/comprar`; bought gifts
/// are shown as claimed with no form.
pub fn render_gift_page(gifts: &[Gift]) -> String {
    let mut rows = String::new();

    if gifts.is_empty() {
        rows.push_str(r#"<tr><td colspan="2">Nenhum presente disponível no momento.</td></tr>"#);
    }

    for gift in gifts {
        let name = escape_html(&gift.name);
        if gift.bought {
            let _ = write!(
                rows,
                r#"<tr class="bought"><td class="name">{name}</td><td class="status"><span class="claimed">Comprado</span></td></tr>"#
            );
        } else {
            let _ = write!(
                rows,
                r#"<tr><td class="name">{name}</td><td class="status"><form method="post" action="/comprar"><input type="hidden" name="gift_id" value="{id}"><button type="submit" class="status-button">Disponível</button></form></td></tr>"#,
                id = gift.id
            );
        }
        rows.push('\n');
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{PAGE_TITLE}</h1>
<table>
{rows}</table>
</body>
</html>
"#
    )
}

/// Escape text for use in HTML element content and attribute values.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftlist_core::GiftId;

    fn gift(id: i64, name: &str, bought: bool) -> Gift {
        Gift {
            id: GiftId::new(id).unwrap(),
            name: name.to_string(),
            bought,
        }
    }

    #[test]
    fn test_available_gift_has_purchase_form() {
        let html = render_gift_page(&[gift(2, "Cafeteira", false)]);
        assert!(html.contains("Cafeteira"));
        assert!(html.contains(r#"name="gift_id" value="2""#));
        assert!(html.contains("Disponível"));
        assert!(!html.contains("Comprado"));
    }

    #[test]
    fn test_bought_gift_has_no_form() {
        let html = render_gift_page(&[gift(2, "Cafeteira", true)]);
        assert!(html.contains("Comprado"));
        assert!(!html.contains(r#"action="/comprar""#));
    }

    #[test]
    fn test_rows_keep_given_order() {
        let html = render_gift_page(&[gift(1, "Filtro de Barro", false), gift(2, "Cafeteira", false)]);
        let first = html.find("Filtro de Barro").unwrap();
        let second = html.find("Cafeteira").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_list_message() {
        let html = render_gift_page(&[]);
        assert!(html.contains("Nenhum presente disponível"));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_gift_page(&[gift(1, "<script>alert('x')</script> & \"co\"", false)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;co&quot;"));
    }
}
