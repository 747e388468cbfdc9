//! Server-side HTML for the web front end. All listing text is escaped.

use crate::{types::ListingSummary, utils::escape_html};

const STYLE: &str = "body{font-family:'Lucida Sans','Lucida Sans Regular','Lucida Grande','Lucida Sans Unicode',Geneva,Verdana,sans-serif;padding:30px;text-align:center;}\
table{width:100%;text-align:center;}\
table tr:nth-child(even){background-color:#e6f7ff;}\
table tr:nth-child(odd){background-color:#fff;}\
table th{background-color:#18558a;color:white;font-size:x-large;}";

/// Search form posting to `/search`.
///
/// # Arguments
///
/// * `today` - `YYYY-MM-DD` value the date input starts with
pub fn render_form(today: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset=utf-8><style>{style}</style><title>shelfscout</title></head><body>
<h1>Bestseller listings</h1>
<form action="/search" method="get">
<label>List <select name="genre">
<option value="hardcover-fiction">Hardcover Fiction</option>
<option value="hardcover-nonfiction">Hardcover Nonfiction</option>
<option value="trade-fiction-paperback">Paperback Trade Fiction</option>
<option value="paperback-nonfiction">Paperback Nonfiction</option>
<option value="young-adult-hardcover">Young Adult Hardcover</option>
<option value="picture-books">Picture Books</option>
</select></label>
<label>Date <input type="date" name="daterange" value="{today}"></label>
<input type="submit" value="Search">
</form></body></html>"#,
        style = STYLE,
        today = escape_html(today),
    )
}

/// Results table, one row per listing in the given order.
///
/// USD prices (and prices without a currency) get a `$` prefix, others are
/// followed by their currency code. Listings without a link get an empty
/// link cell. An empty slice renders a "No listings found." line.
pub fn render_results(listings: &[ListingSummary]) -> String {
    let mut page = format!(
        "<!DOCTYPE html><html><head><meta charset=utf-8><style>{}</style><title>Results</title></head><body><h1>Results</h1><br>\
<table><tr><th>Image</th><th>Item</th><th>Seller</th><th>Seller Score</th><th>Condition</th><th>Price</th><th>Link</th></tr>",
        STYLE
    );

    for listing in listings {
        let score = listing
            .seller_score
            .as_deref()
            .map(|s| format!("{}%", escape_html(s)))
            .unwrap_or_default();
        let price = match listing.currency.as_deref() {
            Some("USD") | None => format!("${}", escape_html(&listing.price)),
            Some(currency) => format!("{} {}", escape_html(&listing.price), escape_html(currency)),
        };

        let link = if listing.url.is_empty() {
            String::new()
        } else {
            format!(r#"<a href="{}">See Listing</a>"#, escape_html(&listing.url))
        };

        page.push_str(&format!(
            r#"<tr><td><img src="{image}" height="100"></td><td>{title}</td><td>{seller}</td><td>{score}</td><td>{condition}</td><td>{price}</td><td>{link}</td></tr>"#,
            image = escape_html(&listing.image_url),
            title = escape_html(&listing.title),
            seller = escape_html(&listing.seller),
            score = score,
            condition = escape_html(&listing.condition),
            price = price,
            link = link,
        ));
    }

    if listings.is_empty() {
        page.push_str(r#"<tr><td colspan="7">No listings found.</td></tr>"#);
    }

    page.push_str("</table></body></html>");
    page
}
