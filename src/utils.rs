use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{NaiveDate, Utc};

/// Value of the `Basic` authorization header for a client-credentials exchange.
///
/// Encodes `client_id:client_secret` with standard, padded base64. The
/// `Basic ` prefix is added by the caller.
///
/// # Example
///
/// ```
/// use shelfscout::utils::get_authorization;
///
/// assert_eq!(get_authorization("id", "secret"), "aWQ6c2VjcmV0");
/// ```
pub fn get_authorization(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

/// Parses a list date given on the command line.
///
/// # Arguments
///
/// * `date` - a `YYYY-MM-DD` string, or `None` for today's date (UTC)
///
/// # Errors
///
/// Returns a message naming the input when it is not a real calendar date
/// in `YYYY-MM-DD` form, e.g. `2023-02-30` or `01/01/2023`.
///
/// # Example
///
/// ```
/// use shelfscout::utils::parse_list_date;
///
/// let date = parse_list_date(Some("2023-01-01".to_string())).unwrap();
/// assert_eq!(date.to_string(), "2023-01-01");
/// assert!(parse_list_date(Some("2023-13-01".to_string())).is_err());
/// ```
pub fn parse_list_date(date: Option<String>) -> Result<NaiveDate, String> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date {}, expected YYYY-MM-DD", date_str)),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Escapes the five HTML-significant characters so untrusted marketplace
/// text can be placed in element bodies and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Content type of a static image, by file extension (case-insensitive).
/// Unknown extensions are served as `application/octet-stream`.
pub fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "svg" => "image/svg+xml",
        Some(ext) if ext == "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}
