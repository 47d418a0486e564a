//! Server-rendered HTML pages.
//!
//! Every page goes through [`layout`]; any value coming from a record or the
//! request is passed through [`escape`] before it is interpolated.

pub mod fruits;

pub use fruits::{edit_page, index_page, new_page, show_page};

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
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

pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        escape(title),
        body
    )
}

pub fn home_page() -> String {
    layout(
        "Fruits",
        "<h1>Welcome to the Fruits app!</h1>\n\
         <p>This app tracks fruits and whether they are ready to eat.</p>\n\
         <a href=\"/fruits\">Browse all fruits</a> | <a href=\"/fruits/new\">Add a fruit</a>",
    )
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        "<h1>Fruit not found</h1>\n<a href=\"/fruits\">Back to all fruits</a>",
    )
}

pub fn server_error_page() -> String {
    layout("Internal Server Error", "<h1>Internal Server Error</h1>")
}
