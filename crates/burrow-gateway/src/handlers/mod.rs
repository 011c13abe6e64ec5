mod health;
mod page;
mod url;

pub use health::health_handler;
pub use page::{index_handler, short_form_handler};
pub use url::{create_url_handler, get_url_handler, not_found_handler, redirect_handler};
