mod request;
mod urls;

pub use request::PageRequest;
pub use urls::build_page_url;
