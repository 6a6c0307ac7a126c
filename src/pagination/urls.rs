use super::PageRequest;

const PAGE_PARAM: &str = "page_number";

/// Build the listing URL with the page_number parameter, keeping any existing query
pub fn build_page_url(base_url: &str, page: PageRequest) -> String {
    let separator = determine_separator(base_url);
    format!("{}{}{}={}", base_url, separator, PAGE_PARAM, page.page_number)
}

fn determine_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000/api/games";

    #[test]
    fn test_appends_page_number() {
        let url = build_page_url(BASE, PageRequest::new(3));
        assert_eq!(url, "http://localhost:8000/api/games?page_number=3");
    }

    #[test]
    fn test_page_zero_is_forwarded() {
        let url = build_page_url(BASE, PageRequest::new(0));
        assert!(url.ends_with("?page_number=0"));
    }

    #[test]
    fn test_every_page_appears_literally() {
        for page in [1, 2, 9, 10, 99, 1000, u32::MAX] {
            let url = build_page_url(BASE, page.into());
            assert!(url.contains(&format!("page_number={}", page)), "{}", url);
        }
    }

    #[test]
    fn test_existing_query_uses_ampersand() {
        let url = build_page_url("http://backend:8000/api/games?lang=en", PageRequest::new(2));
        assert_eq!(url, "http://backend:8000/api/games?lang=en&page_number=2");
    }
}
