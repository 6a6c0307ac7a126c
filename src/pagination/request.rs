/// Which page of the games listing to retrieve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
}

impl PageRequest {
    pub fn new(page_number: u32) -> Self {
        Self { page_number }
    }
}

impl From<u32> for PageRequest {
    fn from(page_number: u32) -> Self {
        Self::new(page_number)
    }
}
