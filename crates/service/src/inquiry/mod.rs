pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Inquiry, NewInquiry};
pub use repository::{InquiryRepository, MemoryInquiryRepository, SeaOrmInquiryRepository};
pub use service::InquiryService;
