pub mod member;
pub mod quick_link;
