// Request handlers grouped by concern

pub mod contact;
pub mod pages;
pub mod theme;
