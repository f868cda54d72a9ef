/// Page components
///
/// Public map pages, the auth forms, and the admin/community sections.

pub mod auth;
pub mod editor;
pub mod entities;
pub mod report;
pub mod viewer;
