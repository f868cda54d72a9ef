/// UI components for the stunting web interface

pub mod card;
pub mod confirm_dialog;
pub mod data_table;
pub mod footer;
pub mod header;
pub mod map_view;
pub mod notifications;
pub mod record_editor;
pub mod shell;
pub mod sidebar;
