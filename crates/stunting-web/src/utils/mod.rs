/// Utility functions for the web interface

pub mod validation;
