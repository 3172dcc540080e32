//! Data exports offered by the admin panel.

pub mod csv;
