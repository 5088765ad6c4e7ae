//! Reusable UI components.
//!
//! `navbar` and `contact_dialog` are the two leaf components the pages mount;
//! `modal` is the overlay primitive under the dialog and `social` the small link
//! button the landing page places in the bar.

pub mod contact_dialog;
pub mod modal;
pub mod navbar;
pub mod social;
