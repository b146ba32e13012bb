//! Base types and error handling.
//!
//! Provides foundational types mirroring Chromium's `net/base/`:
//! - [`NetError`]: Network error codes matching `net_error_list.h`
//! - [`IoResultExt`]: Context helpers for IO errors
//!
//! [`NetError`]: neterror::NetError
//! [`IoResultExt`]: context::IoResultExt

pub mod context;
pub mod neterror;
