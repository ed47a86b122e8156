//! Registro Web
//!
//! Browser front-end of the student registration page. Binds the
//! platform-independent controller in `registro-core` to the real DOM:
//! - element handles backed by `web-sys` (`adapters`)
//! - form submit and row click listeners (`events`)
//! - a `log` backend writing to the browser console (`logger`)
//!
//! The module mounts itself when loaded (`#[wasm_bindgen(start)]`); a page
//! without the registration form is left untouched.

#[cfg(target_family = "wasm")]
mod adapters;
#[cfg(target_family = "wasm")]
mod app;
#[cfg(target_family = "wasm")]
mod config;
#[cfg(target_family = "wasm")]
mod events;
mod logger;

#[cfg(all(test, target_family = "wasm"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
