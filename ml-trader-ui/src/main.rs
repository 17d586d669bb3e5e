//! ML Trader Dashboard
//!
//! Trading and model monitoring UI built with Leptos (WASM).
//!
//! # Features
//!
//! - Sidebar/header layout with a static metrics dashboard
//! - Data explorer fetching market bars from the API
//! - Canvas candlestick chart that follows its container's width
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Components fetch through the `use_api` hook, which talks to the
//! `ml-trader` server over HTTP.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod hooks;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    mount_to_body(|| view! { <app::App /> });
}
