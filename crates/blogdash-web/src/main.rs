//! Browser entry point for the BlogDash dashboard
#![forbid(unsafe_code)]

use blogdash_web::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("starting BlogDash");
    leptos::mount::mount_to_body(App);
}
