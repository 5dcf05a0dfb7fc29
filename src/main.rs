// =============================================================================
// Talevo Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use talevo_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // Ignore if already initialized by the library entry point
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Talevo Web...");

    leptos::mount::mount_to_body(App);
}
