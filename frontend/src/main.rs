/// Wasm entry point. Loads the runtime config before mounting so the first
/// requests already hit the configured store.
#[cfg(target_arch = "wasm32")]
fn main() {
    use hrms_lite_frontend::{config, router};

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting hrms-lite frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("hrms-lite-frontend targets wasm32; build it with trunk.");
}
